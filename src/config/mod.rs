//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소, 서버, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 서명 및 만료 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key-of-at-least-32-bytes"
//! export JWT_EXPIRATION_MINUTES="15"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"     # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="shopping_lists"
//! export REDIS_URL="redis://localhost:6379"   # 선택 사항
//!
//! # 보안 설정
//! export BCRYPT_COST="12"              # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
