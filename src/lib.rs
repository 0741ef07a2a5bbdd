//! 쇼핑 리스트 서비스 백엔드
//!
//! 사용자별 쇼핑 리스트와 공유 상품 카탈로그를 관리하는 REST API입니다.
//! 모든 보호된 요청은 HS256 JWT로 인증하며, 로그아웃한 토큰은 만료 전이라도
//! 폐기 원장에 기록되어 즉시 거부됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 세션, 인증 게이트, 쇼핑 리스트, 카탈로그
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 트레이트 객체 (MongoDB / 메모리)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 / 폐기 캐시
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use shopping_list_service::core::AppContext;
//! use shopping_list_service::services::auth::{PasswordHasher, TokenService};
//!
//! let context = AppContext::in_memory(PasswordHasher::new(4)?, TokenService::from_config());
//! context.sessions.register("alice", "pw1").await?;
//! let issued = context.sessions.login("alice", "pw1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
