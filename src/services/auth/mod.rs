//! 인증 서비스 모듈
//!
//! - [`PasswordHasher`] - bcrypt 해싱/검증
//! - [`TokenService`] - JWT 발급/디코딩
//! - [`AuthGate`] - 요청별 토큰 검증 (서명, 만료, 폐기 여부)
//! - [`SessionService`] - 회원가입, 로그인, 로그아웃 조율

pub mod password_service;
pub mod token_service;
pub mod auth_gate;
pub mod session_service;

pub use password_service::{PasswordHasher, MAX_PASSWORD_BYTES};
pub use token_service::{TokenError, TokenService};
pub use auth_gate::{extract_bearer_token, AuthGate, AuthRejection, GateError};
pub use session_service::SessionService;
