//! 요청 처리 및 토큰 관련 모델
//!
//! 영속화되지 않는 값 객체들입니다.

pub mod auth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use token::{IssuedToken, TokenClaims};
