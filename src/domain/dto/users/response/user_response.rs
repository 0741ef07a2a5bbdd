use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::models::{AuthenticatedUser, IssuedToken};

/// 단순 성공 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub token_type: String,
    /// 토큰 유효 시간(초)
    pub expires_in: i64,
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            message: "login successful".to_string(),
            expires_in: issued.expires_in(),
            token: issued.token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// 현재 인증 정보 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub username: String,
    pub token_expires_at: DateTime<Utc>,
}

impl From<AuthenticatedUser> for MeResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            username: user.username,
            token_expires_at: user.expires_at,
        }
    }
}
