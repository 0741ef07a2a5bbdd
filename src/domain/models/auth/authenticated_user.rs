//! 인증된 요청의 사용자 정보
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰 검증에 성공하면
//! Request Extensions에 저장하고, 핸들러는 extractor로 꺼내 사용합니다.
//!
//! ```rust,ignore
//! #[post("/logout")]
//! async fn logout(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     session_service.logout(&user.jti).await?;
//!     ...
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::AppError;
use crate::domain::models::token::TokenClaims;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰 subject (사용자명)
    pub username: String,
    /// 현재 요청에 사용된 토큰의 ID. 로그아웃 시 폐기 대상입니다.
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        let expires_at = claims.expires_at();
        Self {
            username: claims.sub,
            jti: claims.jti,
            expires_at,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        // 미들웨어 없이 라우트가 등록된 경우에도 인증 없이 통과하지 않는다
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "missing authenticated user".to_string()
            ))),
        }
    }
}
