//! 요청 인증 게이트
//!
//! 요청 하나에 대해 다음 단계를 순서대로 수행하며, 어느 단계에서든 실패하면
//! 즉시 거부합니다. 재시도는 하지 않습니다.
//!
//! ```text
//! Unauthenticated ─(헤더 추출)→ TokenPresent ─(서명/만료 검증)→ Decoded
//!                 ─(폐기 원장 조회)→ Checked ─→ Authorized
//!        │                 │                      │
//!        └───────── Rejected (MissingCredential / Malformed / InvalidSignature
//!                             / Expired / TokenRevoked)
//! ```
//!
//! 만료 검사가 폐기 검사보다 먼저 수행되므로, 만료된 토큰은 폐기 여부와
//! 상관없이 항상 `Expired`로 거부됩니다.

use std::sync::Arc;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::{
    core::AppError,
    domain::models::AuthenticatedUser,
    repositories::RevocationLedger,
    services::auth::{TokenError, TokenService},
};

/// 인증 거부 사유. 모두 401로 응답됩니다.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    #[error("missing authorization header")]
    MissingCredential,
    #[error("authorization header must be 'Bearer <token>'")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token has been revoked")]
    TokenRevoked,
}

impl AuthRejection {
    /// 응답 본문의 기계 판독용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuthRejection::MissingCredential => "missing_credential",
            AuthRejection::Malformed => "malformed_token",
            AuthRejection::InvalidSignature => "invalid_signature",
            AuthRejection::Expired => "token_expired",
            AuthRejection::TokenRevoked => "token_revoked",
        }
    }
}

impl From<TokenError> for AuthRejection {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Malformed => AuthRejection::Malformed,
            TokenError::InvalidSignature => AuthRejection::InvalidSignature,
            TokenError::Expired => AuthRejection::Expired,
        }
    }
}

impl ResponseError for AuthRejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "error": self.code(),
            "message": self.to_string()
        }))
    }
}

/// 게이트 실패: 인증 거부 또는 저장소 조회 실패
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Rejected(#[from] AuthRejection),
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl ResponseError for GateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GateError::Rejected(rejection) => rejection.status_code(),
            GateError::Internal(error) => error.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            GateError::Rejected(rejection) => rejection.error_response(),
            GateError::Internal(error) => error.error_response(),
        }
    }
}

pub struct AuthGate {
    tokens: Arc<TokenService>,
    ledger: Arc<dyn RevocationLedger>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>, ledger: Arc<dyn RevocationLedger>) -> Self {
        Self { tokens, ledger }
    }

    /// `Authorization` 헤더 값을 검증하고 인증된 사용자를 반환합니다.
    pub async fn authorize(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, GateError> {
        let header = authorization.ok_or(AuthRejection::MissingCredential)?;
        let token = extract_bearer_token(header)?;
        log::debug!("인증 게이트: 토큰 확인");

        let claims = self.tokens.decode(token).map_err(AuthRejection::from)?;
        log::debug!("인증 게이트: 토큰 디코딩 완료 (jti={})", claims.jti);

        if self.ledger.is_revoked(&claims.jti).await? {
            log::warn!("🚫 폐기된 토큰 사용 시도: 사용자 {}, jti {}", claims.sub, claims.jti);
            return Err(AuthRejection::TokenRevoked.into());
        }

        log::debug!("인증 게이트: 인증 성공 (사용자 {})", claims.sub);
        Ok(AuthenticatedUser::from(claims))
    }
}

/// `Bearer <token>` 형식에서 토큰 부분을 추출합니다.
pub fn extract_bearer_token(header: &str) -> Result<&str, AuthRejection> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthRejection::Malformed)?
        .trim();

    if token.is_empty() {
        return Err(AuthRejection::Malformed);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;
    use crate::core::AppResult;
    use crate::repositories::memory::InMemoryRevocationLedger;

    /// 저장소 연결이 끊긴 원장
    struct UnreachableLedger;

    #[async_trait]
    impl RevocationLedger for UnreachableLedger {
        async fn revoke(&self, _jti: &str) -> AppResult<()> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn is_revoked(&self, _jti: &str) -> AppResult<bool> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    const SECRET: &str = "gate-test-secret-of-sufficient-length";

    fn gate() -> (AuthGate, Arc<TokenService>, Arc<dyn RevocationLedger>) {
        let tokens = Arc::new(TokenService::new(SECRET, Duration::minutes(15)));
        let ledger: Arc<dyn RevocationLedger> = Arc::new(InMemoryRevocationLedger::default());
        (AuthGate::new(tokens.clone(), ledger.clone()), tokens, ledger)
    }

    fn rejection(result: Result<AuthenticatedUser, GateError>) -> AuthRejection {
        match result {
            Err(GateError::Rejected(rejection)) => rejection,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic dXNlcjpwdw=="), Err(AuthRejection::Malformed));
        assert_eq!(extract_bearer_token("Bearer "), Err(AuthRejection::Malformed));
        assert_eq!(extract_bearer_token("abc.def.ghi"), Err(AuthRejection::Malformed));
    }

    #[actix_web::test]
    async fn test_valid_token_is_authorized() {
        let (gate, tokens, _) = gate();
        let issued = tokens.issue("alice").unwrap();

        let user = gate.authorize(Some(&format!("Bearer {}", issued.token))).await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.jti, issued.jti);
    }

    #[actix_web::test]
    async fn test_missing_header_is_missing_credential() {
        let (gate, _, _) = gate();

        assert_eq!(rejection(gate.authorize(None).await), AuthRejection::MissingCredential);
    }

    #[actix_web::test]
    async fn test_garbage_token_is_malformed() {
        let (gate, _, _) = gate();

        assert_eq!(rejection(gate.authorize(Some("Bearer garbage")).await), AuthRejection::Malformed);
    }

    #[actix_web::test]
    async fn test_revoked_token_is_rejected_although_it_still_decodes() {
        let (gate, tokens, ledger) = gate();
        let issued = tokens.issue("alice").unwrap();
        ledger.revoke(&issued.jti).await.unwrap();

        assert!(tokens.decode(&issued.token).is_ok());
        assert_eq!(
            rejection(gate.authorize(Some(&format!("Bearer {}", issued.token))).await),
            AuthRejection::TokenRevoked
        );
    }

    #[actix_web::test]
    async fn test_expired_token_is_expired_regardless_of_revocation() {
        let (gate, _, ledger) = gate();
        let stale = TokenService::new(SECRET, Duration::seconds(-30)).issue("alice").unwrap();
        let header = format!("Bearer {}", stale.token);

        assert_eq!(rejection(gate.authorize(Some(&header)).await), AuthRejection::Expired);

        ledger.revoke(&stale.jti).await.unwrap();
        assert_eq!(rejection(gate.authorize(Some(&header)).await), AuthRejection::Expired);
    }

    #[test]
    fn test_rejections_render_unauthorized() {
        for rejection in [
            AuthRejection::MissingCredential,
            AuthRejection::Malformed,
            AuthRejection::InvalidSignature,
            AuthRejection::Expired,
            AuthRejection::TokenRevoked,
        ] {
            assert_eq!(rejection.error_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_ledger_failure_is_internal_error() {
        let tokens = Arc::new(TokenService::new(SECRET, Duration::minutes(15)));
        let gate = AuthGate::new(tokens.clone(), Arc::new(UnreachableLedger));
        let issued = tokens.issue("alice").unwrap();

        let err = gate.authorize(Some(&format!("Bearer {}", issued.token))).await.unwrap_err();

        assert!(matches!(err, GateError::Internal(AppError::DatabaseError(_))));
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_ledger_is_not_consulted_for_expired_token() {
        let gate = AuthGate::new(
            Arc::new(TokenService::new(SECRET, Duration::minutes(15))),
            Arc::new(UnreachableLedger),
        );
        let stale = TokenService::new(SECRET, Duration::seconds(-30)).issue("alice").unwrap();

        assert_eq!(
            rejection(gate.authorize(Some(&format!("Bearer {}", stale.token))).await),
            AuthRejection::Expired
        );
    }
}
