//! 세션 생명주기 서비스
//!
//! 회원가입, 로그인(검증 후 토큰 발급), 로그아웃(토큰 폐기)을 조율합니다.

use std::sync::Arc;
use log::{info, warn};
use crate::{
    core::{AppError, AppResult},
    domain::{entities::User, models::IssuedToken},
    repositories::RevocationLedger,
    services::{
        auth::{PasswordHasher, TokenService},
        users::UserService,
    },
};

pub struct SessionService {
    users: Arc<UserService>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
    ledger: Arc<dyn RevocationLedger>,
}

impl SessionService {
    pub fn new(
        users: Arc<UserService>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
        ledger: Arc<dyn RevocationLedger>,
    ) -> Self {
        Self { users, hasher, tokens, ledger }
    }

    /// 자격 증명 저장소에 위임합니다. 중복은 `ConflictError`, 입력 누락은 `ValidationError`.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        self.users.register(username, password).await
    }

    /// 자격 증명을 검증하고 새 토큰을 발급합니다.
    ///
    /// 사용자가 없을 때와 비밀번호가 틀렸을 때 모두 `InvalidCredentials`를 반환하며,
    /// 사용자가 없어도 더미 해시 검증을 수행해 응답 시간 차이를 줄입니다.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<IssuedToken> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError("username and password are required".to_string()));
        }

        let verified = match self.users.find_by_username(username).await? {
            Some(user) => self.hasher.verify(password, &user.password_hash).await,
            None => {
                self.hasher.verify_dummy(password).await;
                false
            }
        };

        if !verified {
            warn!("🔒 로그인 실패: {}", username);
            return Err(AppError::InvalidCredentials);
        }

        let issued = self.tokens.issue(username)?;
        info!("🔑 로그인 성공: {} (jti={})", username, issued.jti);
        Ok(issued)
    }

    /// 현재 인증된 토큰의 jti를 폐기합니다.
    ///
    /// 원장 쓰기가 확인된 뒤에만 반환하므로, 이후 요청은 반드시 폐기 상태를 봅니다.
    pub async fn logout(&self, jti: &str) -> AppResult<()> {
        self.ledger.revoke(jti).await?;
        info!("👋 로그아웃: 토큰 폐기 완료 (jti={})", jti);
        Ok(())
    }
}
