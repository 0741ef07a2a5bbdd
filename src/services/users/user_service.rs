//! # 사용자 관리 서비스 (자격 증명 저장소)
//!
//! 사용자 등록과 사용자명 조회를 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 원본 비밀번호는 저장하지 않습니다
//! - **중복 방지**: 사용자명 유니크 제약 (저장소 수준에서도 보장)
//! - **입력 검증**: 사용자명 앞뒤 공백 제거, 빈 값 거부, 72바이트 초과 비밀번호 거부

use std::sync::Arc;
use log::info;
use crate::{
    core::{AppError, AppResult},
    domain::entities::User,
    repositories::UserRepository,
    services::auth::{PasswordHasher, MAX_PASSWORD_BYTES},
    utils::string_utils::validate_required_string,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 사용자명 또는 비밀번호가 비어 있거나 비밀번호가 72바이트를 넘는 경우
    /// * `ConflictError` - 이미 존재하는 사용자명
    pub async fn register(&self, username: &str, raw_password: &str) -> AppResult<User> {
        let username = validate_required_string(username, "username")?;
        if raw_password.is_empty() {
            return Err(AppError::ValidationError("password is required".to_string()));
        }
        if raw_password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(format!(
                "password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        // 해싱 비용을 아끼기 위한 사전 검사. 최종 판단은 저장소가 한다.
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::ConflictError(format!("username '{}' is already taken", username)));
        }

        let password_hash = self.hasher.hash(raw_password).await?;
        let user = self.users.insert(User::new(username, password_hash)).await?;

        info!("👤 사용자 등록 완료: {}", user.username);
        Ok(user)
    }

    /// 사용자명 완전 일치 조회
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find_by_username(username).await
    }

    /// 토큰 subject로 사용자를 찾습니다. 없으면 `NotFound`.
    pub async fn require_by_username(&self, username: &str) -> AppResult<User> {
        self.find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }
}
