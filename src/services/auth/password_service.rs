//! bcrypt 기반 패스워드 해싱
//!
//! 해시 문자열에는 호출마다 새로 생성된 salt와 cost가 포함되므로
//! 같은 비밀번호라도 매번 다른 해시가 만들어집니다.
//! bcrypt는 72바이트 이후를 무시하므로 잘라내지 않는 변형만 사용합니다.

use actix_web::web;
use crate::{
    config::PasswordConfig,
    core::{AppResult, ErrorContext},
};

/// 존재하지 않는 사용자 로그인 시 검증에 사용하는 비밀번호
const DUMMY_PASSWORD: &str = "dummy-password-for-timing-equalization";

/// bcrypt가 처리할 수 있는 최대 비밀번호 길이 (바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// 같은 cost로 만든 더미 해시. 사용자 존재 여부가 응답 시간으로 드러나지 않게 한다.
    dummy_hash: String,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> AppResult<Self> {
        let dummy_hash = bcrypt::non_truncating_hash(DUMMY_PASSWORD, cost).context("password hashing failed")?;

        Ok(Self { cost, dummy_hash })
    }

    /// 현재 환경의 `BCRYPT_COST` 설정으로 생성합니다.
    pub fn from_config() -> AppResult<Self> {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    /// 비밀번호를 해싱합니다. bcrypt 연산은 블로킹 스레드 풀에서 실행됩니다.
    ///
    /// [`MAX_PASSWORD_BYTES`]를 넘는 비밀번호는 에러입니다.
    pub async fn hash(&self, raw_password: &str) -> AppResult<String> {
        let raw_password = raw_password.to_string();
        let cost = self.cost;

        web::block(move || bcrypt::non_truncating_hash(raw_password, cost))
            .await
            .context("password hashing task failed")?
            .context("password hashing failed")
    }

    /// 비밀번호가 해시와 일치하는지 검사합니다.
    ///
    /// 잘못된 형식의 해시, 72바이트를 넘는 비밀번호를 포함한 모든 실패는 `false`로 처리합니다.
    pub async fn verify(&self, raw_password: &str, hash: &str) -> bool {
        let raw_password = raw_password.to_string();
        let hash = hash.to_string();

        web::block(move || bcrypt::non_truncating_verify(raw_password, &hash).unwrap_or(false))
            .await
            .unwrap_or(false)
    }

    /// 더미 해시에 대해 검증을 수행하고 결과는 버립니다.
    pub async fn verify_dummy(&self, raw_password: &str) {
        let _ = self.verify(raw_password, &self.dummy_hash).await;
    }
}
