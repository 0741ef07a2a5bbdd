//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 및 만료 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="at-least-32-bytes-of-random-secret-material"
//! export JWT_EXPIRATION_MINUTES="15"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! JwtConfig::validate()?;
//! let tokens = TokenService::new(JwtConfig::secret(), JwtConfig::expiration());
//! ```

use std::env;
use chrono::Duration;
use crate::config::Environment;

/// 개발 환경 전용 기본 서명 키
const DEVELOPMENT_SECRET: &str = "development-only-secret-change-me-in-production";

/// 프로덕션에서 허용하는 최소 서명 키 길이 (바이트)
pub const MIN_SECRET_LENGTH: usize = 32;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 키를 반환합니다.
    ///
    /// `JWT_SECRET`이 설정되지 않은 경우 개발용 기본값을 사용하며 경고를 남깁니다.
    /// 프로덕션에서는 [`JwtConfig::validate`]가 서버 시작을 막습니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ JWT_SECRET 이 설정되지 않았습니다. 개발용 기본 키를 사용합니다");
            DEVELOPMENT_SECRET.to_string()
        })
    }

    /// 액세스 토큰 유효 시간(분)을 반환합니다. 기본값: 15
    pub fn expiration_minutes() -> i64 {
        env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(15)
    }

    /// 토큰 유효 시간을 `Duration`으로 반환합니다.
    pub fn expiration() -> Duration {
        Duration::minutes(Self::expiration_minutes())
    }

    /// 현재 환경에서 서명 키 설정이 안전한지 검사합니다.
    ///
    /// # Errors
    ///
    /// 프로덕션 환경에서 `JWT_SECRET`이 없거나 [`MIN_SECRET_LENGTH`]보다 짧으면
    /// 설명 메시지와 함께 실패합니다.
    pub fn validate() -> Result<(), String> {
        Self::validate_for(&Environment::current(), env::var("JWT_SECRET").ok().as_deref())
    }

    /// 특정 환경과 서명 키 값에 대해 검사합니다.
    pub fn validate_for(environment: &Environment, secret: Option<&str>) -> Result<(), String> {
        if *environment != Environment::Production {
            return Ok(());
        }

        match secret {
            None => Err("JWT_SECRET must be set in production".to_string()),
            Some(s) if s.len() < MIN_SECRET_LENGTH => Err(format!(
                "JWT_SECRET must be at least {} bytes in production",
                MIN_SECRET_LENGTH
            )),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_secret_in_production() {
        assert!(JwtConfig::validate_for(&Environment::Production, None).is_err());
        assert!(JwtConfig::validate_for(&Environment::Production, Some("short")).is_err());

        let strong = "x".repeat(MIN_SECRET_LENGTH);
        assert!(JwtConfig::validate_for(&Environment::Production, Some(&strong)).is_ok());
    }

    #[test]
    fn test_validate_is_lenient_outside_production() {
        assert!(JwtConfig::validate_for(&Environment::Development, None).is_ok());
        assert!(JwtConfig::validate_for(&Environment::Test, Some("short")).is_ok());
    }

    #[test]
    fn test_expiration_default() {
        if env::var("JWT_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::expiration_minutes(), 15);
            assert_eq!(JwtConfig::expiration(), Duration::minutes(15));
        }
    }
}
