//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소 백엔드, 서버, 환경 및 패스워드 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    /// 알 수 없는 값과 미설정 시 기본값
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 실행 환경을 감지합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위 안에 있으면 그 값을, 아니면
    /// [`PasswordConfig::bcrypt_cost_for_env`]의 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            match cost_str.parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => return cost,
                _ => log::warn!("BCRYPT_COST={} 는 허용 범위(4-15)를 벗어났습니다. 환경 기본값을 사용합니다", cost_str),
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 환경별 bcrypt cost 기본값
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// `PORT` 환경 변수. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080)
    }

    /// `HOST` 환경 변수. 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB 영속 저장소 (선택적으로 Redis 캐시 사용)
    MongoDb,
    /// 프로세스 메모리 저장소. 재시작 시 데이터가 사라집니다.
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

/// 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND` 환경 변수로 저장소 백엔드를 선택합니다. 기본값: `mongodb`
    pub fn backend() -> StorageBackend {
        StorageBackend::from_str(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    /// 폐기 토큰 캐시에 사용할 Redis URL
    ///
    /// 설정되지 않은 경우 캐시 없이 MongoDB만 사용합니다.
    pub fn redis_url() -> Option<String> {
        env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())
    }

    /// 폐기 토큰 캐시 항목의 TTL(초)
    ///
    /// 기본값은 토큰 유효 시간입니다. 그 이후에는 토큰이 만료되어
    /// 캐시 항목이 더 이상 필요하지 않습니다.
    pub fn revocation_cache_ttl_seconds(token_ttl_seconds: u64) -> u64 {
        env::var("REVOCATION_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(token_ttl_seconds.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("IN-MEMORY"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::MongoDb);
    }

    #[test]
    fn test_revocation_cache_ttl_defaults_to_token_ttl() {
        if env::var("REVOCATION_CACHE_TTL_SECONDS").is_err() {
            assert_eq!(StorageConfig::revocation_cache_ttl_seconds(900), 900);
            assert_eq!(StorageConfig::revocation_cache_ttl_seconds(0), 1);
        }
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
