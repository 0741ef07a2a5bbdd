//! JWT 클레임 및 발급 결과 구조체

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// 토큰 페이로드
///
/// RFC 7519 등록 클레임 중 `jti`, `sub`, `iat`, `exp`만 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰 고유 ID. 폐기 키로 사용됩니다.
    pub jti: String,
    /// 사용자명
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// 발급된 토큰과 호출자가 참고할 메타데이터
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// 인코딩된 JWT 문자열
    pub token: String,
    pub jti: String,
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// 남은 유효 시간(초)
    pub fn expires_in(&self) -> i64 {
        (self.expires_at - self.issued_at).num_seconds()
    }
}
