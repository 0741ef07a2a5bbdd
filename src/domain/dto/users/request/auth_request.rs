//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 요청 본문을 매핑합니다.
//! 필드 누락은 역직렬화 단계가 아닌 서비스 계층에서 검증하여
//! 일관된 `ValidationError`로 응답합니다.
use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입/로그인 공통 요청 구조체
///
/// 이전 클라이언트 호환을 위해 `nombreUsuario`, `contrasena` 필드명도 허용합니다.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    /// 앞뒤 공백이 제거되며, 빈 문자열은 `None`으로 처리됩니다.
    #[serde(default, alias = "nombreUsuario", deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    /// 비밀번호는 공백을 포함해 그대로 사용합니다.
    #[serde(default, alias = "contrasena")]
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_english_field_names() {
        let json = r#"{"username": "  alice ", "password": " pw1 "}"#;
        let request: CredentialsRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username(), "alice");
        assert_eq!(request.password(), " pw1 ");
    }

    #[test]
    fn test_accepts_legacy_field_names() {
        let json = r#"{"nombreUsuario": "alice", "contrasena": "pw1"}"#;
        let request: CredentialsRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username(), "alice");
        assert_eq!(request.password(), "pw1");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let request: CredentialsRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.username(), "");
        assert_eq!(request.password(), "");
    }
}
