//! # 문자열 유틸리티
//!
//! 요청 필드 정리와 검증에 쓰이는 함수들입니다.

use serde::Deserialize;
use crate::core::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 앞뒤 공백을 제거한 값을 반환합니다. 비어 있으면 `ValidationError`.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  groceries ", "name").unwrap(), "groceries");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리. 빈 문자열과 공백뿐인 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
///
/// ```text
/// {"username": "  alice  "} → Some("alice")
/// {"username": ""}          → None
/// {"username": null}        → None
/// {}                        → None (serde default)
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 앞뒤 공백을 제거하여 역직렬화합니다. 길이 검증이 정리된 값을 보도록 할 때 씁니다.
///
/// `#[serde(deserialize_with = "deserialize_trimmed_string")]`
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}
