use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_trimmed_string;

/// 상품 등록 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 20, message = "unit must be between 1 and 20 characters"))]
    pub unit: String,
}
