//! 상품 카탈로그 엔티티
//!
//! 모든 사용자가 공유하는 카탈로그이며 쇼핑 리스트 항목이 참조합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 측정 단위 (예: "kg", "unit", "liter")
    pub unit: String,
    pub created_at: DateTime,
}

impl Product {
    pub fn new(name: String, unit: String) -> Self {
        Self {
            id: None,
            name,
            unit,
            created_at: DateTime::now(),
        }
    }
}
