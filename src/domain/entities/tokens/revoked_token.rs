//! 폐기된 토큰 엔티티
//!
//! 로그아웃 시 생성되며 이후 모든 인증 요청에서 조회됩니다.
//! 수정되지 않으며 정리(pruning)되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 폐기 키로 사용되는 토큰 고유 ID
    pub jti: String,
    pub revoked_at: DateTime,
}

impl RevokedToken {
    pub fn new(jti: impl Into<String>) -> Self {
        Self {
            id: None,
            jti: jti.into(),
            revoked_at: DateTime::now(),
        }
    }
}
