//! User Entity Implementation
//!
//! 로컬 계정 사용자 엔티티입니다. `users` 컬렉션에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 등록된 사용자
///
/// `username`은 생성 후 변경되지 않으며 토큰의 subject로 사용됩니다.
/// 원본 비밀번호는 저장하지 않고 bcrypt 해시만 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성. ID는 저장소에서 할당됩니다.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id_until_persisted() {
        let user = User::new("alice".to_string(), "$2b$04$hash".to_string());

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_id_is_serialized_as_underscore_id() {
        let mut user = User::new("alice".to_string(), "hash".to_string());
        let id = ObjectId::new();
        user.id = Some(id);

        let document = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), id);
        assert_eq!(user.id_string(), Some(id.to_hex()));
    }
}
