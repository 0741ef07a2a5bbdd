//! # 사용자 리포지토리
//!
//! 자격 증명 저장소의 영속 계층입니다. `users` 컬렉션의 `username`에는
//! 유니크 인덱스가 걸려 있어 동시 가입 요청도 한 건만 성공합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::{AppError, AppResult},
    db::Database,
    domain::entities::User,
    repositories::{database_error, is_duplicate_key_error},
};

const COLLECTION: &str = "users";

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자명 완전 일치 조회
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 할당된 엔티티를 반환합니다.
    ///
    /// 같은 사용자명이 이미 있으면 `ConflictError`로 실패합니다.
    async fn insert(&self, user: User) -> AppResult<User>;
}

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }

    /// 사용자명 유니크 인덱스를 생성합니다.
    ///
    /// 이미 중복 데이터가 있는 경우 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(username_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}

fn duplicate_username(username: &str) -> AppError {
    AppError::ConflictError(format!("username '{}' is already taken", username))
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(database_error)
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(duplicate_username(&user.username));
        }

        // 조회와 삽입 사이의 경쟁은 유니크 인덱스가 막는다
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    duplicate_username(&user.username)
                } else {
                    database_error(e)
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }
}
