//! 쇼핑 리스트 리포지토리
//!
//! 리스트 항목은 리스트 문서에 내장되어 있으므로 항목 변경은
//! 엔티티를 수정한 뒤 문서 전체를 교체(`replace`)하는 방식으로 저장합니다.
//! 교체는 읽었을 때의 `version`이 그대로일 때만 적용됩니다 (낙관적 동시성 제어).

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::{AppError, AppResult},
    db::Database,
    domain::entities::ShoppingList,
    repositories::database_error,
};

const COLLECTION: &str = "shopping_lists";

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn insert(&self, list: ShoppingList) -> AppResult<ShoppingList>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<ShoppingList>>;

    /// 소유자의 리스트를 생성 순서대로 반환합니다.
    async fn find_by_owner(&self, owner_id: &ObjectId) -> AppResult<Vec<ShoppingList>>;

    /// 저장된 버전이 `expected_version`일 때만 리스트를 교체합니다.
    ///
    /// 다른 요청이 먼저 저장했거나 리스트가 삭제되었으면 false를 반환합니다.
    async fn replace(&self, list: &ShoppingList, expected_version: i64) -> AppResult<bool>;

    /// 리스트와 내장된 항목을 삭제합니다. 삭제된 문서가 있으면 true.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

pub struct MongoShoppingListRepository {
    db: Arc<Database>,
}

impl MongoShoppingListRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ShoppingList> {
        self.db.collection::<ShoppingList>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "created_at": 1 })
            .options(IndexOptions::builder()
                .name("owner_created_at".to_string())
                .build())
            .build();

        self.collection()
            .create_index(owner_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl ShoppingListRepository for MongoShoppingListRepository {
    async fn insert(&self, mut list: ShoppingList) -> AppResult<ShoppingList> {
        let result = self.collection()
            .insert_one(&list)
            .await
            .map_err(database_error)?;

        list.id = result.inserted_id.as_object_id();
        Ok(list)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<ShoppingList>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(database_error)
    }

    async fn find_by_owner(&self, owner_id: &ObjectId) -> AppResult<Vec<ShoppingList>> {
        let cursor = self.collection()
            .find(doc! { "owner_id": *owner_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    async fn replace(&self, list: &ShoppingList, expected_version: i64) -> AppResult<bool> {
        let id = list.id
            .ok_or_else(|| AppError::InternalError("cannot replace a shopping list without id".to_string()))?;

        // version 필드가 없는 기존 문서는 0으로 읽힌다
        let filter = if expected_version == 0 {
            doc! { "_id": id, "version": { "$in": [0_i64, Bson::Null] } }
        } else {
            doc! { "_id": id, "version": expected_version }
        };

        let result = self.collection()
            .replace_one(filter, list)
            .await
            .map_err(database_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count > 0)
    }
}
