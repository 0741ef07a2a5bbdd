//! 상품 카탈로그 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};
use crate::{
    core::AppResult,
    db::Database,
    domain::entities::Product,
    repositories::database_error,
};

const COLLECTION: &str = "products";

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: Product) -> AppResult<Product>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Product>>;

    /// 주어진 ID 중 존재하는 상품만 반환합니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Product>>;

    /// 전체 카탈로그를 이름순으로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Product>>;
}

pub struct MongoProductRepository {
    db: Arc<Database>,
}

impl MongoProductRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.collection::<Product>(COLLECTION)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn insert(&self, mut product: Product) -> AppResult<Product> {
        let result = self.collection()
            .insert_one(&product)
            .await
            .map_err(database_error)?;

        product.id = result.inserted_id.as_object_id();
        Ok(product)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Product>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(database_error)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }
}
