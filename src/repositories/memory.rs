//! 인메모리 리포지토리 구현
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! 모든 상태는 인스턴스에 속하므로 테스트마다 새 저장소를 만들면 서로 격리됩니다.
//! 프로세스 재시작 시 데이터는 유지되지 않습니다.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::{AppError, AppResult},
    domain::entities::{Product, ShoppingList, User},
    repositories::{ProductRepository, RevocationLedger, ShoppingListRepository, UserRepository},
};

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::InternalError("in-memory store lock poisoned".to_string())
}

/// 사용자명을 키로 하는 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(username).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        // 중복 검사와 삽입을 같은 쓰기 잠금 안에서 수행한다
        let mut users = self.users.write().map_err(poisoned)?;
        if users.contains_key(&user.username) {
            return Err(AppError::ConflictError(format!(
                "username '{}' is already taken",
                user.username
            )));
        }

        user.id = Some(ObjectId::new());
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryRevocationLedger {
    revoked: RwLock<HashSet<String>>,
}

#[async_trait]
impl RevocationLedger for InMemoryRevocationLedger {
    async fn revoke(&self, jti: &str) -> AppResult<()> {
        self.revoked.write().map_err(poisoned)?.insert(jti.to_string());
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        Ok(self.revoked.read().map_err(poisoned)?.contains(jti))
    }
}

#[derive(Default)]
pub struct InMemoryShoppingListRepository {
    lists: RwLock<HashMap<ObjectId, ShoppingList>>,
}

#[async_trait]
impl ShoppingListRepository for InMemoryShoppingListRepository {
    async fn insert(&self, mut list: ShoppingList) -> AppResult<ShoppingList> {
        let id = ObjectId::new();
        list.id = Some(id);
        self.lists.write().map_err(poisoned)?.insert(id, list.clone());
        Ok(list)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<ShoppingList>> {
        Ok(self.lists.read().map_err(poisoned)?.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &ObjectId) -> AppResult<Vec<ShoppingList>> {
        let lists = self.lists.read().map_err(poisoned)?;
        let mut owned: Vec<ShoppingList> = lists
            .values()
            .filter(|list| list.is_owned_by(owner_id))
            .cloned()
            .collect();

        // ObjectId는 생성 시각 순으로 증가한다
        owned.sort_by_key(|list| list.id);
        Ok(owned)
    }

    async fn replace(&self, list: &ShoppingList, expected_version: i64) -> AppResult<bool> {
        let id = list.id
            .ok_or_else(|| AppError::InternalError("cannot replace a shopping list without id".to_string()))?;

        let mut lists = self.lists.write().map_err(poisoned)?;
        match lists.get_mut(&id) {
            Some(stored) if stored.version == expected_version => {
                *stored = list.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.lists.write().map_err(poisoned)?.remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ObjectId, Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, mut product: Product) -> AppResult<Product> {
        let id = ObjectId::new();
        product.id = Some(id);
        self.products.write().map_err(poisoned)?.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Product>> {
        Ok(self.products.read().map_err(poisoned)?.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
