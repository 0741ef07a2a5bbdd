//! 쇼핑 리스트 서비스
//!
//! 모든 연산은 인증된 사용자명을 기준으로 소유자를 확인합니다.
//! 다른 사용자의 리스트는 존재 여부를 드러내지 않도록 `NotFound`로 응답합니다.
//!
//! 리스트 변경은 읽기, 수정, 버전 조건부 교체 순서로 진행되며
//! 그 사이 다른 요청이 저장했다면 최신 상태를 다시 읽어 재시도합니다.

use std::collections::HashMap;
use std::sync::Arc;
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use crate::{
    core::{AppError, AppResult},
    domain::{
        dto::ShoppingListResponse,
        entities::{Product, ShoppingList},
    },
    repositories::{parse_object_id, ProductRepository, ShoppingListRepository},
    services::users::UserService,
    utils::string_utils::validate_required_string,
};

/// 동시 수정 충돌 시 재시도 횟수
const MAX_UPDATE_ATTEMPTS: usize = 5;

pub struct ShoppingListService {
    lists: Arc<dyn ShoppingListRepository>,
    products: Arc<dyn ProductRepository>,
    users: Arc<UserService>,
}

impl ShoppingListService {
    pub fn new(
        lists: Arc<dyn ShoppingListRepository>,
        products: Arc<dyn ProductRepository>,
        users: Arc<UserService>,
    ) -> Self {
        Self { lists, products, users }
    }

    pub async fn create(&self, username: &str, name: &str) -> AppResult<ShoppingListResponse> {
        let owner_id = self.owner_id(username).await?;
        let name = validate_required_string(name, "name")?;

        let list = self.lists.insert(ShoppingList::new(owner_id, name)).await?;
        info!("🛒 쇼핑 리스트 생성: {} (소유자 {})", list.name, username);

        self.render(list).await
    }

    /// 사용자의 리스트를 생성 순서대로 반환합니다.
    pub async fn list(&self, username: &str) -> AppResult<Vec<ShoppingListResponse>> {
        let owner_id = self.owner_id(username).await?;
        let lists = self.lists.find_by_owner(&owner_id).await?;

        let product_ids: Vec<ObjectId> = lists
            .iter()
            .flat_map(|list| list.items.iter().map(|item| item.product_id))
            .collect();
        let catalog = self.catalog(&product_ids).await?;

        Ok(lists
            .into_iter()
            .map(|list| ShoppingListResponse::from_list(list, &catalog))
            .collect())
    }

    /// 리스트와 항목을 함께 삭제합니다.
    pub async fn delete(&self, username: &str, list_id: &str) -> AppResult<()> {
        let list = self.owned_list(username, list_id).await?;
        let id = list.id.ok_or_else(|| AppError::InternalError("stored list has no id".to_string()))?;

        if !self.lists.delete(&id).await? {
            return Err(AppError::NotFound("shopping list not found".to_string()));
        }

        info!("🗑️ 쇼핑 리스트 삭제: {} (소유자 {})", list_id, username);
        Ok(())
    }

    /// 리스트 전체를 구매 완료 처리합니다.
    pub async fn mark_completed(&self, username: &str, list_id: &str) -> AppResult<ShoppingListResponse> {
        let list = self
            .update_list(username, list_id, |list| {
                list.mark_completed();
                Ok(())
            })
            .await?;

        self.render(list).await
    }

    /// 카탈로그의 상품을 리스트에 추가합니다. 이미 담긴 상품이면 수량이 누적됩니다.
    pub async fn add_item(
        &self,
        username: &str,
        list_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> AppResult<ShoppingListResponse> {
        if quantity == 0 {
            return Err(AppError::ValidationError("quantity must be at least 1".to_string()));
        }

        // 리스트 소유 확인이 상품 확인보다 먼저다
        self.owned_list(username, list_id).await?;
        let product_id = parse_object_id(product_id)?;

        if self.products.find_by_id(&product_id).await?.is_none() {
            return Err(AppError::NotFound("product not found".to_string()));
        }

        let list = self
            .update_list(username, list_id, |list| {
                list.add_item(product_id, quantity);
                Ok(())
            })
            .await?;

        self.render(list).await
    }

    pub async fn remove_item(
        &self,
        username: &str,
        list_id: &str,
        product_id: &str,
    ) -> AppResult<ShoppingListResponse> {
        let product_id = parse_object_id(product_id)?;

        let list = self
            .update_list(username, list_id, |list| {
                if list.remove_item(&product_id) {
                    Ok(())
                } else {
                    Err(AppError::NotFound("item not found in shopping list".to_string()))
                }
            })
            .await?;

        self.render(list).await
    }

    /// 항목 하나를 구매 처리합니다. 마지막 미구매 항목이면 리스트도 완료됩니다.
    pub async fn mark_item_purchased(
        &self,
        username: &str,
        list_id: &str,
        product_id: &str,
    ) -> AppResult<ShoppingListResponse> {
        let product_id = parse_object_id(product_id)?;

        let list = self
            .update_list(username, list_id, |list| {
                if list.mark_item_purchased(&product_id) {
                    Ok(())
                } else {
                    Err(AppError::NotFound("item not found in shopping list".to_string()))
                }
            })
            .await?;

        self.render(list).await
    }

    async fn owner_id(&self, username: &str) -> AppResult<ObjectId> {
        self.users
            .require_by_username(username)
            .await?
            .id
            .ok_or_else(|| AppError::InternalError("stored user has no id".to_string()))
    }

    async fn owned_list(&self, username: &str, list_id: &str) -> AppResult<ShoppingList> {
        let owner_id = self.owner_id(username).await?;
        let list_id = parse_object_id(list_id)?;

        self.lists
            .find_by_id(&list_id)
            .await?
            .filter(|list| list.is_owned_by(&owner_id))
            .ok_or_else(|| AppError::NotFound("shopping list not found".to_string()))
    }

    /// 최신 리스트에 `apply`를 적용하고 버전 조건부로 저장합니다.
    ///
    /// 읽은 뒤 다른 요청이 먼저 저장했다면 다시 읽어서 적용합니다.
    /// 재시도가 모두 충돌하면 `ConflictError`.
    async fn update_list<F>(&self, username: &str, list_id: &str, apply: F) -> AppResult<ShoppingList>
    where
        F: Fn(&mut ShoppingList) -> AppResult<()>,
    {
        for attempt in 1..=MAX_UPDATE_ATTEMPTS {
            let mut list = self.owned_list(username, list_id).await?;
            let expected_version = list.version;

            apply(&mut list)?;
            list.version = expected_version + 1;

            if self.lists.replace(&list, expected_version).await? {
                return Ok(list);
            }
            debug!("🔁 리스트 {} 동시 수정 감지, 재시도 {}/{}", list_id, attempt, MAX_UPDATE_ATTEMPTS);
        }

        warn!("⚠️ 리스트 {} 저장 충돌이 계속되어 포기합니다", list_id);
        Err(AppError::ConflictError(
            "shopping list was modified concurrently, please retry".to_string(),
        ))
    }

    async fn catalog(&self, product_ids: &[ObjectId]) -> AppResult<HashMap<ObjectId, Product>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(self.products
            .find_by_ids(product_ids)
            .await?
            .into_iter()
            .filter_map(|product| product.id.map(|id| (id, product)))
            .collect())
    }

    async fn render(&self, list: ShoppingList) -> AppResult<ShoppingListResponse> {
        let product_ids: Vec<ObjectId> = list.items.iter().map(|item| item.product_id).collect();
        let catalog = self.catalog(&product_ids).await?;

        Ok(ShoppingListResponse::from_list(list, &catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{
        InMemoryProductRepository, InMemoryShoppingListRepository, InMemoryUserRepository,
    };
    use crate::services::auth::PasswordHasher;

    use async_trait::async_trait;

    struct Fixture {
        service: ShoppingListService,
        products: Arc<dyn ProductRepository>,
    }

    async fn fixture() -> Fixture {
        fixture_with(Arc::new(InMemoryShoppingListRepository::default())).await
    }

    async fn fixture_with(lists: Arc<dyn ShoppingListRepository>) -> Fixture {
        let users = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(PasswordHasher::new(4).unwrap()),
        ));
        users.register("alice", "pw1").await.unwrap();
        users.register("bob", "pw2").await.unwrap();

        let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::default());
        let service = ShoppingListService::new(lists, products.clone(), users);

        Fixture { service, products }
    }

    /// 읽은 직후 다른 태스크에 실행을 양보하는 저장소
    #[derive(Default)]
    struct YieldingLists {
        inner: InMemoryShoppingListRepository,
    }

    #[async_trait]
    impl ShoppingListRepository for YieldingLists {
        async fn insert(&self, list: ShoppingList) -> AppResult<ShoppingList> {
            self.inner.insert(list).await
        }

        async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<ShoppingList>> {
            let found = self.inner.find_by_id(id).await;
            actix_web::rt::task::yield_now().await;
            found
        }

        async fn find_by_owner(&self, owner_id: &ObjectId) -> AppResult<Vec<ShoppingList>> {
            self.inner.find_by_owner(owner_id).await
        }

        async fn replace(&self, list: &ShoppingList, expected_version: i64) -> AppResult<bool> {
            self.inner.replace(list, expected_version).await
        }

        async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
            self.inner.delete(id).await
        }
    }

    /// 모든 교체가 다른 요청에 밀리는 저장소
    #[derive(Default)]
    struct AlwaysStaleLists {
        inner: InMemoryShoppingListRepository,
    }

    #[async_trait]
    impl ShoppingListRepository for AlwaysStaleLists {
        async fn insert(&self, list: ShoppingList) -> AppResult<ShoppingList> {
            self.inner.insert(list).await
        }

        async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<ShoppingList>> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_owner(&self, owner_id: &ObjectId) -> AppResult<Vec<ShoppingList>> {
            self.inner.find_by_owner(owner_id).await
        }

        async fn replace(&self, _list: &ShoppingList, _expected_version: i64) -> AppResult<bool> {
            Ok(false)
        }

        async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
            self.inner.delete(id).await
        }
    }

    async fn product(f: &Fixture, name: &str) -> String {
        f.products
            .insert(Product::new(name.to_string(), "unit".to_string()))
            .await
            .unwrap()
            .id
            .unwrap()
            .to_hex()
    }

    #[actix_web::test]
    async fn test_create_and_list_own_lists() {
        let f = fixture().await;

        let created = f.service.create("alice", "  groceries ").await.unwrap();
        f.service.create("bob", "hardware").await.unwrap();

        let lists = f.service.list("alice").await.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, created.id);
        assert_eq!(lists[0].name, "groceries");
        assert!(!lists[0].completed);
    }

    #[actix_web::test]
    async fn test_other_users_list_is_not_found() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();

        assert!(matches!(f.service.delete("bob", &list.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(f.service.mark_completed("bob", &list.id).await, Err(AppError::NotFound(_))));
        assert_eq!(f.service.list("alice").await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_add_item_resolves_product_and_accumulates() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();
        let milk = product(&f, "milk").await;

        f.service.add_item("alice", &list.id, &milk, 2).await.unwrap();
        let updated = f.service.add_item("alice", &list.id, &milk, 3).await.unwrap();

        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.items[0].name, "milk");
        assert_eq!(updated.items[0].quantity, 5);
    }

    #[actix_web::test]
    async fn test_add_unknown_product_is_not_found() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();

        let result = f.service.add_item("alice", &list.id, &ObjectId::new().to_hex(), 1).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_invalid_ids_are_validation_errors() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();

        assert!(matches!(f.service.delete("alice", "not-an-id").await, Err(AppError::ValidationError(_))));
        assert!(matches!(
            f.service.add_item("alice", &list.id, "nope", 1).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_purchasing_every_item_completes_list() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();
        let milk = product(&f, "milk").await;
        let bread = product(&f, "bread").await;
        f.service.add_item("alice", &list.id, &milk, 1).await.unwrap();
        f.service.add_item("alice", &list.id, &bread, 1).await.unwrap();

        let partial = f.service.mark_item_purchased("alice", &list.id, &milk).await.unwrap();
        assert!(!partial.completed);

        let done = f.service.mark_item_purchased("alice", &list.id, &bread).await.unwrap();
        assert!(done.completed);
        assert!(done.items.iter().all(|item| item.purchased));
    }

    #[actix_web::test]
    async fn test_remove_missing_item_is_not_found() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();
        let milk = product(&f, "milk").await;

        assert!(matches!(
            f.service.remove_item("alice", &list.id, &milk).await,
            Err(AppError::NotFound(_))
        ));

        f.service.add_item("alice", &list.id, &milk, 1).await.unwrap();
        let updated = f.service.remove_item("alice", &list.id, &milk).await.unwrap();
        assert!(updated.items.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_removes_list() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();

        f.service.delete("alice", &list.id).await.unwrap();

        assert!(f.service.list("alice").await.unwrap().is_empty());
        assert!(matches!(f.service.delete("alice", &list.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_mark_completed_purchases_all_items() {
        let f = fixture().await;
        let list = f.service.create("alice", "groceries").await.unwrap();
        let milk = product(&f, "milk").await;
        f.service.add_item("alice", &list.id, &milk, 1).await.unwrap();

        let done = f.service.mark_completed("alice", &list.id).await.unwrap();

        assert!(done.completed);
        assert!(done.items[0].purchased);
    }

    #[actix_web::test]
    async fn test_concurrent_adds_to_same_list_both_persist() {
        let f = fixture_with(Arc::new(YieldingLists::default())).await;
        let list = f.service.create("alice", "groceries").await.unwrap();
        let milk = product(&f, "milk").await;
        let bread = product(&f, "bread").await;

        let (first, second) = futures_util::join!(
            f.service.add_item("alice", &list.id, &milk, 1),
            f.service.add_item("alice", &list.id, &bread, 2),
        );
        first.unwrap();
        second.unwrap();

        let lists = f.service.list("alice").await.unwrap();
        let mut names: Vec<String> = lists[0].items.iter().map(|item| item.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["bread", "milk"]);
    }

    #[actix_web::test]
    async fn test_persistent_write_conflict_is_reported() {
        let f = fixture_with(Arc::new(AlwaysStaleLists::default())).await;
        let list = f.service.create("alice", "groceries").await.unwrap();
        let milk = product(&f, "milk").await;

        let result = f.service.add_item("alice", &list.id, &milk, 1).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert!(f.service.list("alice").await.unwrap()[0].items.is_empty());
    }
}
