//! 쇼핑 리스트 엔티티
//!
//! 리스트 항목은 별도 컬렉션이 아닌 리스트 문서 안에 내장됩니다.
//! 리스트를 삭제하면 항목도 함께 삭제됩니다.
//! `version`은 저장할 때마다 1씩 증가하며 동시 수정 감지에 쓰입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 리스트에 담긴 상품 한 줄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub product_id: ObjectId,
    pub quantity: u32,
    pub purchased: bool,
}

/// 사용자 소유의 쇼핑 리스트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub owner_id: ObjectId,
    pub name: String,
    /// 모든 항목이 구매되었거나 리스트 전체가 구매 처리된 경우 true
    pub completed: bool,
    #[serde(default)]
    pub items: Vec<ListItem>,
    pub created_at: DateTime,
    #[serde(default)]
    pub version: i64,
}

impl ShoppingList {
    pub fn new(owner_id: ObjectId, name: String) -> Self {
        Self {
            id: None,
            owner_id,
            name,
            completed: false,
            items: Vec::new(),
            created_at: DateTime::now(),
            version: 0,
        }
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.owner_id == *user_id
    }

    /// 상품을 추가합니다.
    ///
    /// 이미 담긴 상품이면 수량을 더하고 구매 상태를 초기화합니다.
    /// 새 항목이 생기면 리스트는 다시 미완료 상태가 됩니다.
    pub fn add_item(&mut self, product_id: ObjectId, quantity: u32) {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity);
                item.purchased = false;
            }
            None => self.items.push(ListItem {
                product_id,
                quantity,
                purchased: false,
            }),
        }
        self.completed = false;
    }

    /// 상품을 리스트에서 제거합니다. 리스트에 없으면 false를 반환합니다.
    pub fn remove_item(&mut self, product_id: &ObjectId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != *product_id);
        let removed = self.items.len() != before;

        if removed {
            self.refresh_completed();
        }
        removed
    }

    /// 항목 하나를 구매 처리합니다. 리스트에 없으면 false를 반환합니다.
    pub fn mark_item_purchased(&mut self, product_id: &ObjectId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.product_id == *product_id) else {
            return false;
        };
        item.purchased = true;
        self.refresh_completed();
        true
    }

    /// 리스트 전체를 구매 처리합니다.
    pub fn mark_completed(&mut self) {
        for item in &mut self.items {
            item.purchased = true;
        }
        self.completed = true;
    }

    // 빈 리스트는 명시적으로 완료 처리하기 전까지 미완료로 둔다
    fn refresh_completed(&mut self) {
        self.completed = !self.items.is_empty() && self.items.iter().all(|item| item.purchased);
    }
}
