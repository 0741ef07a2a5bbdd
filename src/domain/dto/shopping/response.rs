use std::collections::HashMap;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::products::product::Product;
use crate::domain::entities::shopping::shopping_list::ShoppingList;

/// 리스트 항목 응답. 상품 이름과 단위를 함께 내려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItemResponse {
    pub product_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: u32,
    pub purchased: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListResponse {
    pub id: String,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ListItemResponse>,
}

impl ShoppingListResponse {
    /// 리스트 엔티티와 참조된 상품들로 응답을 구성합니다.
    pub fn from_list(list: ShoppingList, products: &HashMap<ObjectId, Product>) -> Self {
        let items = list
            .items
            .into_iter()
            .map(|item| {
                let product = products.get(&item.product_id);
                ListItemResponse {
                    product_id: item.product_id.to_hex(),
                    name: product.map(|p| p.name.clone()).unwrap_or_default(),
                    unit: product.map(|p| p.unit.clone()).unwrap_or_default(),
                    quantity: item.quantity,
                    purchased: item.purchased,
                }
            })
            .collect();

        Self {
            id: list.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: list.name,
            completed: list.completed,
            created_at: DateTime::<Utc>::from_timestamp_millis(list.created_at.timestamp_millis())
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            items,
        }
    }
}
