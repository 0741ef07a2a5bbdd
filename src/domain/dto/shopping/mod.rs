//! 쇼핑 리스트 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{AddListItemRequest, CreateShoppingListRequest};
pub use response::{ListItemResponse, ShoppingListResponse};
