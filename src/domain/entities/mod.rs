//! 도메인 엔티티
//!
//! MongoDB 컬렉션에 저장되는 영속 객체들입니다.

pub mod users;
pub mod tokens;
pub mod shopping;
pub mod products;

pub use users::user::User;
pub use tokens::revoked_token::RevokedToken;
pub use shopping::shopping_list::{ListItem, ShoppingList};
pub use products::product::Product;
