//! # Domain Layer Module
//!
//! 비즈니스 객체와 API 계약을 정의하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 영속 객체 (User, RevokedToken, ShoppingList, Product)
//! ├── DTOs      - 요청/응답 데이터 전송 객체
//! └── Models    - 영속화되지 않는 값 객체 (TokenClaims, AuthenticatedUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 쇼핑 리스트의 항목 추가/삭제/구매 처리 규칙은 [`entities::shopping::shopping_list::ShoppingList`]
//! 엔티티 메서드에 구현되어 있어 저장소 구현과 무관하게 동일하게 동작합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{ListItem, Product, RevokedToken, ShoppingList, User};
pub use models::{AuthenticatedUser, IssuedToken, TokenClaims};
