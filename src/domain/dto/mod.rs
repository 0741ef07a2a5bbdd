//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//!
//! ```text
//! dto/
//! ├── users/      - 회원가입, 로그인, 로그아웃
//! ├── shopping/   - 쇼핑 리스트 및 항목
//! └── products/   - 상품 카탈로그
//! ```

pub mod users;
pub mod shopping;
pub mod products;

pub use users::{CredentialsRequest, LoginResponse, MeResponse, MessageResponse};
pub use shopping::{AddListItemRequest, CreateShoppingListRequest, ListItemResponse, ShoppingListResponse};
pub use products::{CreateProductRequest, ProductResponse};
