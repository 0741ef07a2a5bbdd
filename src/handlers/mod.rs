//! # HTTP Request Handlers Module
//!
//! 핸들러는 요청 본문 검증과 응답 변환만 담당하고 로직은 서비스에 위임합니다.
//! 서비스는 [`AppContext::configure`](crate::core::AppContext::configure)가 등록한
//! `web::Data`로 주입받으며, 인증된 사용자는 [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser)
//! extractor로 꺼냅니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_shopping_list(
//!     service: web::Data<ShoppingListService>,
//!     user: AuthenticatedUser,
//!     payload: web::Json<CreateShoppingListRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let list = service.create(&user.username, &payload.name).await?;
//!     Ok(HttpResponse::Created().json(list))
//! }
//! ```
//!
//! - **`auth`**: 회원가입, 로그인, 로그아웃, 현재 사용자
//! - **`shopping_lists`**: 쇼핑 리스트와 항목
//! - **`products`**: 상품 카탈로그

pub mod auth;
pub mod shopping_lists;
pub mod products;
