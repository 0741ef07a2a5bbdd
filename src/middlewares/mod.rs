//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출
//! - 서명, 만료, 폐기 여부 검증 ([`AuthGate`](crate::services::auth::AuthGate))
//! - 인증된 사용자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(web::Data::new(auth_gate))
//!     .service(
//!         web::scope("/v1/shopping-lists")
//!             .wrap(AuthMiddleware::new())
//!             .route("", web::get().to(list_shopping_lists))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
