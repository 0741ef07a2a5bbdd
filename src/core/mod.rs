//! # Core Module
//!
//! - [`errors`] - 애플리케이션 전역 에러 타입과 HTTP 응답 변환
//! - [`context`] - 저장소와 서비스 조립, Actix 앱 데이터 등록
//!
//! 서비스는 전역 싱글톤 없이 생성자로 의존성을 주입받습니다.
//!
//! ```rust,ignore
//! let context = AppContext::from_env().await?;
//!
//! HttpServer::new(move || {
//!     let context = context.clone();
//!     App::new()
//!         .configure(|cfg| context.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod context;

pub use errors::*;
pub use context::{AppContext, Repositories};
