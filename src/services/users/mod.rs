//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록과 조회를 담당하는 자격 증명 저장소 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repository, password_hasher);
//! let user = user_service.register("alice", "pw1").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
