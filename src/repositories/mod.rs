//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 `async_trait` 기반 trait으로 정의되고, 서비스는
//! `Arc<dyn Trait>`으로 주입받습니다. 구현체는 두 가지입니다.
//!
//! - **MongoDB**: 운영용 영속 저장소. 폐기 토큰 원장은 선택적으로 Redis 캐시를 사용합니다.
//! - **In-memory**: 개발/테스트용. 테스트마다 새 저장소를 만들어 격리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{RevocationLedger, memory::InMemoryRevocationLedger};
//!
//! let ledger: Arc<dyn RevocationLedger> = Arc::new(InMemoryRevocationLedger::default());
//! ledger.revoke("jti-123").await?;
//! assert!(ledger.is_revoked("jti-123").await?);
//! ```

use mongodb::bson::oid::ObjectId;
use crate::core::AppError;

pub mod users;
pub mod tokens;
pub mod shopping;
pub mod products;
pub mod memory;

pub use users::user_repo::{MongoUserRepository, UserRepository};
pub use tokens::revocation_ledger::{MongoRevocationLedger, RevocationCache, RevocationLedger};
pub use shopping::shopping_list_repo::{MongoShoppingListRepository, ShoppingListRepository};
pub use products::product_repo::{MongoProductRepository, ProductRepository};

/// 경로 파라미터 등 외부에서 받은 16진수 ID를 `ObjectId`로 변환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("invalid id format: {}", id)))
}

/// MongoDB 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

pub(crate) fn database_error(error: mongodb::error::Error) -> AppError {
    log::error!("❌ MongoDB 연산 실패: {}", error);
    AppError::DatabaseError(error.to_string())
}
