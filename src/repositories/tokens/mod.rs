//! 폐기 토큰 원장 모듈
//!
//! 로그아웃된 토큰의 jti를 영속 저장하고, 인증 요청마다 폐기 여부를 조회합니다.
//!
//! # Features
//!
//! - **멱등 폐기**: 같은 jti를 여러 번 폐기해도 오류 없이 한 건만 저장
//! - **Redis 캐시**: 설정된 경우 조회 결과를 캐싱하여 MongoDB 부하 감소
//! - **정리 없음**: 원장 항목은 만료되지 않고 누적됩니다
//!
//! # Usage
//!
//! ```rust,ignore
//! let ledger = MongoRevocationLedger::new(database, Some(cache));
//! ledger.revoke(&claims.jti).await?;
//! assert!(ledger.is_revoked(&claims.jti).await?);
//! ```

pub mod revocation_ledger;
