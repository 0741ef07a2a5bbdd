use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::AppResult,
    db::Database,
    domain::entities::RevokedToken,
    repositories::{database_error, is_duplicate_key_error},
};

const COLLECTION: &str = "revoked_tokens";

/// 폐기된 토큰 ID 집합
///
/// `revoke`가 성공적으로 반환된 이후의 모든 `is_revoked` 호출은
/// 같은 jti에 대해 반드시 true를 반환해야 합니다.
#[async_trait]
pub trait RevocationLedger: Send + Sync {
    /// jti를 폐기 집합에 추가합니다. 이미 폐기된 jti면 아무 일도 하지 않습니다.
    async fn revoke(&self, jti: &str) -> AppResult<()>;

    async fn is_revoked(&self, jti: &str) -> AppResult<bool>;
}

/// 폐기 여부 조회용 Redis 캐시
///
/// 캐시는 "폐기됨"만 기록합니다. 캐시 미스는 MongoDB 조회로 이어지므로
/// 캐시 항목이 만료되거나 유실되어도 결과는 달라지지 않습니다.
#[derive(Clone)]
pub struct RevocationCache {
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl RevocationCache {
    pub fn new(redis: Arc<RedisClient>, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }

    fn key(jti: &str) -> String {
        format!("revoked_token:{}", jti)
    }

    async fn contains(&self, jti: &str) -> bool {
        match self.redis.exists(&Self::key(jti)).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("⚠️ Redis 폐기 캐시 조회 실패, MongoDB로 대체: {}", e);
                false
            }
        }
    }

    async fn remember(&self, jti: &str) {
        if let Err(e) = self.redis.set_with_expiry(&Self::key(jti), &true, self.ttl_seconds).await {
            log::warn!("⚠️ Redis 폐기 캐시 저장 실패: {}", e);
        }
    }
}

/// MongoDB 기반 폐기 토큰 원장
pub struct MongoRevocationLedger {
    db: Arc<Database>,
    cache: Option<RevocationCache>,
}

impl MongoRevocationLedger {
    pub fn new(db: Arc<Database>, cache: Option<RevocationCache>) -> Self {
        Self { db, cache }
    }

    fn collection(&self) -> Collection<RevokedToken> {
        self.db.collection::<RevokedToken>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let jti_index = IndexModel::builder()
            .keys(doc! { "jti": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("jti_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(jti_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl RevocationLedger for MongoRevocationLedger {
    async fn revoke(&self, jti: &str) -> AppResult<()> {
        let record = RevokedToken::new(jti);

        // $setOnInsert 업서트로 재폐기 시 기존 문서를 건드리지 않는다
        let result = self.collection()
            .update_one(
                doc! { "jti": jti },
                doc! { "$setOnInsert": { "jti": record.jti.as_str(), "revoked_at": record.revoked_at } },
            )
            .upsert(true)
            .await;

        match result {
            Ok(_) => {}
            // 동시 업서트 경쟁에서 진 경우. 이미 폐기되어 있다.
            Err(e) if is_duplicate_key_error(&e) => {}
            Err(e) => return Err(database_error(e)),
        }

        if let Some(cache) = &self.cache {
            cache.remember(jti).await;
        }

        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        if let Some(cache) = &self.cache {
            if cache.contains(jti).await {
                return Ok(true);
            }
        }

        let count = self.collection()
            .count_documents(doc! { "jti": jti })
            .await
            .map_err(database_error)?;

        let revoked = count > 0;
        if revoked {
            if let Some(cache) = &self.cache {
                cache.remember(jti).await;
            }
        }

        Ok(revoked)
    }
}
