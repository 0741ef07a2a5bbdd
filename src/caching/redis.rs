//! # Redis 캐시 클라이언트
//!
//! 폐기된 토큰 ID(jti)를 빠르게 조회하기 위한 Redis 래퍼입니다.
//! 영속 저장소는 항상 MongoDB이며, Redis는 조회 가속용 캐시로만 사용됩니다.
//!
//! ## 연결 관리
//!
//! 멀티플렉싱 연결을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 처리합니다.

use redis::{AsyncCommands, Client};
use serde::Serialize;

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 주어진 URL로 Redis 클라이언트를 생성하고 PING으로 가용성을 확인합니다.
    pub async fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 값을 JSON으로 직렬화하여 TTL과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.exists(key).await
    }
}
