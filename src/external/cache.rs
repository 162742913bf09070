use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// 外部计数缓存的最小接口
#[async_trait]
pub trait CounterCache: Send + Sync {
    async fn get(&self, key: &str) -> CacheResult<Option<i64>>;

    async fn set(&self, key: &str, value: i64) -> CacheResult<()>;

    /// 自增 1 并返回新值
    async fn incr(&self, key: &str) -> CacheResult<i64>;
}

#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl CounterCache for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<i64>> {
        let mut conn = self.manager.clone();
        let value: Option<i64> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: i64) -> CacheResult<()> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn incr(&self, key: &str) -> CacheResult<i64> {
        let mut conn = self.manager.clone();
        let value: i64 = conn.incr(key, 1).await?;
        Ok(value)
    }
}

/// 进程内实现，未配置 Redis 时和测试中使用
#[derive(Default)]
pub struct MemoryCache {
    counters: Mutex<HashMap<String, i64>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterCache for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<i64>> {
        Ok(self.counters.lock().await.get(key).copied())
    }

    async fn set(&self, key: &str, value: i64) -> CacheResult<()> {
        self.counters.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn incr(&self, key: &str) -> CacheResult<i64> {
        let mut counters = self.counters.lock().await;
        let entry = counters.entry(key.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_cache_counts() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("k").await.unwrap(), None);

        cache.set("k", 0).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(0));

        assert_eq!(cache.incr("k").await.unwrap(), 1);
        assert_eq!(cache.incr("k").await.unwrap(), 2);
        assert_eq!(cache.get("k").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_redis_connect_rejects_bad_url() {
        let err = RedisCache::connect("not-a-url").await.err().unwrap();
        assert!(matches!(err, CacheError::Redis(_)));
    }

    #[tokio::test]
    async fn test_memory_cache_incr_missing_key_starts_at_one() {
        let cache = MemoryCache::new();
        assert_eq!(cache.incr("fresh").await.unwrap(), 1);
    }
}
