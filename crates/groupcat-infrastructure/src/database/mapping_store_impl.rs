// ============================================================================
// Groupcat Infrastructure - Redis Mapping Store
// File: crates/groupcat-infrastructure/src/database/mapping_store_impl.rs
// ============================================================================
//! Group-name → category-id mapping persisted in a Redis hash. Redis
//! serializes writes per key, which is all the locking the mapping needs.

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::Pool;
use tracing::error;

use groupcat_core::domain::CategoryId;
use groupcat_core::error::SyncError;
use groupcat_core::repositories::MappingStore;
use groupcat_shared::constants::MAPPING_HASH_KEY;

pub struct RedisMappingStore {
    pool: Pool,
}

impl RedisMappingStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, SyncError> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection: {}", e);
            SyncError::MappingStore(e.to_string())
        })
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn get(&self, group_name: &str) -> Result<Option<CategoryId>, SyncError> {
        let mut conn = self.connection().await?;
        let cid: Option<u64> = conn.hget(MAPPING_HASH_KEY, group_name).await.map_err(|e| {
            error!("Redis HGET failed for group {}: {}", group_name, e);
            SyncError::MappingStore(e.to_string())
        })?;
        Ok(cid)
    }

    async fn set(&self, group_name: &str, cid: CategoryId) -> Result<(), SyncError> {
        let mut conn = self.connection().await?;
        let _: () = conn.hset(MAPPING_HASH_KEY, group_name, cid).await.map_err(|e| {
            error!("Redis HSET failed for group {}: {}", group_name, e);
            SyncError::MappingStore(e.to_string())
        })?;
        Ok(())
    }

    async fn delete(&self, group_name: &str) -> Result<(), SyncError> {
        let mut conn = self.connection().await?;
        let _: () = conn.hdel(MAPPING_HASH_KEY, group_name).await.map_err(|e| {
            error!("Redis HDEL failed for group {}: {}", group_name, e);
            SyncError::MappingStore(e.to_string())
        })?;
        Ok(())
    }
}
