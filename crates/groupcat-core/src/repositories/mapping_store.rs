//! Mapping store port: persistent group-name → category-id table

use async_trait::async_trait;

use crate::domain::CategoryId;
use crate::error::SyncError;

/// Keyed table mapping group names to their mirrored category ids. The
/// backing store serializes writes per key; no extra locking here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    async fn get(&self, group_name: &str) -> Result<Option<CategoryId>, SyncError>;
    async fn set(&self, group_name: &str, cid: CategoryId) -> Result<(), SyncError>;
    async fn delete(&self, group_name: &str) -> Result<(), SyncError>;
}
