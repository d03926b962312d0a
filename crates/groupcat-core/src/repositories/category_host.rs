//! Category service port

use async_trait::async_trait;

use crate::domain::{Category, CategoryFields, CategoryId, CategoryPatch};
use crate::error::SyncError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryHost: Send + Sync {
    /// Creates a category and returns the host-assigned id. Slug is a
    /// creation-time-only input.
    async fn create(&self, fields: &CategoryFields, slug: &str) -> Result<CategoryId, SyncError>;

    /// `None` when the id no longer resolves to a category.
    async fn get_by_id(&self, cid: CategoryId) -> Result<Option<Category>, SyncError>;

    /// Batched update of one or more categories.
    async fn update(&self, updates: &[(CategoryId, CategoryPatch)]) -> Result<(), SyncError>;
}
