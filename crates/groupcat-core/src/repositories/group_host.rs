//! Group service port (host-owned groups and privilege membership)

use async_trait::async_trait;

use crate::domain::GroupRecord;
use crate::error::SyncError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupHost: Send + Sync {
    /// Every group name known to the host.
    async fn list_group_names(&self) -> Result<Vec<String>, SyncError>;

    /// Resolves names to full records in one batched call.
    async fn get_groups_data(&self, names: &[String]) -> Result<Vec<GroupRecord>, SyncError>;

    /// The host's ordered privilege-name list. Order is load-bearing:
    /// membership cutoffs are positional.
    async fn privilege_list(&self) -> Result<Vec<String>, SyncError>;

    async fn join(&self, privilege_group: &str, member: &str) -> Result<(), SyncError>;

    async fn leave(&self, privilege_group: &str, member: &str) -> Result<(), SyncError>;
}
