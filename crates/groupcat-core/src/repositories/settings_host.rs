//! Plugin settings port (persisted by the host)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::CategoryId;
use crate::error::SyncError;

/// Persisted plugin configuration. `category` is the parent category every
/// mirrored category lives under; absent until an admin configures it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginSettings {
    pub category: Option<CategoryId>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsHost: Send + Sync {
    async fn get(&self) -> Result<PluginSettings, SyncError>;
    async fn save(&self, settings: &PluginSettings) -> Result<(), SyncError>;
}
