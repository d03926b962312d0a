//! Synchronization errors

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SyncError {
    #[error("Plugin is not configured with a parent category")]
    NotConfigured,

    #[error("Mapping store error: {0}")]
    MappingStore(String),

    #[error("Group service error: {0}")]
    GroupHost(String),

    #[error("Category service error: {0}")]
    CategoryHost(String),

    #[error("Settings service error: {0}")]
    SettingsHost(String),
}
