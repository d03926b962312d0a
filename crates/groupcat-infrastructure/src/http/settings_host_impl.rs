// ============================================================================
// Groupcat Infrastructure - HTTP Settings Host
// File: crates/groupcat-infrastructure/src/http/settings_host_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::error;

use groupcat_core::error::SyncError;
use groupcat_core::repositories::{PluginSettings, SettingsHost};
use groupcat_shared::constants::PLUGIN_ID;

use super::client::ForumClient;

pub struct HttpSettingsHost {
    client: ForumClient,
}

impl HttpSettingsHost {
    pub fn new(client: ForumClient) -> Self {
        Self { client }
    }
}

fn host_error(context: &str, e: impl std::fmt::Display) -> SyncError {
    error!("Settings host call failed ({}): {}", context, e);
    SyncError::SettingsHost(format!("{}: {}", context, e))
}

#[async_trait]
impl SettingsHost for HttpSettingsHost {
    async fn get(&self) -> Result<PluginSettings, SyncError> {
        let response = self
            .client
            .get(&["admin", "settings", PLUGIN_ID])
            .send()
            .await
            .map_err(|e| host_error("get", e))?
            .error_for_status()
            .map_err(|e| host_error("get", e))?;
        response.json().await.map_err(|e| host_error("get", e))
    }

    async fn save(&self, settings: &PluginSettings) -> Result<(), SyncError> {
        self.client
            .put(&["admin", "settings", PLUGIN_ID])
            .json(settings)
            .send()
            .await
            .map_err(|e| host_error("save", e))?
            .error_for_status()
            .map_err(|e| host_error("save", e))?;
        Ok(())
    }
}
