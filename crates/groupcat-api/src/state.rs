use std::sync::Arc;

use groupcat_core::services::SyncService;
use groupcat_infrastructure::{
    HttpCategoryHost, HttpGroupHost, HttpSettingsHost, RedisMappingStore,
};
use groupcat_shared::config::AppConfig;

/// The sync service wired to its production collaborators.
pub type HostSyncService = SyncService<RedisMappingStore, HttpGroupHost, HttpCategoryHost>;

#[derive(Clone)]
pub struct AppState {
    pub sync: Arc<HostSyncService>,
    pub settings: Arc<HttpSettingsHost>,
    pub config: AppConfig,
}
