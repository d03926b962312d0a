use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use groupcat_api::{
    handlers::{admin, health, hooks, navigation},
    state::AppState,
};
use groupcat_core::domain::SyncConfig;
use groupcat_core::repositories::SettingsHost;
use groupcat_core::services::SyncService;
use groupcat_infrastructure::database;
use groupcat_infrastructure::{
    ForumClient, HttpCategoryHost, HttpGroupHost, HttpSettingsHost, RedisMappingStore,
};
use groupcat_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    groupcat_shared::telemetry::init_telemetry();

    info!("Groupcat server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Mapping store
    let pool = database::create_pool(&config.redis.url, config.redis.max_connections)?;
    let mapping = Arc::new(RedisMappingStore::new(pool));

    // Forum host clients
    let client = ForumClient::new(&config.forum.base_url, config.forum.api_token.clone())?;
    let groups = Arc::new(HttpGroupHost::new(client.clone()));
    let categories = Arc::new(HttpCategoryHost::new(client.clone()));
    let settings = Arc::new(HttpSettingsHost::new(client));

    // Plugin settings must be loaded before any resync is attempted.
    let sync_config = match settings.get().await {
        Ok(s) => s.category.map(|parent_category| SyncConfig { parent_category }),
        Err(e) => {
            warn!("Could not load plugin settings: {}", e);
            None
        }
    };
    let sync = Arc::new(SyncService::new(mapping, groups, categories, sync_config));

    // Startup full resync
    if sync.is_configured().await {
        let startup_sync = sync.clone();
        tokio::spawn(async move {
            match startup_sync.full_resync().await {
                Ok(report) => info!(
                    "Startup resync: {} created, {} updated, {} unchanged, {} retired, {} failed",
                    report.created,
                    report.updated,
                    report.unchanged,
                    report.retired,
                    report.failed.len()
                ),
                Err(e) => error!("Startup resync failed: {}", e),
            }
        });
    } else {
        warn!("Parent category not configured; startup resync skipped");
    }

    // Create App State
    let state = AppState {
        sync,
        settings,
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Admin surface: rendered page and the equivalent API
        .route("/admin/plugins/groupcategories", get(admin::render_admin_page))
        .route(
            "/api/admin/plugins/groupcategories",
            get(admin::get_settings).post(admin::save_settings),
        )
        // Lifecycle hooks invoked by the forum host
        .route("/hooks/group-created", post(hooks::group_created))
        .route("/hooks/group-edited", post(hooks::group_edited))
        .route("/hooks/group-renamed", post(hooks::group_renamed))
        .route("/hooks/group-deleted", post(hooks::group_deleted))
        .route("/hooks/admin-navigation", post(navigation::admin_navigation))
        // Add State
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
