// ============================================================================
// Groupcat API - Admin Handlers
// File: crates/groupcat-api/src/handlers/admin.rs
// ============================================================================
//! Plugin configuration surface: a JSON API and an equivalent rendered
//! admin page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use handlebars::Handlebars;
use serde_json::json;
use tracing::info;
use validator::Validate;

use groupcat_core::domain::SyncConfig;
use groupcat_core::repositories::{PluginSettings, SettingsHost};

use crate::dto::SettingsPayload;
use crate::response::{sync_error, ApiResponse};
use crate::state::AppState;

const ADMIN_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Groups' categories</title></head>
<body>
  <h1>Groups' categories</h1>
  {{#if configured}}
  <p>Mirrored categories are created under parent category <strong>{{category}}</strong>.</p>
  {{else}}
  <p><em>Not configured.</em> Set a parent category to enable synchronization.</p>
  {{/if}}
  <form method="post" action="/api/admin/plugins/groupcategories">
    <label>Parent category id
      <input type="number" name="category" min="1" value="{{category}}">
    </label>
    <button type="submit">Save</button>
  </form>
</body>
</html>
"#;

/// GET /admin/plugins/groupcategories
pub async fn render_admin_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let settings = state.settings.get().await.map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            Html(format!("<p>Failed to load settings: {}</p>", e)),
        )
    })?;

    let handlebars = Handlebars::new();
    let page = handlebars
        .render_template(
            ADMIN_PAGE_TEMPLATE,
            &json!({
                "configured": settings.category.is_some(),
                "category": settings.category,
            }),
        )
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<p>Template error: {}</p>", e)),
            )
        })?;
    Ok(Html(page))
}

/// GET /api/admin/plugins/groupcategories
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PluginSettings>>, (StatusCode, Json<ApiResponse<()>>)> {
    let settings = state.settings.get().await.map_err(|e| sync_error(&e))?;
    Ok(Json(ApiResponse::success(settings)))
}

/// POST /api/admin/plugins/groupcategories
///
/// Persists the parent category on the host and reconfigures the running
/// sync service so the next resync uses it.
pub async fn save_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsPayload>,
) -> Result<Json<ApiResponse<PluginSettings>>, (StatusCode, Json<ApiResponse<()>>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", &e.to_string())),
        ));
    }

    let settings = PluginSettings {
        category: Some(payload.category),
    };
    state.settings.save(&settings).await.map_err(|e| sync_error(&e))?;
    state
        .sync
        .configure(SyncConfig {
            parent_category: payload.category,
        })
        .await;
    info!("Settings saved: parent category {}", payload.category);
    Ok(Json(ApiResponse::success(settings)))
}
