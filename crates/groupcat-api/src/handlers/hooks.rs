// ============================================================================
// Groupcat API - Lifecycle Hook Handlers
// File: crates/groupcat-api/src/handlers/hooks.rs
// ============================================================================
//! Entry points the forum host invokes on group lifecycle events. All of
//! them are thin: parse the host payload, call the sync service, report the
//! outcome.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use groupcat_core::domain::ResyncReport;

use crate::dto::{GroupCreatedPayload, GroupDeletedPayload, GroupEditedPayload, GroupRenamedPayload};
use crate::response::{sync_error, ApiResponse};
use crate::state::AppState;

/// Resync outcome for the create/edit hooks. `skipped` is set for system
/// and hidden groups, which never get mirrored categories.
#[derive(Debug, Serialize)]
pub struct HookResult {
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ResyncReport>,
}

#[derive(Debug, Serialize)]
pub struct RenameResult {
    pub moved: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_cid: Option<u64>,
}

/// POST /hooks/group-created
pub async fn group_created(
    State(state): State<AppState>,
    Json(payload): Json<GroupCreatedPayload>,
) -> Result<Json<ApiResponse<HookResult>>, (StatusCode, Json<ApiResponse<()>>)> {
    info!("Group created: {}", payload.group.name);
    let report = state
        .sync
        .handle_group_created(&payload.group)
        .await
        .map_err(|e| sync_error(&e))?;
    Ok(Json(ApiResponse::success(HookResult {
        skipped: report.is_none(),
        report,
    })))
}

/// POST /hooks/group-edited
pub async fn group_edited(
    State(state): State<AppState>,
    Json(payload): Json<GroupEditedPayload>,
) -> Result<Json<ApiResponse<HookResult>>, (StatusCode, Json<ApiResponse<()>>)> {
    info!("Group edited: {}", payload.values.name);
    let report = state
        .sync
        .handle_group_edited(&payload.values)
        .await
        .map_err(|e| sync_error(&e))?;
    Ok(Json(ApiResponse::success(HookResult {
        skipped: report.is_none(),
        report,
    })))
}

/// POST /hooks/group-renamed
pub async fn group_renamed(
    State(state): State<AppState>,
    Json(payload): Json<GroupRenamedPayload>,
) -> Result<Json<ApiResponse<RenameResult>>, (StatusCode, Json<ApiResponse<()>>)> {
    info!("Group renamed: {} -> {}", payload.old, payload.new_name);
    let moved = state
        .sync
        .handle_group_renamed(&payload.old, &payload.new_name)
        .await
        .map_err(|e| sync_error(&e))?;
    Ok(Json(ApiResponse::success(RenameResult { moved })))
}

/// POST /hooks/group-deleted
pub async fn group_deleted(
    State(state): State<AppState>,
    Json(payload): Json<GroupDeletedPayload>,
) -> Result<Json<ApiResponse<DeleteResult>>, (StatusCode, Json<ApiResponse<()>>)> {
    info!("Group deleted: {}", payload.group.name);
    let disabled_cid = state
        .sync
        .handle_group_deleted(&payload.group.name)
        .await
        .map_err(|e| sync_error(&e))?;
    Ok(Json(ApiResponse::success(DeleteResult { disabled_cid })))
}
