//! API Response wrapper

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use groupcat_core::SyncError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Maps a sync failure onto the response envelope. Host-call failures are
/// the upstream's fault, missing configuration is the admin's.
pub fn sync_error(e: &SyncError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code) = match e {
        SyncError::NotConfigured => (StatusCode::CONFLICT, "NOT_CONFIGURED"),
        _ => (StatusCode::BAD_GATEWAY, "HOST_ERROR"),
    };
    (status, Json(ApiResponse::error(code, &e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let body = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 1);
        assert!(body["error"].is_null());
    }

    #[test]
    fn test_not_configured_maps_to_conflict() {
        let (status, _) = sync_error(&SyncError::NotConfigured);
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_host_failure_maps_to_bad_gateway() {
        let (status, _) = sync_error(&SyncError::CategoryHost("boom".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
