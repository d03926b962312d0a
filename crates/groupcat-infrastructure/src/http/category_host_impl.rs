// ============================================================================
// Groupcat Infrastructure - HTTP Category Host
// File: crates/groupcat-infrastructure/src/http/category_host_impl.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use groupcat_core::domain::{Category, CategoryFields, CategoryId, CategoryPatch};
use groupcat_core::error::SyncError;
use groupcat_core::repositories::CategoryHost;

use super::client::ForumClient;

pub struct HttpCategoryHost {
    client: ForumClient,
}

impl HttpCategoryHost {
    pub fn new(client: ForumClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct CreateCategoryRequest<'a> {
    #[serde(flatten)]
    fields: &'a CategoryFields,
    slug: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateCategoryResponse {
    cid: CategoryId,
}

fn host_error(context: &str, e: impl std::fmt::Display) -> SyncError {
    error!("Category host call failed ({}): {}", context, e);
    SyncError::CategoryHost(format!("{}: {}", context, e))
}

#[async_trait]
impl CategoryHost for HttpCategoryHost {
    async fn create(&self, fields: &CategoryFields, slug: &str) -> Result<CategoryId, SyncError> {
        let response = self
            .client
            .post(&["categories"])
            .json(&CreateCategoryRequest { fields, slug })
            .send()
            .await
            .map_err(|e| host_error("create", e))?
            .error_for_status()
            .map_err(|e| host_error("create", e))?;
        let body: CreateCategoryResponse =
            response.json().await.map_err(|e| host_error("create", e))?;
        Ok(body.cid)
    }

    async fn get_by_id(&self, cid: CategoryId) -> Result<Option<Category>, SyncError> {
        let response = self
            .client
            .get(&["categories", &cid.to_string()])
            .send()
            .await
            .map_err(|e| host_error("get", e))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status().map_err(|e| host_error("get", e))?;
        let category: Category = response.json().await.map_err(|e| host_error("get", e))?;
        Ok(Some(category))
    }

    async fn update(&self, updates: &[(CategoryId, CategoryPatch)]) -> Result<(), SyncError> {
        // The host takes one keyed object per batch: { "<cid>": patch, ... }
        let mut body = serde_json::Map::new();
        for (cid, patch) in updates {
            let patch_value =
                serde_json::to_value(patch).map_err(|e| host_error("update", e))?;
            body.insert(cid.to_string(), patch_value);
        }
        self.client
            .put(&["categories"])
            .json(&Value::Object(body))
            .send()
            .await
            .map_err(|e| host_error("update", e))?
            .error_for_status()
            .map_err(|e| host_error("update", e))?;
        Ok(())
    }
}
