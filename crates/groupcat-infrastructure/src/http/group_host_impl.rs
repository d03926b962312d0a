// ============================================================================
// Groupcat Infrastructure - HTTP Group Host
// File: crates/groupcat-infrastructure/src/http/group_host_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use groupcat_core::domain::GroupRecord;
use groupcat_core::error::SyncError;
use groupcat_core::repositories::GroupHost;

use super::client::ForumClient;

pub struct HttpGroupHost {
    client: ForumClient,
}

impl HttpGroupHost {
    pub fn new(client: ForumClient) -> Self {
        Self { client }
    }
}

// Wire shapes for the host's group endpoints
#[derive(Debug, Deserialize)]
struct GroupNamesResponse {
    names: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GroupsDataRequest<'a> {
    names: &'a [String],
}

#[derive(Debug, Deserialize)]
struct GroupsDataResponse {
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Deserialize)]
struct PrivilegeListResponse {
    privileges: Vec<String>,
}

fn host_error(context: &str, e: impl std::fmt::Display) -> SyncError {
    error!("Group host call failed ({}): {}", context, e);
    SyncError::GroupHost(format!("{}: {}", context, e))
}

#[async_trait]
impl GroupHost for HttpGroupHost {
    async fn list_group_names(&self) -> Result<Vec<String>, SyncError> {
        let response = self
            .client
            .get(&["groups", "names"])
            .send()
            .await
            .map_err(|e| host_error("list names", e))?
            .error_for_status()
            .map_err(|e| host_error("list names", e))?;
        let body: GroupNamesResponse = response
            .json()
            .await
            .map_err(|e| host_error("list names", e))?;
        Ok(body.names)
    }

    async fn get_groups_data(&self, names: &[String]) -> Result<Vec<GroupRecord>, SyncError> {
        let response = self
            .client
            .post(&["groups", "data"])
            .json(&GroupsDataRequest { names })
            .send()
            .await
            .map_err(|e| host_error("groups data", e))?
            .error_for_status()
            .map_err(|e| host_error("groups data", e))?;
        let body: GroupsDataResponse = response
            .json()
            .await
            .map_err(|e| host_error("groups data", e))?;
        Ok(body.groups)
    }

    async fn privilege_list(&self) -> Result<Vec<String>, SyncError> {
        let response = self
            .client
            .get(&["admin", "privileges", "groups"])
            .send()
            .await
            .map_err(|e| host_error("privilege list", e))?
            .error_for_status()
            .map_err(|e| host_error("privilege list", e))?;
        let body: PrivilegeListResponse = response
            .json()
            .await
            .map_err(|e| host_error("privilege list", e))?;
        Ok(body.privileges)
    }

    async fn join(&self, privilege_group: &str, member: &str) -> Result<(), SyncError> {
        self.client
            .put(&["groups", privilege_group, "membership", member])
            .send()
            .await
            .map_err(|e| host_error("join", e))?
            .error_for_status()
            .map_err(|e| host_error("join", e))?;
        Ok(())
    }

    async fn leave(&self, privilege_group: &str, member: &str) -> Result<(), SyncError> {
        self.client
            .delete(&["groups", privilege_group, "membership", member])
            .send()
            .await
            .map_err(|e| host_error("leave", e))?
            .error_for_status()
            .map_err(|e| host_error("leave", e))?;
        Ok(())
    }
}
