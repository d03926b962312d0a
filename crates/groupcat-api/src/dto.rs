//! Host-defined payload shapes for the lifecycle hooks and admin API

use serde::{Deserialize, Serialize};
use validator::Validate;

use groupcat_core::domain::CategoryId;
use groupcat_core::GroupRecord;

/// `action:group.create` payload.
#[derive(Debug, Deserialize)]
pub struct GroupCreatedPayload {
    pub group: GroupRecord,
}

/// `action:group.update` payload: the host sends the edited values.
#[derive(Debug, Deserialize)]
pub struct GroupEditedPayload {
    pub values: GroupRecord,
}

/// `action:group.rename` payload.
#[derive(Debug, Deserialize)]
pub struct GroupRenamedPayload {
    pub old: String,
    #[serde(rename = "new")]
    pub new_name: String,
}

/// `action:group.destroy` payload. Only the name matters here.
#[derive(Debug, Deserialize)]
pub struct GroupDeletedPayload {
    pub group: GroupRef,
}

#[derive(Debug, Deserialize)]
pub struct GroupRef {
    pub name: String,
}

/// Admin settings update.
#[derive(Debug, Deserialize, Validate)]
pub struct SettingsPayload {
    #[validate(range(min = 1, message = "Parent category id must be positive"))]
    pub category: CategoryId,
}

/// The host's admin header, passed through the navigation filter hook.
/// Unknown fields are preserved untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminHeader {
    #[serde(default)]
    pub plugins: Vec<NavEntry>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavEntry {
    pub route: String,
    pub icon: String,
    pub name: String,
}
