// ============================================================================
// Groupcat Core - Group Record
// File: crates/groupcat-core/src/domain/group.rs
// ============================================================================
//! Read-only view of a forum user group as the host reports it.

use serde::{Deserialize, Serialize};

/// A user group record owned by the forum host. Field names on the wire
/// follow the host's conventions (`labelColor`, `cover:thumb:url`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupRecord {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default, rename = "labelColor")]
    pub label_color: String,

    #[serde(default, rename = "cover:thumb:url")]
    pub cover_thumb_url: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub system: bool,

    #[serde(default)]
    pub hidden: bool,
}

impl GroupRecord {
    /// System and hidden groups never get mirrored categories.
    pub fn is_syncable(&self) -> bool {
        !self.system && !self.hidden
    }
}
