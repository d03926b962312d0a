// ============================================================================
// Groupcat Core - Category Entities
// File: crates/groupcat-core/src/domain/category.rs
// ============================================================================
//! Mirrored category records: the expected shape derived from a group, the
//! live shape reported by the host, and the patch applied on update.

use serde::{Deserialize, Serialize};

use super::group::GroupRecord;
use super::sync_state::ReconcileAction;

/// Numeric category id assigned by the host on creation.
pub type CategoryId = u64;

/// Foreground text color for every mirrored category.
pub const FOREGROUND_COLOR: &str = "#FFFFFF";

/// How a category background image is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageClass {
    Cover,
    Contain,
}

impl ImageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageClass::Cover => "cover",
            ImageClass::Contain => "contain",
        }
    }
}

/// The full set of category fields this service owns. Slug is deliberately
/// absent: it is a creation-time input and immutable afterwards, so it never
/// participates in diffing or updates.
///
/// `PartialEq` is derived so the expected-vs-live diff is typed, per-field
/// equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFields {
    pub name: String,
    pub description: String,
    #[serde(rename = "parentCid")]
    pub parent_cid: CategoryId,
    pub icon: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
    pub color: String,
    pub image: String,
    #[serde(rename = "backgroundImage")]
    pub background_image: String,
    #[serde(rename = "imageClass")]
    pub image_class: ImageClass,
    #[serde(default)]
    pub disabled: bool,
}

impl CategoryFields {
    /// Builds the expected category record for a group.
    ///
    /// Metadata is copied from the group, the foreground color is fixed
    /// white, and the parent is fixed to the configured root category. A
    /// group without an icon but with a cover thumbnail gets that thumbnail
    /// as a contained background image; otherwise image fields are cleared.
    /// A delete action forces the category disabled.
    pub fn expected(group: &GroupRecord, parent_cid: CategoryId, action: ReconcileAction) -> Self {
        let (image, background_image, image_class) =
            if group.icon.is_empty() && !group.cover_thumb_url.is_empty() {
                (
                    group.cover_thumb_url.clone(),
                    group.cover_thumb_url.clone(),
                    ImageClass::Contain,
                )
            } else {
                (String::new(), String::new(), ImageClass::Cover)
            };

        Self {
            name: group.name.clone(),
            description: group.description.clone(),
            parent_cid,
            icon: group.icon.clone(),
            bg_color: group.label_color.clone(),
            color: FOREGROUND_COLOR.to_string(),
            image,
            background_image,
            image_class,
            disabled: action == ReconcileAction::Delete,
        }
    }
}

/// A live category as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub cid: CategoryId,
    pub slug: String,
    #[serde(flatten)]
    pub fields: CategoryFields,
    #[serde(default, rename = "tagWhitelist")]
    pub tag_whitelist: Vec<String>,
}

/// Partial category update, persisted by the host as one batched write.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPatch {
    #[serde(flatten)]
    pub fields: Option<CategoryFields>,
    #[serde(rename = "tagWhitelist", skip_serializing_if = "Option::is_none")]
    pub tag_whitelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl CategoryPatch {
    /// Replace every owned field and clear the tag whitelist.
    pub fn replace(fields: CategoryFields) -> Self {
        Self {
            fields: Some(fields),
            tag_whitelist: Some(Vec::new()),
            disabled: None,
        }
    }

    /// Retire the category. Terminal: a disabled category is never
    /// reconciled again.
    pub fn disable() -> Self {
        Self {
            fields: None,
            tag_whitelist: None,
            disabled: Some(true),
        }
    }
}
