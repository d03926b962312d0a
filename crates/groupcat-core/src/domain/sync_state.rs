// ============================================================================
// Groupcat Core - Sync State
// File: crates/groupcat-core/src/domain/sync_state.rs
// ============================================================================
//! Explicit reconciliation states and outcomes. Each group is in one of
//! three states: unmapped, mapped to a live category, or mapped to a retired
//! one; an orphaned mapping (category vanished on the host) is surfaced as
//! its own observation so recovery is explicit.

use serde::Serialize;

use super::category::{Category, CategoryId};
use crate::error::SyncError;

/// Runtime configuration for the reconciler. Threaded in explicitly; an
/// unconfigured service refuses to resync instead of creating categories
/// under an undefined parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// Root category every mirrored category is parented under.
    pub parent_category: CategoryId,
}

/// Why a reconciliation pass was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// Normal metadata/privilege sync.
    Sync,
    /// The group is going away; the expected record is forced disabled.
    Delete,
}

/// What the mapping store and category host report for one group, before
/// any decision is made.
#[derive(Debug, Clone)]
pub enum CategoryObservation {
    /// No mapping entry exists.
    Unmapped,
    /// A mapping exists but the category is gone on the host.
    Orphaned(CategoryId),
    /// The mapped category is disabled. Terminal: never reconciled again.
    Retired(CategoryId),
    /// The mapped category is live.
    Live(Category),
}

/// Per-group result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// A category was created and the mapping stored (covers both the
    /// first-sync and orphan-recovery paths).
    Created(CategoryId),
    /// The live category differed and was rewritten.
    Updated(CategoryId),
    /// The live category already matched; no write issued.
    Unchanged(CategoryId),
    /// The mapped category is disabled; nothing was touched.
    Retired(CategoryId),
}

/// Aggregated result of a full resync across every known group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResyncReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub retired: usize,
    pub failed: Vec<String>,
}

impl ResyncReport {
    pub fn record(&mut self, group: &str, result: &Result<ReconcileOutcome, SyncError>) {
        match result {
            Ok(ReconcileOutcome::Created(_)) => self.created += 1,
            Ok(ReconcileOutcome::Updated(_)) => self.updated += 1,
            Ok(ReconcileOutcome::Unchanged(_)) => self.unchanged += 1,
            Ok(ReconcileOutcome::Retired(_)) => self.retired += 1,
            Err(_) => self.failed.push(group.to_string()),
        }
    }

    pub fn groups_seen(&self) -> usize {
        self.created + self.updated + self.unchanged + self.retired + self.failed.len()
    }
}
