//! # Groupcat Core - Domain Module
//!
//! Entities and pure decision logic for group-to-category mirroring.

pub mod group;
pub mod category;
pub mod privilege;
pub mod sync_state;

// Re-export all entities and enums
pub use group::GroupRecord;
pub use category::{Category, CategoryFields, CategoryId, CategoryPatch, ImageClass};
pub use privilege::{plan_privileges, Actor, MembershipChange, PrivilegeOp};
pub use sync_state::{
    CategoryObservation, ReconcileAction, ReconcileOutcome, ResyncReport, SyncConfig,
};
