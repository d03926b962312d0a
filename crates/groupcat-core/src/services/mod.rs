//! Synchronization services (business logic)

pub mod sync_service;

pub use sync_service::{PrivilegeReport, SyncService};
