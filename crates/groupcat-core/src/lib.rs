//! # Groupcat Core
//!
//! Domain entities, host-collaborator ports, and the synchronization
//! services that keep forum categories mirrored from user groups.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::SyncError;
