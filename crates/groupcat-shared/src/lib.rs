//! # Groupcat Shared
//!
//! Configuration, telemetry, and shared constants for the group-category
//! synchronization service.

pub mod constants;
pub mod telemetry;
pub mod config;
