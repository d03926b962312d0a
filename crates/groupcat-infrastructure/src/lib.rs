//! # Groupcat Infrastructure
//!
//! Concrete implementations of the core ports: a Redis-backed mapping store
//! and HTTP clients for the forum host's group, category, and settings
//! services.

pub mod database;
pub mod http;

pub use database::RedisMappingStore;
pub use http::{ForumClient, HttpCategoryHost, HttpGroupHost, HttpSettingsHost};
