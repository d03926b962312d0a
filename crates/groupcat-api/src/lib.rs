//! # Groupcat API
//!
//! HTTP handlers for the admin surface and the host lifecycle hooks.

pub mod handlers;
pub mod dto;
pub mod response;
pub mod state;
