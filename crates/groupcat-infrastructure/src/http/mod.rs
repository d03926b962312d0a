//! HTTP adapters for the forum host's write API

pub mod client;
pub mod group_host_impl;
pub mod category_host_impl;
pub mod settings_host_impl;

pub use client::ForumClient;
pub use group_host_impl::HttpGroupHost;
pub use category_host_impl::HttpCategoryHost;
pub use settings_host_impl::HttpSettingsHost;
