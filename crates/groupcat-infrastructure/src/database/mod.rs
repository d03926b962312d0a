//! Database module (Redis adapters)

pub mod connection;
pub mod mapping_store_impl;

pub use connection::create_pool;
pub use mapping_store_impl::RedisMappingStore;
