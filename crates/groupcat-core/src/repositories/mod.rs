//! Host-collaborator ports

pub mod mapping_store;
pub mod group_host;
pub mod category_host;
pub mod settings_host;

pub use mapping_store::MappingStore;
pub use group_host::GroupHost;
pub use category_host::CategoryHost;
pub use settings_host::{PluginSettings, SettingsHost};
