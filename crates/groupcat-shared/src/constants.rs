//! Application-wide constants

pub const PLUGIN_ID: &str = "groupcategories";
pub const ADMIN_PAGE_ROUTE: &str = "/admin/plugins/groupcategories";
pub const ADMIN_API_ROUTE: &str = "/api/admin/plugins/groupcategories";
pub const MAPPING_HASH_KEY: &str = "groupname:cid";
