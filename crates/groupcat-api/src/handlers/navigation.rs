//! Admin navigation filter hook

use axum::Json;

use crate::dto::{AdminHeader, NavEntry};

/// POST /hooks/admin-navigation
///
/// Filter hook: the host passes its admin header through and gets it back
/// with this plugin's entry appended.
pub async fn admin_navigation(Json(mut header): Json<AdminHeader>) -> Json<AdminHeader> {
    header.plugins.push(NavEntry {
        route: "/plugins/groupcategories".to_string(),
        icon: "fa-users".to_string(),
        name: "Groups' categories".to_string(),
    });
    Json(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_appends_plugin_entry() {
        let header = AdminHeader {
            plugins: vec![NavEntry {
                route: "/plugins/other".into(),
                icon: "fa-cog".into(),
                name: "Other".into(),
            }],
            extra: serde_json::Map::new(),
        };
        let Json(result) = admin_navigation(Json(header)).await;
        assert_eq!(result.plugins.len(), 2);
        assert_eq!(result.plugins[1].route, "/plugins/groupcategories");
        assert_eq!(result.plugins[1].icon, "fa-users");
    }
}
