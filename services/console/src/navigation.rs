//! Sidebar navigation for the admin console.
//!
//! # Purpose
//! Declares the console sections, the permission each one needs, and the
//! filtering applied before the sidebar is rendered.
//!
//! # Key invariants
//! - Items without a permission are visible to every authenticated user.
//! - Filtering never reorders items.
use civic_authz::{AuthorizationPolicy, Permission, Requirement};
use serde::Serialize;

pub const DEFAULT_PAGE_TITLE: &str = "Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub permission: Option<Permission>,
}

impl NavItem {
    pub fn requirement(&self) -> Requirement {
        Requirement::from_parts(self.permission, &[], &[])
    }
}

pub static NAVIGATION: [NavItem; 6] = [
    NavItem {
        name: "Dashboard",
        href: "/dashboard",
        permission: None,
    },
    NavItem {
        name: "Users",
        href: "/dashboard/users",
        permission: Some(Permission::ViewUsers),
    },
    NavItem {
        name: "Organizations",
        href: "/dashboard/organizations",
        permission: Some(Permission::ViewOrganizations),
    },
    NavItem {
        name: "Campaigns",
        href: "/dashboard/campaigns",
        permission: Some(Permission::ViewCampaigns),
    },
    NavItem {
        name: "AI Agents",
        href: "/dashboard/ai-agents",
        permission: Some(Permission::ViewRecommendations),
    },
    NavItem {
        name: "Analytics",
        href: "/dashboard/analytics",
        permission: Some(Permission::ViewAnalytics),
    },
];

/// Items the given role may see, in sidebar order.
pub fn visible_items(policy: &AuthorizationPolicy, role: Option<&str>) -> Vec<&'static NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| policy.satisfies(role, &item.requirement()))
        .collect()
}

/// Canonical form of a console path: surrounding whitespace and trailing
/// slashes are dropped, the root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim();
    let stripped = trimmed.trim_end_matches('/');
    if stripped.is_empty() && trimmed.starts_with('/') {
        "/"
    } else {
        stripped
    }
}

pub fn find_item(path: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().find(|item| item.href == path)
}

/// Header title for the current path.
pub fn page_title(path: &str) -> &'static str {
    find_item(path).map_or(DEFAULT_PAGE_TITLE, |item| item.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&NavItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    #[test]
    fn super_admin_sees_everything() {
        let policy = AuthorizationPolicy::new();
        let items = visible_items(&policy, Some("super_admin"));
        assert_eq!(items.len(), NAVIGATION.len());
    }

    #[test]
    fn viewer_sees_read_only_sections() {
        let policy = AuthorizationPolicy::new();
        let items = visible_items(&policy, Some("viewer"));
        assert_eq!(
            names(&items),
            vec!["Dashboard", "Campaigns", "AI Agents", "Analytics"]
        );
    }

    #[test]
    fn reviewer_has_no_analytics() {
        let policy = AuthorizationPolicy::new();
        let items = visible_items(&policy, Some("reviewer"));
        assert_eq!(names(&items), vec!["Dashboard", "Campaigns", "AI Agents"]);
    }

    #[test]
    fn unknown_role_keeps_only_unrestricted_items() {
        let policy = AuthorizationPolicy::new();
        assert_eq!(names(&visible_items(&policy, Some("guest"))), vec!["Dashboard"]);
        assert_eq!(names(&visible_items(&policy, None)), vec!["Dashboard"]);
    }

    #[test]
    fn page_titles() {
        assert_eq!(page_title("/dashboard/ai-agents"), "AI Agents");
        assert_eq!(page_title("/dashboard/users"), "Users");
        assert_eq!(page_title("/dashboard/settings"), DEFAULT_PAGE_TITLE);
        assert_eq!(page_title(""), DEFAULT_PAGE_TITLE);
    }

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize_path("/dashboard/users/"), "/dashboard/users");
        assert_eq!(normalize_path(" /signin// "), "/signin");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/dashboard"), "/dashboard");
    }
}
