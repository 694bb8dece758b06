//! Permission and permission-category primitives.
//!
//! # Purpose
//! Defines the closed set of atomic actions the console can gate, and the
//! category each action belongs to.
//!
//! # How it fits
//! The role table grants sets of [`Permission`] values; route guards and
//! action gates ask the policy about them.
//!
//! # Key invariants
//! - The permission set is closed; nothing is derived or combined at runtime.
//! - Wire strings are snake_case and match the backend's identifiers.
//! - [`Permission::ALL`] lists every variant exactly once.
//!
//! # Examples
//! ```rust
//! use civic_authz::{Permission, PermissionCategory};
//!
//! let permission: Permission = "review_recommendations".parse().unwrap();
//! assert_eq!(permission.category(), PermissionCategory::Recommendations);
//! ```
//!
//! # Common pitfalls
//! - Adding a variant without listing it in [`Permission::ALL`] leaves it out
//!   of the super administrator grant set; the test module guards against it.
use crate::AuthzError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewUsers,
    CreateUsers,
    EditUsers,
    DeleteUsers,

    ViewOrganizations,
    CreateOrganizations,
    EditOrganizations,
    DeleteOrganizations,

    ViewCampaigns,
    CreateCampaigns,
    EditCampaigns,
    DeleteCampaigns,

    ViewRecommendations,
    RequestRecommendations,
    ReviewRecommendations,

    ViewContent,
    CreateContent,
    EditContent,
    DeleteContent,
    PublishContent,

    ViewAnalytics,
    ExportAnalytics,

    ViewAuditLogs,
    ManageCompliance,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 24] = [
        Permission::ViewUsers,
        Permission::CreateUsers,
        Permission::EditUsers,
        Permission::DeleteUsers,
        Permission::ViewOrganizations,
        Permission::CreateOrganizations,
        Permission::EditOrganizations,
        Permission::DeleteOrganizations,
        Permission::ViewCampaigns,
        Permission::CreateCampaigns,
        Permission::EditCampaigns,
        Permission::DeleteCampaigns,
        Permission::ViewRecommendations,
        Permission::RequestRecommendations,
        Permission::ReviewRecommendations,
        Permission::ViewContent,
        Permission::CreateContent,
        Permission::EditContent,
        Permission::DeleteContent,
        Permission::PublishContent,
        Permission::ViewAnalytics,
        Permission::ExportAnalytics,
        Permission::ViewAuditLogs,
        Permission::ManageCompliance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::ViewUsers => "view_users",
            Permission::CreateUsers => "create_users",
            Permission::EditUsers => "edit_users",
            Permission::DeleteUsers => "delete_users",
            Permission::ViewOrganizations => "view_organizations",
            Permission::CreateOrganizations => "create_organizations",
            Permission::EditOrganizations => "edit_organizations",
            Permission::DeleteOrganizations => "delete_organizations",
            Permission::ViewCampaigns => "view_campaigns",
            Permission::CreateCampaigns => "create_campaigns",
            Permission::EditCampaigns => "edit_campaigns",
            Permission::DeleteCampaigns => "delete_campaigns",
            Permission::ViewRecommendations => "view_recommendations",
            Permission::RequestRecommendations => "request_recommendations",
            Permission::ReviewRecommendations => "review_recommendations",
            Permission::ViewContent => "view_content",
            Permission::CreateContent => "create_content",
            Permission::EditContent => "edit_content",
            Permission::DeleteContent => "delete_content",
            Permission::PublishContent => "publish_content",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ExportAnalytics => "export_analytics",
            Permission::ViewAuditLogs => "view_audit_logs",
            Permission::ManageCompliance => "manage_compliance",
        }
    }

    pub fn category(self) -> PermissionCategory {
        match self {
            Permission::ViewUsers
            | Permission::CreateUsers
            | Permission::EditUsers
            | Permission::DeleteUsers => PermissionCategory::Users,
            Permission::ViewOrganizations
            | Permission::CreateOrganizations
            | Permission::EditOrganizations
            | Permission::DeleteOrganizations => PermissionCategory::Organizations,
            Permission::ViewCampaigns
            | Permission::CreateCampaigns
            | Permission::EditCampaigns
            | Permission::DeleteCampaigns => PermissionCategory::Campaigns,
            Permission::ViewRecommendations
            | Permission::RequestRecommendations
            | Permission::ReviewRecommendations => PermissionCategory::Recommendations,
            Permission::ViewContent
            | Permission::CreateContent
            | Permission::EditContent
            | Permission::DeleteContent
            | Permission::PublishContent => PermissionCategory::Content,
            Permission::ViewAnalytics | Permission::ExportAnalytics => {
                PermissionCategory::Analytics
            }
            Permission::ViewAuditLogs | Permission::ManageCompliance => PermissionCategory::System,
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AuthzError::InvalidPermission(value.to_string()))
    }
}

/// Grouping used when listing permissions to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Users,
    Organizations,
    Campaigns,
    Recommendations,
    Content,
    Analytics,
    System,
}

impl PermissionCategory {
    pub const ALL: [PermissionCategory; 7] = [
        PermissionCategory::Users,
        PermissionCategory::Organizations,
        PermissionCategory::Campaigns,
        PermissionCategory::Recommendations,
        PermissionCategory::Content,
        PermissionCategory::Analytics,
        PermissionCategory::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PermissionCategory::Users => "User Management",
            PermissionCategory::Organizations => "Organization Management",
            PermissionCategory::Campaigns => "Campaign Management",
            PermissionCategory::Recommendations => "AI Recommendations",
            PermissionCategory::Content => "Content Management",
            PermissionCategory::Analytics => "Analytics",
            PermissionCategory::System => "System",
        }
    }

    /// Permissions belonging to this category, in declaration order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::ALL
            .into_iter()
            .filter(move |permission| permission.category() == self)
    }
}
