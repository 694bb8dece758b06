//! Console roles and their presentation metadata.
//!
//! # Purpose
//! Models the closed set of roles the backend assigns to user accounts.
//!
//! # Key invariants
//! - Role strings arrive from the session as opaque data; an unknown string
//!   does not parse and is never an error at the predicate layer.
//! - Labels and descriptions are presentation only and carry no authority.
use crate::AuthzError;
use serde::{Deserialize, Serialize};

/// Description returned for role strings outside the closed set.
pub const UNKNOWN_ROLE_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    OrgAdmin,
    CampaignManager,
    ContentCreator,
    Analyst,
    Reviewer,
    Viewer,
}

impl Role {
    /// Every role, most privileged first.
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::OrgAdmin,
        Role::CampaignManager,
        Role::ContentCreator,
        Role::Analyst,
        Role::Reviewer,
        Role::Viewer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::OrgAdmin => "org_admin",
            Role::CampaignManager => "campaign_manager",
            Role::ContentCreator => "content_creator",
            Role::Analyst => "analyst",
            Role::Reviewer => "reviewer",
            Role::Viewer => "viewer",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Administrator",
            Role::OrgAdmin => "Organization Administrator",
            Role::CampaignManager => "Campaign Manager",
            Role::ContentCreator => "Content Creator",
            Role::Analyst => "Analyst",
            Role::Reviewer => "Reviewer",
            Role::Viewer => "Viewer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Full system access and control",
            Role::OrgAdmin => "Manage organization users, campaigns, and content",
            Role::CampaignManager => "Create and manage campaigns",
            Role::ContentCreator => "Create and edit content",
            Role::Analyst => "View analytics and generate reports",
            Role::Reviewer => "Review AI recommendations and content",
            Role::Viewer => "Read-only access to campaigns and content",
        }
    }

    /// Platform-wide and organization administrators.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::OrgAdmin)
    }

    /// Parse an opaque session role, mapping anything unrecognized to `None`.
    pub fn lookup(value: &str) -> Option<Role> {
        value.parse().ok()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Role::SuperAdmin),
            "org_admin" => Ok(Role::OrgAdmin),
            "campaign_manager" => Ok(Role::CampaignManager),
            "content_creator" => Ok(Role::ContentCreator),
            "analyst" => Ok(Role::Analyst),
            "reviewer" => Ok(Role::Reviewer),
            "viewer" => Ok(Role::Viewer),
            _ => Err(AuthzError::InvalidRole(value.to_string())),
        }
    }
}
