//! Reports behind the `civic-console` subcommands.
//!
//! Each report is plain data: the binary prints it as text through `Display`
//! or as JSON through `serde`.
use crate::app::ConsoleState;
use crate::guard::RouteDecision;
use crate::navigation::{self, NavItem};
use crate::session::SessionUser;
use anyhow::{Context, Result};
use civic_authz::{AuthorizationPolicy, Permission, PermissionCategory, Requirement, Role};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Resolve the principal from `--role` or `--session`; neither means anonymous.
pub fn load_principal(role: Option<&str>, session: Option<&Path>) -> Result<Option<SessionUser>> {
    if let Some(path) = session {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read session file: {}", path.display()))?;
        let user = SessionUser::from_json(&raw)
            .with_context(|| format!("load session file: {}", path.display()))?;
        return Ok(Some(user));
    }
    Ok(role.map(SessionUser::with_role))
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: Role,
    pub display_name: &'static str,
    pub description: &'static str,
    pub admin: bool,
    pub permission_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RolesReport {
    pub roles: Vec<RoleSummary>,
}

pub fn roles_report(policy: &AuthorizationPolicy) -> RolesReport {
    let roles = policy
        .table()
        .entries()
        .map(|(role, grants)| RoleSummary {
            role,
            display_name: role.display_name(),
            description: role.description(),
            admin: role.is_admin(),
            permission_count: grants.len(),
        })
        .collect();
    RolesReport { roles }
}

impl fmt::Display for RolesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.roles {
            let admin = if summary.admin { " [admin]" } else { "" };
            writeln!(
                f,
                "{:<17} {:<27} {:>2} permissions{admin}",
                summary.role.as_str(),
                summary.display_name,
                summary.permission_count
            )?;
            writeln!(f, "{:<17} {}", "", summary.description)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGrants {
    pub category: PermissionCategory,
    pub label: &'static str,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionsReport {
    pub role: String,
    pub display_name: String,
    pub description: &'static str,
    pub recognized: bool,
    pub categories: Vec<CategoryGrants>,
}

pub fn permissions_report(policy: &AuthorizationPolicy, role: &str) -> PermissionsReport {
    let grants = policy.role_permissions(role);
    let categories = PermissionCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let permissions: Vec<Permission> = category
                .permissions()
                .filter(|permission| grants.contains(*permission))
                .collect();
            (!permissions.is_empty()).then(|| CategoryGrants {
                category,
                label: category.label(),
                permissions,
            })
        })
        .collect();
    PermissionsReport {
        role: role.to_string(),
        display_name: policy.display_name(role),
        description: policy.description(role),
        recognized: Role::lookup(role).is_some(),
        categories,
    }
}

impl fmt::Display for PermissionsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.display_name, self.role)?;
        writeln!(f, "{}", self.description)?;
        if self.categories.is_empty() {
            return writeln!(f, "  no permissions");
        }
        for group in &self.categories {
            writeln!(f, "  {}:", group.label)?;
            for permission in &group.permissions {
                writeln!(f, "    {permission}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub role: Option<String>,
    pub requirement: Requirement,
    pub allowed: bool,
}

pub fn check_report(
    state: &ConsoleState,
    principal: Option<&SessionUser>,
    requirement: Requirement,
) -> CheckReport {
    let allowed = state.action_gate().allows(principal, &requirement);
    CheckReport {
        role: principal.and_then(|user| user.role.clone()),
        requirement,
        allowed,
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.allowed { "allowed" } else { "denied" };
        let role = self.role.as_deref().unwrap_or("<none>");
        writeln!(f, "{verdict}: role {role} requires {}", self.requirement)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavReport {
    pub role: Option<String>,
    pub items: Vec<NavItem>,
}

pub fn nav_report(state: &ConsoleState, principal: Option<&SessionUser>) -> NavReport {
    let role = principal.and_then(SessionUser::active_role);
    let items = match principal {
        Some(user) if user.is_active => state.navigation(role).into_iter().copied().collect(),
        _ => Vec::new(),
    };
    NavReport {
        role: role.map(str::to_string),
        items,
    }
}

impl fmt::Display for NavReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "no navigation (not signed in)");
        }
        for item in &self.items {
            writeln!(f, "{:<14} {}", item.name, item.href)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub path: String,
    pub title: &'static str,
    #[serde(flatten)]
    pub decision: RouteDecision,
}

pub fn route_report(state: &ConsoleState, principal: Option<&SessionUser>, path: &str) -> RouteReport {
    let normalized = navigation::normalize_path(path);
    RouteReport {
        path: path.to_string(),
        title: navigation::page_title(normalized),
        decision: state.route_guard().decide(principal, normalized),
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decision {
            RouteDecision::Render => writeln!(f, "render {} ({})", self.path, self.title),
            RouteDecision::Redirect { to } => writeln!(f, "redirect {} -> {to}", self.path),
        }
    }
}
