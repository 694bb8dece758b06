//! Authorization policy over the role grant table.
//!
//! # Purpose
//! Answers "may a principal holding role R perform P (or one of, or all of, a
//! list of permissions)?" with no side effects and no I/O.
//!
//! # How it fits
//! Built once at process start and shared by reference with route guards,
//! action gates, and navigation filtering.
//!
//! # Key invariants
//! - Every check is fail-closed: a missing, empty, or unrecognized role or
//!   permission yields `false` (or an empty set), never an error.
//! - An empty requirement list is never satisfied, for both the any-of and
//!   all-of checks.
//!
//! # Examples
//! ```rust
//! use civic_authz::AuthorizationPolicy;
//!
//! let policy = AuthorizationPolicy::new();
//! assert!(policy.has_permission(Some("reviewer"), Some("review_recommendations")));
//! assert!(!policy.has_permission(Some("reviewer"), Some("create_campaigns")));
//! assert!(!policy.has_permission(None, Some("view_content")));
//! ```
//!
//! # Common pitfalls
//! - These checks only shape what the console renders. The backend must
//!   enforce the same rules on every request.
use crate::requirement::Requirement;
use crate::role::UNKNOWN_ROLE_DESCRIPTION;
use crate::{Permission, PermissionSet, Role, RolePermissionTable};

#[derive(Debug, Clone, Default)]
pub struct AuthorizationPolicy {
    table: RolePermissionTable,
}

impl AuthorizationPolicy {
    pub fn new() -> Self {
        Self {
            table: RolePermissionTable::new(),
        }
    }

    pub fn table(&self) -> &RolePermissionTable {
        &self.table
    }

    /// Typed membership check against the grant table.
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.table
            .grants(role)
            .is_some_and(|set| set.contains(permission))
    }

    pub fn grants_any(&self, role: Role, permissions: &[Permission]) -> bool {
        !permissions.is_empty()
            && permissions
                .iter()
                .any(|permission| self.grants(role, *permission))
    }

    pub fn grants_all(&self, role: Role, permissions: &[Permission]) -> bool {
        !permissions.is_empty()
            && permissions
                .iter()
                .all(|permission| self.grants(role, *permission))
    }

    /// Check a single permission for an opaque session role.
    ///
    /// # Returns
    /// - `false` when either input is `None` or empty, when the role is not
    ///   recognized, or when the permission is not in the role's grant set.
    pub fn has_permission(&self, role: Option<&str>, permission: Option<&str>) -> bool {
        let (Some(role), Some(permission)) = (present(role), present(permission)) else {
            return false;
        };
        let Some(role) = Role::lookup(role) else {
            return false;
        };
        permission
            .parse::<Permission>()
            .is_ok_and(|permission| self.grants(role, permission))
    }

    /// True when at least one listed permission is granted.
    ///
    /// Returns `false` for a missing role or an empty list.
    pub fn has_any_permission<S: AsRef<str>>(&self, role: Option<&str>, permissions: &[S]) -> bool {
        if present(role).is_none() || permissions.is_empty() {
            return false;
        }
        permissions
            .iter()
            .any(|permission| self.has_permission(role, Some(permission.as_ref())))
    }

    /// True when every listed permission is granted.
    ///
    /// Returns `false` for a missing role or an empty list; an empty
    /// requirement is deliberately not treated as vacuously satisfied.
    pub fn has_all_permissions<S: AsRef<str>>(
        &self,
        role: Option<&str>,
        permissions: &[S],
    ) -> bool {
        if present(role).is_none() || permissions.is_empty() {
            return false;
        }
        permissions
            .iter()
            .all(|permission| self.has_permission(role, Some(permission.as_ref())))
    }

    /// Evaluate a gate requirement for an opaque session role.
    pub fn satisfies(&self, role: Option<&str>, requirement: &Requirement) -> bool {
        if let Requirement::Unrestricted = requirement {
            return true;
        }
        let Some(role) = present(role).and_then(Role::lookup) else {
            return false;
        };
        match requirement {
            Requirement::Permission(permission) => self.grants(role, *permission),
            Requirement::AnyOf(permissions) => self.grants_any(role, permissions),
            Requirement::AllOf(permissions) => self.grants_all(role, permissions),
            Requirement::Unrestricted => true,
        }
    }

    /// Owned copy of the role's grant set; empty for unrecognized roles.
    pub fn role_permissions(&self, role: &str) -> PermissionSet {
        Role::lookup(role)
            .and_then(|role| self.table.grants(role))
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_admin_role(&self, role: &str) -> bool {
        Role::lookup(role).is_some_and(Role::is_admin)
    }

    /// Human-readable label, falling back to the raw role string.
    pub fn display_name(&self, role: &str) -> String {
        match Role::lookup(role) {
            Some(role) => role.display_name().to_string(),
            None => role.to_string(),
        }
    }

    pub fn description(&self, role: &str) -> &'static str {
        Role::lookup(role).map_or(UNKNOWN_ROLE_DESCRIPTION, Role::description)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviewer_scenario() {
        let policy = AuthorizationPolicy::new();
        assert!(policy.has_permission(Some("reviewer"), Some("review_recommendations")));
        assert!(!policy.has_permission(Some("reviewer"), Some("create_campaigns")));
    }

    #[test]
    fn analyst_any_versus_all() {
        let policy = AuthorizationPolicy::new();
        let wanted = ["create_campaigns", "view_analytics"];
        assert!(policy.has_any_permission(Some("analyst"), &wanted));
        assert!(!policy.has_all_permissions(Some("analyst"), &wanted));
    }

    #[test]
    fn missing_inputs_fail_closed() {
        let policy = AuthorizationPolicy::new();
        assert!(!policy.has_permission(None, Some("view_content")));
        assert!(!policy.has_permission(Some(""), Some("view_content")));
        assert!(!policy.has_permission(Some("super_admin"), None));
        assert!(!policy.has_permission(Some("super_admin"), Some("")));
        assert!(!policy.has_permission(Some("root"), Some("view_content")));
        assert!(!policy.has_permission(Some("super_admin"), Some("launch_rockets")));
    }

    #[test]
    fn empty_lists_are_never_satisfied() {
        let policy = AuthorizationPolicy::new();
        let none: [&str; 0] = [];
        assert!(!policy.has_any_permission(Some("super_admin"), &none));
        assert!(!policy.has_all_permissions(Some("super_admin"), &none));
        assert!(!policy.grants_any(Role::SuperAdmin, &[]));
        assert!(!policy.grants_all(Role::SuperAdmin, &[]));
    }

    #[test]
    fn list_checks_require_a_role() {
        let policy = AuthorizationPolicy::new();
        assert!(!policy.has_any_permission(None, &["view_content"]));
        assert!(!policy.has_all_permissions(Some(""), &["view_content"]));
    }

    #[test]
    fn unknown_permission_in_list() {
        let policy = AuthorizationPolicy::new();
        assert!(policy.has_any_permission(Some("viewer"), &["bogus", "view_content"]));
        assert!(!policy.has_all_permissions(Some("viewer"), &["bogus", "view_content"]));
    }

    #[test]
    fn satisfies_each_requirement_shape() {
        let policy = AuthorizationPolicy::new();
        let role = Some("campaign_manager");
        assert!(policy.satisfies(role, &Requirement::Permission(Permission::CreateCampaigns)));
        assert!(!policy.satisfies(role, &Requirement::Permission(Permission::DeleteCampaigns)));
        assert!(policy.satisfies(
            role,
            &Requirement::AnyOf(vec![Permission::DeleteCampaigns, Permission::EditCampaigns])
        ));
        assert!(!policy.satisfies(
            role,
            &Requirement::AllOf(vec![Permission::DeleteCampaigns, Permission::EditCampaigns])
        ));
        assert!(!policy.satisfies(role, &Requirement::AnyOf(Vec::new())));
        assert!(policy.satisfies(None, &Requirement::Unrestricted));
        assert!(!policy.satisfies(None, &Requirement::Permission(Permission::ViewContent)));
    }

    #[test]
    fn role_permissions_is_a_detached_copy() {
        let policy = AuthorizationPolicy::new();
        let mut copy = policy.role_permissions("viewer");
        assert!(copy.insert(Permission::DeleteUsers));
        assert!(!policy.has_permission(Some("viewer"), Some("delete_users")));
        assert!(policy.role_permissions("nonexistent_role").is_empty());
        assert!(policy.role_permissions("").is_empty());
    }

    #[test]
    fn admin_roles() {
        let policy = AuthorizationPolicy::new();
        assert!(policy.is_admin_role("super_admin"));
        assert!(policy.is_admin_role("org_admin"));
        assert!(!policy.is_admin_role("viewer"));
        assert!(!policy.is_admin_role("nonexistent_role"));
        assert!(!policy.is_admin_role(""));
    }

    #[test]
    fn presentation_fallbacks() {
        let policy = AuthorizationPolicy::new();
        assert_eq!(policy.display_name("content_creator"), "Content Creator");
        assert_eq!(policy.display_name("guest"), "guest");
        assert_eq!(policy.description("analyst"), "View analytics and generate reports");
        assert_eq!(policy.description("guest"), "No description available");
    }
}
