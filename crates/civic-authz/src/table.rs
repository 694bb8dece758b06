//! Role-to-permission grant table.
//!
//! # Purpose
//! Holds the grant set for every [`Role`]. The table is built once and never
//! mutated afterwards.
//!
//! # Key invariants
//! - Every role has exactly one entry.
//! - The super administrator entry is computed from [`Permission::ALL`], so it
//!   stays a superset of every other entry as permissions are added.
//! - All other entries are explicit, hand-maintained subsets.
use crate::{Permission, Role};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Set of permissions granted to a role.
///
/// Values handed out by the policy are owned copies; mutating one never
/// affects the table it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full permission universe.
    pub fn all() -> Self {
        Permission::ALL.into_iter().collect()
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_superset(&self, other: &PermissionSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PermissionSet {
    type Item = Permission;
    type IntoIter = std::collections::btree_set::IntoIter<Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone)]
pub struct RolePermissionTable {
    grants: BTreeMap<Role, PermissionSet>,
}

impl RolePermissionTable {
    pub fn new() -> Self {
        let grants = Role::ALL
            .into_iter()
            .map(|role| (role, default_grants(role)))
            .collect();
        Self { grants }
    }

    pub fn grants(&self, role: Role) -> Option<&PermissionSet> {
        self.grants.get(&role)
    }

    /// Entries in role order, most privileged first.
    pub fn entries(&self) -> impl Iterator<Item = (Role, &PermissionSet)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.grants.get(&role).map(|set| (role, set)))
    }
}

impl Default for RolePermissionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn default_grants(role: Role) -> PermissionSet {
    use Permission::*;

    match role {
        Role::SuperAdmin => PermissionSet::all(),
        Role::OrgAdmin => [
            ViewUsers,
            CreateUsers,
            EditUsers,
            ViewOrganizations,
            EditOrganizations,
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
        ]
        .into_iter()
        .collect(),
        Role::CampaignManager => [
            ViewCampaigns,
            CreateCampaigns,
            EditCampaigns,
            ViewRecommendations,
            RequestRecommendations,
            ViewContent,
            CreateContent,
            EditContent,
            ViewAnalytics,
        ]
        .into_iter()
        .collect(),
        Role::ContentCreator => [
            ViewCampaigns,
            ViewRecommendations,
            ViewContent,
            CreateContent,
            EditContent,
        ]
        .into_iter()
        .collect(),
        Role::Analyst => [
            ViewCampaigns,
            ViewRecommendations,
            ViewContent,
            ViewAnalytics,
            ExportAnalytics,
        ]
        .into_iter()
        .collect(),
        Role::Reviewer => [
            ViewCampaigns,
            ViewRecommendations,
            ReviewRecommendations,
            ViewContent,
            EditContent,
        ]
        .into_iter()
        .collect(),
        Role::Viewer => [ViewCampaigns, ViewRecommendations, ViewContent, ViewAnalytics]
            .into_iter()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_an_entry() {
        let table = RolePermissionTable::new();
        for role in Role::ALL {
            assert!(table.grants(role).is_some(), "{role}");
        }
        assert_eq!(table.entries().count(), Role::ALL.len());
    }

    #[test]
    fn super_admin_is_the_full_universe() {
        let table = RolePermissionTable::new();
        let grants = table.grants(Role::SuperAdmin).expect("super admin");
        assert_eq!(grants, &PermissionSet::all());
        assert_eq!(grants.len(), Permission::ALL.len());
    }

    #[test]
    fn grant_set_sizes() {
        let table = RolePermissionTable::new();
        let sizes: Vec<(Role, usize)> = table
            .entries()
            .map(|(role, set)| (role, set.len()))
            .collect();
        assert_eq!(
            sizes,
            vec![
                (Role::SuperAdmin, 24),
                (Role::OrgAdmin, 20),
                (Role::CampaignManager, 9),
                (Role::ContentCreator, 5),
                (Role::Analyst, 5),
                (Role::Reviewer, 5),
                (Role::Viewer, 4),
            ]
        );
    }

    #[test]
    fn org_admin_cannot_delete_users_or_manage_compliance() {
        let table = RolePermissionTable::new();
        let grants = table.grants(Role::OrgAdmin).expect("org admin");
        assert!(!grants.contains(Permission::DeleteUsers));
        assert!(!grants.contains(Permission::CreateOrganizations));
        assert!(!grants.contains(Permission::DeleteOrganizations));
        assert!(!grants.contains(Permission::ManageCompliance));
        assert!(grants.contains(Permission::ViewAuditLogs));
    }

    #[test]
    fn permission_set_iterates_in_declaration_order() {
        let set: PermissionSet = [Permission::ViewAnalytics, Permission::ViewUsers]
            .into_iter()
            .collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Permission::ViewUsers, Permission::ViewAnalytics]
        );
    }

    #[test]
    fn permission_set_serializes_as_list() {
        let set: PermissionSet = [Permission::ViewContent, Permission::ViewCampaigns]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"["view_campaigns","view_content"]"#);
    }

    #[test]
    fn permission_set_deserializes_from_list() {
        let set: PermissionSet =
            serde_json::from_str(r#"["view_content", "view_campaigns", "view_content"]"#)
                .expect("deserialize");
        assert_eq!(set.len(), 2);
        assert!(set.contains(Permission::ViewCampaigns));
        assert!(serde_json::from_str::<PermissionSet>(r#"["edit_everything"]"#).is_err());
    }
}
