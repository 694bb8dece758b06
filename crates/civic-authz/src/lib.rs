//! Role-based authorization model for the civic engagement admin console.
//!
//! # Purpose
//! Centralizes the closed role and permission sets, the static grant table,
//! and the fail-closed predicates the console uses to decide what to render.
//!
//! # How it fits
//! The console builds one [`AuthorizationPolicy`] at startup and hands it to
//! route guards, action gates, and navigation filtering. The role string comes
//! from the backend session and is treated as opaque input.
//!
//! # Key invariants
//! - The super administrator grant set is the full permission universe by
//!   construction.
//! - Missing, empty, or unrecognized inputs deny; nothing here returns an
//!   error from a permission check.
//! - Empty any-of and all-of lists are never satisfied.
//!
//! # Examples
//! ```rust
//! use civic_authz::{AuthorizationPolicy, Permission, Role};
//!
//! let policy = AuthorizationPolicy::new();
//! assert!(policy.grants(Role::Analyst, Permission::ExportAnalytics));
//! assert!(policy.has_any_permission(Some("analyst"), &["create_campaigns", "view_analytics"]));
//! assert!(!policy.has_all_permissions(Some("analyst"), &["create_campaigns", "view_analytics"]));
//! ```
//!
//! # Common pitfalls
//! - Client-side checks are advisory. The backend enforces authorization.
//! - Parsing role strings with `FromStr` reports errors; the predicates do not.
mod errors;
mod permission;
mod policy;
mod requirement;
mod role;
mod table;

pub use errors::{AuthzError, AuthzResult};
pub use permission::{Permission, PermissionCategory};
pub use policy::AuthorizationPolicy;
pub use requirement::Requirement;
pub use role::{Role, UNKNOWN_ROLE_DESCRIPTION};
pub use table::{PermissionSet, RolePermissionTable};
