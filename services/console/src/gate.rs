//! Element-level visibility for the console.
//!
//! # Purpose
//! Decides whether a button, menu entry, or panel is shown to the current
//! principal, given the [`Requirement`] attached to it.
//!
//! # Key invariants
//! - No principal (or an inactive one) sees nothing, not even unrestricted
//!   elements.
use crate::session::SessionUser;
use civic_authz::{AuthorizationPolicy, Requirement};
use std::sync::Arc;

/// Decides whether an individual element (button, menu entry, panel) is shown.
#[derive(Debug, Clone)]
pub struct ActionGate {
    policy: Arc<AuthorizationPolicy>,
}

impl ActionGate {
    pub fn new(policy: Arc<AuthorizationPolicy>) -> Self {
        Self { policy }
    }

    /// A missing or inactive principal hides the element, even when it is
    /// unrestricted.
    pub fn allows(&self, principal: Option<&SessionUser>, requirement: &Requirement) -> bool {
        let Some(role) = principal.filter(|user| user.is_active).map(SessionUser::active_role)
        else {
            return false;
        };
        let allowed = self.policy.satisfies(role, requirement);
        if !allowed {
            tracing::debug!(role = role.unwrap_or_default(), %requirement, "action hidden");
        }
        allowed
    }
}
