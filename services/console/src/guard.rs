//! Route-level access decisions for the console.
//!
//! # Purpose
//! Decides whether a path renders or redirects for the current principal.
//!
//! # Key invariants
//! - No principal (or an inactive one) always redirects to the login route.
//! - Routes come from the sidebar table plus the public login route.
//! - A denied route, the root, and any unknown path redirect to the landing
//!   route, which every active principal may render (enforced by
//!   [`ConsoleConfig::new`]).
//!
//! # Security considerations
//! - Decisions only affect what the browser renders. The backend repeats
//!   every check on its own.
use crate::config::ConsoleConfig;
use crate::navigation::{self, NAVIGATION};
use crate::session::SessionUser;
use civic_authz::{AuthorizationPolicy, Requirement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RouteDecision {
    Render,
    Redirect { to: String },
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    policy: Arc<AuthorizationPolicy>,
    login_route: String,
    landing_route: String,
}

impl RouteGuard {
    pub fn new(policy: Arc<AuthorizationPolicy>, config: &ConsoleConfig) -> Self {
        Self {
            policy,
            login_route: config.login_route().to_string(),
            landing_route: config.landing_route().to_string(),
        }
    }

    /// Requirement for a known route, `None` for unknown paths.
    pub fn route_requirement(&self, path: &str) -> Option<Requirement> {
        let path = navigation::normalize_path(path);
        if path == self.login_route {
            return Some(Requirement::Unrestricted);
        }
        NAVIGATION
            .iter()
            .find(|item| item.href == path)
            .map(|item| item.requirement())
    }

    pub fn decide(&self, principal: Option<&SessionUser>, path: &str) -> RouteDecision {
        let path = navigation::normalize_path(path);
        if path == self.login_route {
            return RouteDecision::Render;
        }

        let Some(principal) = principal.filter(|user| user.is_active) else {
            tracing::debug!(path, "no active session; redirecting to login");
            return RouteDecision::Redirect {
                to: self.login_route.clone(),
            };
        };

        let Some(requirement) = self.route_requirement(path) else {
            tracing::debug!(path, "unknown route; redirecting to landing");
            return self.landing();
        };

        let role = principal.active_role();
        if self.policy.satisfies(role, &requirement) {
            return RouteDecision::Render;
        }

        tracing::debug!(
            path,
            role = role.unwrap_or_default(),
            %requirement,
            "route denied; redirecting to landing"
        );
        self.landing()
    }

    fn landing(&self) -> RouteDecision {
        RouteDecision::Redirect {
            to: self.landing_route.clone(),
        }
    }
}
