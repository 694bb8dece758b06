//! Console application wiring.
//!
//! # Purpose
//! Builds the single authorization policy at startup and hands shared
//! references to every consumer (route guard, action gate, navigation).
use crate::config::ConsoleConfig;
use crate::gate::ActionGate;
use crate::guard::RouteGuard;
use crate::navigation::{self, NavItem};
use civic_authz::AuthorizationPolicy;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub config: ConsoleConfig,
    pub policy: Arc<AuthorizationPolicy>,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            policy: Arc::new(AuthorizationPolicy::new()),
        }
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.policy.clone(), &self.config)
    }

    pub fn action_gate(&self) -> ActionGate {
        ActionGate::new(self.policy.clone())
    }

    pub fn navigation(&self, role: Option<&str>) -> Vec<&'static NavItem> {
        navigation::visible_items(&self.policy, role)
    }
}

pub fn build_state(config: ConsoleConfig) -> ConsoleState {
    let state = ConsoleState::new(config);
    tracing::info!(
        login_route = state.config.login_route(),
        landing_route = state.config.landing_route(),
        roles = state.policy.table().entries().count(),
        "authorization policy loaded"
    );
    state
}
