//! Civic engagement admin console library crate.
//!
//! # Purpose
//! Exposes the consumers of the authorization policy (route guard, action
//! gate, sidebar navigation), the session principal, configuration, and
//! logging setup for use by the `civic-console` binary and tests.
//!
//! # Notes
//! Every decision here is advisory: it shapes what the browser renders, while
//! the backend remains the enforcement point.
pub mod app;
pub mod commands;
pub mod config;
pub mod gate;
pub mod guard;
pub mod navigation;
pub mod observability;
pub mod session;
