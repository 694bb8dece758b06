//! Console route configuration.
//!
//! # Purpose
//! Loads the login and landing routes from the environment, optionally
//! overridden by a YAML file.
//!
//! # Key invariants
//! - Both routes are stored in normalized form (leading `/`, no trailing `/`
//!   except on the root).
//! - The login route is never one of the sidebar pages.
//! - The landing route is either the login route or a page every signed-in
//!   user may render, so a denied request never redirects back to itself.
use crate::navigation;
use anyhow::{Context, Result};
use civic_authz::Requirement;
use serde::Deserialize;
use std::fs;

pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    login_route: String,
    landing_route: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleConfigOverride {
    login_route: Option<String>,
    landing_route: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            landing_route: DEFAULT_LANDING_ROUTE.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Build a configuration from explicit routes.
    ///
    /// # Errors
    /// - Either route does not start with `/`.
    /// - The login route is a sidebar page.
    /// - The landing route is unknown or needs a permission.
    pub fn new(login_route: &str, landing_route: &str) -> Result<Self> {
        let login_route = validate_route(login_route).context("parse login_route")?;
        let landing_route = validate_route(landing_route).context("parse landing_route")?;

        if let Some(item) = navigation::find_item(&login_route) {
            anyhow::bail!(
                "login_route {login_route:?} collides with the {} page",
                item.name
            );
        }
        if landing_route != login_route {
            match navigation::find_item(&landing_route) {
                Some(item) if item.requirement() == Requirement::Unrestricted => {}
                Some(item) => anyhow::bail!(
                    "landing_route {landing_route:?} requires {}; it must be open to every signed-in user",
                    item.requirement()
                ),
                None => anyhow::bail!("landing_route {landing_route:?} is not a console page"),
            }
        }

        Ok(Self {
            login_route,
            landing_route,
        })
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn landing_route(&self) -> &str {
        &self.landing_route
    }

    pub fn from_env() -> Result<Self> {
        let (login_route, landing_route) = env_routes()?;
        Self::new(&login_route, &landing_route).context("check console routes from environment")
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let (mut login_route, mut landing_route) = env_routes()?;
        if let Ok(path) = std::env::var("CIVIC_CONSOLE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read CIVIC_CONSOLE_CONFIG: {path}"))?;
            let override_cfg: ConsoleConfigOverride =
                serde_yaml::from_str(&contents).context("parse console config yaml")?;
            if let Some(value) = override_cfg.login_route {
                login_route = validate_route(&value).context("parse login_route")?;
            }
            if let Some(value) = override_cfg.landing_route {
                landing_route = validate_route(&value).context("parse landing_route")?;
            }
        }
        Self::new(&login_route, &landing_route).context("check console routes")
    }
}

fn env_routes() -> Result<(String, String)> {
    let login_route = match std::env::var("CIVIC_CONSOLE_LOGIN_ROUTE") {
        Ok(value) => validate_route(&value).context("parse CIVIC_CONSOLE_LOGIN_ROUTE")?,
        Err(_) => DEFAULT_LOGIN_ROUTE.to_string(),
    };
    let landing_route = match std::env::var("CIVIC_CONSOLE_LANDING_ROUTE") {
        Ok(value) => validate_route(&value).context("parse CIVIC_CONSOLE_LANDING_ROUTE")?,
        Err(_) => DEFAULT_LANDING_ROUTE.to_string(),
    };
    Ok((login_route, landing_route))
}

fn validate_route(value: &str) -> Result<String> {
    let route = navigation::normalize_path(value);
    if !route.starts_with('/') {
        anyhow::bail!("route must start with '/': {route:?}");
    }
    Ok(route.to_string())
}
