//! Session principal as reported by the backend.
//!
//! # Purpose
//! Parses the user object returned by `/api/auth/me` (bare or wrapped in a
//! `{"user": ...}` envelope) into the principal the guards consume.
//!
//! # Notes
//! The role stays a raw string. Guards resolve it through the policy, so an
//! unrecognized role degrades to "no access" rather than a parse failure.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SessionPayload {
    Wrapped { user: SessionUser },
    Bare(SessionUser),
}

fn default_active() -> bool {
    true
}

impl SessionUser {
    /// Principal carrying only a role, as used by the CLI `--role` flag.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            id: None,
            email: None,
            full_name: None,
            role: Some(role.into()),
            organization_id: None,
            is_active: true,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let payload: SessionPayload =
            serde_json::from_str(raw).context("parse session user json")?;
        Ok(match payload {
            SessionPayload::Wrapped { user } => user,
            SessionPayload::Bare(user) => user,
        })
    }

    /// Role to authorize with; inactive accounts carry none.
    pub fn active_role(&self) -> Option<&str> {
        if !self.is_active {
            return None;
        }
        self.role.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_me_response() {
        let raw = r#"{
            "user": {
                "id": 7,
                "email": "rev@example.org",
                "full_name": "Rae Viewer",
                "role": "reviewer",
                "organization_id": 3,
                "is_active": true,
                "is_verified": false,
                "created_at": "2024-01-01T00:00:00",
                "last_login": null
            }
        }"#;
        let user = SessionUser::from_json(raw).expect("session");
        assert_eq!(user.id, Some(7));
        assert_eq!(user.active_role(), Some("reviewer"));
        assert_eq!(user.organization_id, Some(3));
    }

    #[test]
    fn parses_bare_user_with_defaults() {
        let user = SessionUser::from_json(r#"{"role": "analyst"}"#).expect("session");
        assert!(user.is_active);
        assert_eq!(user.active_role(), Some("analyst"));
        assert_eq!(user.full_name, None);
    }

    #[test]
    fn inactive_user_has_no_active_role() {
        let user =
            SessionUser::from_json(r#"{"role": "super_admin", "is_active": false}"#).expect("session");
        assert_eq!(user.active_role(), None);
    }

    #[test]
    fn null_role_is_kept_as_missing() {
        let user = SessionUser::from_json(r#"{"role": null}"#).expect("session");
        assert_eq!(user.active_role(), None);
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(SessionUser::from_json("[1, 2, 3]").is_err());
        assert!(SessionUser::from_json("not json").is_err());
    }
}
