use crate::{AuthzResult, Permission};
use serde::{Deserialize, Serialize};

/// What a guarded element asks of the current principal.
///
/// Built from the three optional gate parameters with fixed precedence: a
/// single permission wins, then a non-empty any-of list, then a non-empty
/// all-of list. With none of them the element is unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "permissions", rename_all = "snake_case")]
pub enum Requirement {
    Permission(Permission),
    AnyOf(Vec<Permission>),
    AllOf(Vec<Permission>),
    Unrestricted,
}

impl Requirement {
    pub fn from_parts(
        permission: Option<Permission>,
        any_of: &[Permission],
        all_of: &[Permission],
    ) -> Self {
        if let Some(permission) = permission {
            Requirement::Permission(permission)
        } else if !any_of.is_empty() {
            Requirement::AnyOf(any_of.to_vec())
        } else if !all_of.is_empty() {
            Requirement::AllOf(all_of.to_vec())
        } else {
            Requirement::Unrestricted
        }
    }

    /// Parse gate parameters given as wire strings.
    ///
    /// # Errors
    /// - [`crate::AuthzError::InvalidPermission`] for any unknown identifier.
    pub fn parse_parts<S: AsRef<str>>(
        permission: Option<&str>,
        any_of: &[S],
        all_of: &[S],
    ) -> AuthzResult<Self> {
        let permission = permission.map(str::parse::<Permission>).transpose()?;
        let any_of = parse_all(any_of)?;
        let all_of = parse_all(all_of)?;
        Ok(Self::from_parts(permission, &any_of, &all_of))
    }

    pub fn permissions(&self) -> &[Permission] {
        match self {
            Requirement::Permission(permission) => std::slice::from_ref(permission),
            Requirement::AnyOf(permissions) | Requirement::AllOf(permissions) => permissions,
            Requirement::Unrestricted => &[],
        }
    }
}

fn parse_all<S: AsRef<str>>(values: &[S]) -> AuthzResult<Vec<Permission>> {
    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        parsed.push(value.as_ref().parse()?);
    }
    Ok(parsed)
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = |permissions: &[Permission]| {
            permissions
                .iter()
                .map(|permission| permission.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            Requirement::Permission(permission) => f.write_str(permission.as_str()),
            Requirement::AnyOf(permissions) => write!(f, "any of [{}]", joined(permissions)),
            Requirement::AllOf(permissions) => write!(f, "all of [{}]", joined(permissions)),
            Requirement::Unrestricted => f.write_str("unrestricted"),
        }
    }
}
