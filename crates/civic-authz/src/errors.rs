use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("invalid permission: {0}")]
    InvalidPermission(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;
