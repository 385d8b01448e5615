//! Error types for the role resolution engine

use thiserror::Error;

/// Result type alias for role resolution operations
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Errors raised at the boundary where role assignments are constructed
///
/// Resolution itself never fails: an unknown role name, an empty snapshot or
/// an absent target are all normal `false` outcomes, not errors. The only
/// failure mode is a malformed assignment record, which is rejected before it
/// can enter a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// Assignment record violates a structural invariant
    #[error("invalid role assignment '{role}': {reason}")]
    InvalidAssignment { role: String, reason: String },
}

impl AuthzError {
    pub(crate) fn invalid_assignment(role: impl Into<String>, reason: impl Into<String>) -> Self {
        AuthzError::InvalidAssignment {
            role: role.into(),
            reason: reason.into(),
        }
    }
}
