//! Assignment types: grants, resource references and queries.
//!
//! A principal store materializes its role records into [`RoleAssignment`]
//! values at this boundary; malformed records are rejected here so the
//! resolver never has to detect them.

mod types;

pub use types::{AuthorizationQuery, GrantScope, ResourceRef, RoleAssignment};
