//! Role resolution over a principal's assignment snapshot.
//!
//! The resolver is a pure function: no I/O, no mutation, no shared state. It
//! is safe to call concurrently from any number of threads or tasks on
//! independent snapshots without coordination. Callers own snapshot
//! freshness; soft-deleted records must be excluded upstream.

use tracing::trace;

use crate::assignment::{AuthorizationQuery, RoleAssignment};

/// Decides whether a snapshot of role assignments grants the queried role
///
/// Only committed assignments whose name equals the queried role name are
/// considered. Each one is then classified against the query target:
/// global grants match any query, class-scoped grants require a target of
/// the same resource type, and instance-scoped grants additionally require
/// a matching id. Any single eligible assignment grants; the model is
/// additive-only with no notion of deny.
///
/// The result is deterministic and independent of assignment order;
/// duplicates are idempotent.
///
/// # Examples
///
/// ```rust
/// use rolegate::{authorize, AuthorizationQuery, ResourceRef, RoleAssignment};
///
/// let assignments = vec![
///     RoleAssignment::global("admin"),
///     RoleAssignment::class_scoped("mod", "Post"),
/// ];
///
/// assert!(authorize(&assignments, &AuthorizationQuery::for_role("admin")));
/// assert!(authorize(
///     &assignments,
///     &AuthorizationQuery::for_resource("mod", ResourceRef::new("Post", "7")),
/// ));
/// assert!(!authorize(&assignments, &AuthorizationQuery::for_role("mod")));
/// ```
pub fn authorize(assignments: &[RoleAssignment], query: &AuthorizationQuery) -> bool {
    let granted = assignments
        .iter()
        .filter(|a| !a.pending && a.name == query.role_name)
        .any(|a| a.scope.permits(query.target.as_ref()));

    trace!(
        role = %query.role_name,
        resource = ?query.target,
        granted,
        "authorization decision"
    );

    granted
}
