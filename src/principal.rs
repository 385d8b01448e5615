//! Principal snapshot: assignments plus entitlement state for one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::{AuthorizationQuery, ResourceRef, RoleAssignment};
use crate::{entitlement, resolver};

/// The entity whose permissions are being checked
///
/// Bundles the read-only snapshot a principal store loads for one user: the
/// role assignments and the optional entitlement expiry. Convenience methods
/// delegate to the pure resolver and entitlement functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,

    #[serde(default)]
    pub assignments: Vec<RoleAssignment>,

    /// Expiry of the time-limited entitlement, if one was ever granted
    #[serde(
        rename = "entitlementExpiresAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub entitlement_expires_at: Option<DateTime<Utc>>,
}

impl Principal {
    /// Creates a principal with no assignments and no entitlement
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assignments: Vec::new(),
            entitlement_expires_at: None,
        }
    }

    /// Checks whether this principal holds the named role
    ///
    /// Passing a target restricts the check to grants covering that resource;
    /// without one, only a global grant can satisfy the check.
    pub fn has_role(&self, role_name: impl Into<String>, target: Option<&ResourceRef>) -> bool {
        let query = AuthorizationQuery {
            role_name: role_name.into(),
            target: target.cloned(),
        };
        resolver::authorize(&self.assignments, &query)
    }

    /// Checks whether the time-limited entitlement is active at `now`
    pub fn has_active_entitlement(&self, now: DateTime<Utc>) -> bool {
        entitlement::is_active(self.entitlement_expires_at, now)
    }
}
