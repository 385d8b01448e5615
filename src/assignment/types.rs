//! Core types for role assignments and authorization queries
//!
//! This module provides the data structures a principal store hands to the
//! resolver: assignment records, resource references and the query itself.

use serde::{Deserialize, Serialize};

use crate::error::{AuthzError, Result};

/// A concrete resource a permission check is evaluated against
///
/// `kind` is the resource type tag (e.g., "Post") and `id` identifies one
/// instance of that type. Comparison is an exact string match at both levels;
/// there is no type hierarchy or wildcard matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Resource type tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Instance identifier
    pub id: String,
}

impl ResourceRef {
    /// Creates a resource reference from a type tag and instance id
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// Scope of a role assignment
///
/// A grant applies either everywhere, to every instance of one resource type,
/// or to exactly one resource. Modelling the scope as an enum makes an
/// instance id without a resource type unrepresentable once an assignment has
/// been constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantScope {
    /// Applies across all resource kinds
    Global,

    /// Applies to every instance of one resource type
    Class { resource_type: String },

    /// Applies to exactly one resource
    Instance {
        resource_type: String,
        resource_id: String,
    },
}

impl GrantScope {
    /// Checks whether this scope covers the given query target
    ///
    /// A global scope covers any target, including none. Class and instance
    /// scopes require a target of the same resource type; an instance scope
    /// additionally requires a matching id. A scoped grant never covers a
    /// target-less query.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rolegate::{GrantScope, ResourceRef};
    ///
    /// let scope = GrantScope::Class {
    ///     resource_type: "Post".to_string(),
    /// };
    ///
    /// let post = ResourceRef::new("Post", "7");
    /// let comment = ResourceRef::new("Comment", "7");
    ///
    /// assert!(scope.permits(Some(&post)));
    /// assert!(!scope.permits(Some(&comment)));
    /// assert!(!scope.permits(None));
    /// ```
    pub fn permits(&self, target: Option<&ResourceRef>) -> bool {
        match self {
            GrantScope::Global => true,
            GrantScope::Class { resource_type } => {
                target.is_some_and(|t| t.kind == *resource_type)
            }
            GrantScope::Instance {
                resource_type,
                resource_id,
            } => target.is_some_and(|t| t.kind == *resource_type && t.id == *resource_id),
        }
    }

    /// Returns the resource type restriction, if any
    pub fn resource_type(&self) -> Option<&str> {
        match self {
            GrantScope::Global => None,
            GrantScope::Class { resource_type }
            | GrantScope::Instance { resource_type, .. } => Some(resource_type),
        }
    }

    /// Returns the instance id restriction, if any
    pub fn resource_id(&self) -> Option<&str> {
        match self {
            GrantScope::Instance { resource_id, .. } => Some(resource_id),
            _ => None,
        }
    }
}

/// A record granting a named role to a principal
///
/// Assignments arrive as a read-only snapshot from the principal store. The
/// `pending` flag marks a record whose creation or modification has not yet
/// been durably committed; such records never grant access, which keeps
/// optimistic-UI state from being treated as authoritative.
///
/// ## Examples
///
/// ```rust
/// use rolegate::RoleAssignment;
///
/// // Global grant
/// let admin = RoleAssignment::global("admin");
///
/// // Instance-scoped grant, still uncommitted
/// let owner = RoleAssignment::instance_scoped("owner", "Post", "42").with_pending(true);
///
/// assert!(owner.pending);
/// assert_eq!(owner.resource_type(), Some("Post"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAssignment", into = "RawAssignment")]
pub struct RoleAssignment {
    /// Role name the record grants
    pub name: String,

    /// Scope the grant applies to
    pub scope: GrantScope,

    /// Whether the record is still uncommitted
    pub pending: bool,
}

impl RoleAssignment {
    /// Creates an assignment from the flat optional-field record shape
    ///
    /// This is the validating boundary for records loaded from a store:
    /// `resource_type = None` yields a global grant, a type without an id a
    /// class-scoped grant, and type plus id an instance-scoped grant.
    ///
    /// # Errors
    ///
    /// Returns `AuthzError::InvalidAssignment` if:
    /// - `resource_id` is set without `resource_type`
    /// - the role name is empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rolegate::RoleAssignment;
    ///
    /// let a = RoleAssignment::new("mod", Some("Post".to_string()), None, false).unwrap();
    /// assert_eq!(a.resource_type(), Some("Post"));
    /// assert_eq!(a.resource_id(), None);
    ///
    /// let bad = RoleAssignment::new("mod", None, Some("7".to_string()), false);
    /// assert!(bad.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        resource_type: Option<String>,
        resource_id: Option<String>,
        pending: bool,
    ) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AuthzError::invalid_assignment(
                name,
                "role name cannot be empty",
            ));
        }

        let scope = match (resource_type, resource_id) {
            (None, None) => GrantScope::Global,
            (Some(resource_type), None) => GrantScope::Class { resource_type },
            (Some(resource_type), Some(resource_id)) => GrantScope::Instance {
                resource_type,
                resource_id,
            },
            (None, Some(_)) => {
                return Err(AuthzError::invalid_assignment(
                    name,
                    "resource id set without resource type",
                ));
            }
        };

        Ok(Self {
            name,
            scope,
            pending,
        })
    }

    /// Creates a committed global grant
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: GrantScope::Global,
            pending: false,
        }
    }

    /// Creates a committed class-scoped grant
    pub fn class_scoped(name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: GrantScope::Class {
                resource_type: resource_type.into(),
            },
            pending: false,
        }
    }

    /// Creates a committed instance-scoped grant
    pub fn instance_scoped(
        name: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scope: GrantScope::Instance {
                resource_type: resource_type.into(),
                resource_id: resource_id.into(),
            },
            pending: false,
        }
    }

    /// Sets the pending flag, consuming and returning the assignment
    pub fn with_pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Returns the resource type restriction, if any
    pub fn resource_type(&self) -> Option<&str> {
        self.scope.resource_type()
    }

    /// Returns the instance id restriction, if any
    pub fn resource_id(&self) -> Option<&str> {
        self.scope.resource_id()
    }
}

/// Flat wire shape for a role assignment
///
/// Deserialization funnels through [`RoleAssignment::new`] so malformed
/// records are rejected before they enter a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAssignment {
    name: String,

    #[serde(rename = "resourceType", default, skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,

    #[serde(rename = "resourceId", default, skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,

    #[serde(default)]
    pending: bool,
}

impl TryFrom<RawAssignment> for RoleAssignment {
    type Error = AuthzError;

    fn try_from(raw: RawAssignment) -> Result<Self> {
        RoleAssignment::new(raw.name, raw.resource_type, raw.resource_id, raw.pending)
    }
}

impl From<RoleAssignment> for RawAssignment {
    fn from(assignment: RoleAssignment) -> Self {
        Self {
            resource_type: assignment.resource_type().map(str::to_string),
            resource_id: assignment.resource_id().map(str::to_string),
            name: assignment.name,
            pending: assignment.pending,
        }
    }
}

/// A single authorization question: does the principal hold this role,
/// optionally against a concrete target resource?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationQuery {
    /// Role name being checked
    #[serde(rename = "roleName")]
    pub role_name: String,

    /// Target resource, absent for a type-agnostic check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ResourceRef>,
}

impl AuthorizationQuery {
    /// Creates a type-agnostic query (no target resource)
    pub fn for_role(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            target: None,
        }
    }

    /// Creates a query against a concrete target resource
    pub fn for_resource(role_name: impl Into<String>, target: ResourceRef) -> Self {
        Self {
            role_name: role_name.into(),
            target: Some(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_global() {
        let a = RoleAssignment::new("admin", None, None, false).unwrap();
        assert_eq!(a.scope, GrantScope::Global);
        assert_eq!(a.resource_type(), None);
        assert_eq!(a.resource_id(), None);
    }

    #[test]
    fn test_new_class_scoped() {
        let a = RoleAssignment::new("mod", Some("Post".to_string()), None, false).unwrap();
        assert_eq!(a.resource_type(), Some("Post"));
        assert_eq!(a.resource_id(), None);
    }

    #[test]
    fn test_new_instance_scoped() {
        let a = RoleAssignment::new(
            "owner",
            Some("Post".to_string()),
            Some("42".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(a.resource_type(), Some("Post"));
        assert_eq!(a.resource_id(), Some("42"));
    }

    #[test]
    fn test_new_id_without_type() {
        let result = RoleAssignment::new("owner", None, Some("42".to_string()), false);
        assert!(matches!(result, Err(AuthzError::InvalidAssignment { .. })));
    }

    #[test]
    fn test_new_empty_name() {
        let result = RoleAssignment::new("", None, None, false);
        assert!(matches!(result, Err(AuthzError::InvalidAssignment { .. })));
    }

    #[test]
    fn test_permits_global() {
        let scope = GrantScope::Global;
        assert!(scope.permits(None));
        assert!(scope.permits(Some(&ResourceRef::new("Post", "1"))));
    }

    #[test]
    fn test_permits_class_scoped() {
        let scope = GrantScope::Class {
            resource_type: "Post".to_string(),
        };
        assert!(scope.permits(Some(&ResourceRef::new("Post", "7"))));
        assert!(!scope.permits(Some(&ResourceRef::new("Comment", "7"))));
        assert!(!scope.permits(None));
    }

    #[test]
    fn test_permits_instance_scoped() {
        let scope = GrantScope::Instance {
            resource_type: "Post".to_string(),
            resource_id: "42".to_string(),
        };
        assert!(scope.permits(Some(&ResourceRef::new("Post", "42"))));
        assert!(!scope.permits(Some(&ResourceRef::new("Post", "43"))));
        assert!(!scope.permits(Some(&ResourceRef::new("Comment", "42"))));
        assert!(!scope.permits(None));
    }

    #[test]
    fn test_with_pending() {
        let a = RoleAssignment::global("admin").with_pending(true);
        assert!(a.pending);
        let a = a.with_pending(false);
        assert!(!a.pending);
    }

    #[test]
    fn test_serialization_round_trip() {
        let a = RoleAssignment::instance_scoped("owner", "Post", "42");
        let json = serde_json::to_string(&a).unwrap();
        let deserialized: RoleAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }

    #[test]
    fn test_serialization_wire_names() {
        let a = RoleAssignment::class_scoped("mod", "Post");
        let json: serde_json::Value = serde_json::to_value(&a).unwrap();
        assert_eq!(json["name"], "mod");
        assert_eq!(json["resourceType"], "Post");
        assert!(json.get("resourceId").is_none());
        assert_eq!(json["pending"], false);
    }

    #[test]
    fn test_deserialization_rejects_id_without_type() {
        let json = r#"{"name":"owner","resourceId":"42","pending":false}"#;
        let result: std::result::Result<RoleAssignment, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_defaults() {
        // A store may omit pending for committed records
        let json = r#"{"name":"admin"}"#;
        let a: RoleAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.scope, GrantScope::Global);
        assert!(!a.pending);
    }

    #[test]
    fn test_query_constructors() {
        let q = AuthorizationQuery::for_role("admin");
        assert!(q.target.is_none());

        let q = AuthorizationQuery::for_resource("owner", ResourceRef::new("Post", "42"));
        assert_eq!(q.target.unwrap().id, "42");
    }
}
