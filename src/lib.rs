//! # Role Resolution Engine (rolegate)
//!
//! Pure role resolution over a principal's snapshot of role assignments:
//! - Global, class-scoped and instance-scoped grants
//! - Pending (uncommitted) assignments never grant access
//! - Exact resource-type matching, additive-only model with no deny
//! - Fail-fast validation of malformed assignment records
//! - Time-limited entitlement flag
//!
//! ## Example
//!
//! ```rust
//! use rolegate::{authorize, AuthorizationQuery, ResourceRef, RoleAssignment};
//!
//! let assignments = vec![
//!     RoleAssignment::global("admin"),
//!     RoleAssignment::instance_scoped("owner", "Post", "42"),
//! ];
//!
//! assert!(authorize(&assignments, &AuthorizationQuery::for_role("admin")));
//! assert!(authorize(
//!     &assignments,
//!     &AuthorizationQuery::for_resource("owner", ResourceRef::new("Post", "42")),
//! ));
//! assert!(!authorize(
//!     &assignments,
//!     &AuthorizationQuery::for_resource("owner", ResourceRef::new("Post", "43")),
//! ));
//! ```

pub mod assignment;
pub mod entitlement;
pub mod error;
pub mod principal;
pub mod resolver;

pub use assignment::{AuthorizationQuery, GrantScope, ResourceRef, RoleAssignment};
pub use entitlement::is_active;
pub use error::{AuthzError, Result};
pub use principal::Principal;
pub use resolver::authorize;
