//! emporium-account - authorization-scoped account services
//!
//! This crate holds everything between the GraphQL layer and the persistence
//! layer of the account API:
//! - [`caller`]: the calling identity and its permissions
//! - [`guard`]: the pure access decision for an operation on a resource
//! - [`models`]: plain data records for each resource kind
//! - [`repository`]: persistence contracts implemented by adapters
//! - [`service`]: one façade per resource kind (load, guard, act, side effects)
//!
//! No component here holds state across requests. Collaborators are passed in
//! at construction through [`service::AccountServices::new`].

pub mod auth;
pub mod caller;
pub mod errors;
pub mod guard;
pub mod models;
pub mod notification;
pub mod permission;
pub mod repository;
pub mod resource;
pub mod service;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use caller::{Caller, ShopId, UserId};
pub use errors::{AccountError, RepositoryError, Result};
pub use guard::{Access, AccessGuard, DenyReason};
pub use permission::Permission;
pub use resource::{Operation, Resource, ResourceKind, Visibility};

/// Generates a new opaque record identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
