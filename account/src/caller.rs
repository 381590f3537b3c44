//! The identity on whose behalf an operation runs

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{errors::AccountError, permission::Permission};

/// Identifier of a customer account.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a shop in a multi-shop deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub i32);

impl Default for ShopId {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated caller.
///
/// Anonymous requests carry no `Caller` at all (`Option<Caller>::None`).
/// A caller lives for exactly one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    id: UserId,
    shop_id: ShopId,
    roles: BTreeSet<Permission>,
}

impl Caller {
    pub fn new(id: impl Into<UserId>, shop_id: ShopId) -> Self {
        Self {
            id: id.into(),
            shop_id,
            roles: BTreeSet::new(),
        }
    }

    /// Adds a permission to the caller.
    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.roles.insert(permission);
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn shop_id(&self) -> ShopId {
        self.shop_id
    }

    pub fn roles(&self) -> &BTreeSet<Permission> {
        &self.roles
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.roles.contains(&permission)
    }
}

/// Returns the caller or fails with [`AccountError::NotAuthenticated`].
pub fn require_caller(caller: Option<&Caller>) -> Result<&Caller, AccountError> {
    caller.ok_or(AccountError::NotAuthenticated)
}
