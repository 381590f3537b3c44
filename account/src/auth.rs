//! Authentication and authorization collaborators
//!
//! Authentication maps a request credential to an [`Identity`]; authorization
//! answers whether an identity holds a [`Permission`]. [`resolve_caller`]
//! combines both into the per-request [`Caller`].

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::{
    caller::{Caller, ShopId, UserId},
    permission::Permission,
};

/// Identity resolved from a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub shop_id: ShopId,
}

pub trait Authentication: Send + Sync {
    /// Resolves the identity behind `credential`. Unknown credentials resolve to `None`.
    fn authenticate(&self, credential: &str) -> Option<Identity>;
}

pub trait Authorization: Send + Sync {
    fn is_allowed(&self, permission: Permission, user_id: &UserId) -> bool;
}

/// Bearer tokens with a fixed identity each.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, Identity>,
}

impl StaticTokenAuthenticator {
    pub fn new(tokens: impl IntoIterator<Item = (String, Identity)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }
}

impl Authentication for StaticTokenAuthenticator {
    fn authenticate(&self, credential: &str) -> Option<Identity> {
        if credential.is_empty() {
            return None;
        }
        self.tokens.get(credential).cloned()
    }
}

/// Permission grants per user id.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorization {
    grants: HashMap<UserId, BTreeSet<Permission>>,
}

impl StaticAuthorization {
    pub fn new(grants: impl IntoIterator<Item = (UserId, BTreeSet<Permission>)>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }
}

impl Authorization for StaticAuthorization {
    fn is_allowed(&self, permission: Permission, user_id: &UserId) -> bool {
        self.grants
            .get(user_id)
            .is_some_and(|permissions| permissions.contains(&permission))
    }
}

/// Builds the caller for one request.
///
/// Returns `None` for a missing or unknown credential; such requests run as
/// anonymous and fail later with `NotAuthenticated` where a caller is required.
pub fn resolve_caller(
    authentication: &dyn Authentication,
    authorization: &dyn Authorization,
    credential: Option<&str>,
) -> Option<Caller> {
    let identity = authentication.authenticate(credential?)?;

    let granted: Vec<Permission> = Permission::ALL
        .into_iter()
        .filter(|permission| authorization.is_allowed(*permission, &identity.user_id))
        .collect();
    let caller = granted
        .into_iter()
        .fold(Caller::new(identity.user_id, identity.shop_id), Caller::with_permission);

    debug!(caller = %caller.id(), shop = %caller.shop_id(), roles = ?caller.roles(), "resolved caller");
    Some(caller)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> StaticTokenAuthenticator {
        StaticTokenAuthenticator::new([
            (
                "token-alice".to_string(),
                Identity {
                    user_id: UserId::from("alice"),
                    shop_id: ShopId(1),
                },
            ),
            (
                "token-admin".to_string(),
                Identity {
                    user_id: UserId::from("admin"),
                    shop_id: ShopId(2),
                },
            ),
        ])
    }

    fn authorization() -> StaticAuthorization {
        StaticAuthorization::new([(
            UserId::from("admin"),
            BTreeSet::from([Permission::DeleteReview, Permission::ViewBasket]),
        )])
    }

    #[test]
    fn test_resolve_caller_with_roles() {
        let caller = resolve_caller(&authenticator(), &authorization(), Some("token-admin")).unwrap();

        assert_eq!(caller.id().as_str(), "admin");
        assert_eq!(caller.shop_id(), ShopId(2));
        assert!(caller.has_permission(Permission::DeleteReview));
        assert!(caller.has_permission(Permission::ViewBasket));
        assert!(!caller.has_permission(Permission::DeleteBasket));
    }

    #[test]
    fn test_resolve_caller_without_grants() {
        let caller = resolve_caller(&authenticator(), &authorization(), Some("token-alice")).unwrap();
        assert!(caller.roles().is_empty());
    }

    #[test]
    fn test_unknown_or_missing_credential_is_anonymous() {
        assert!(resolve_caller(&authenticator(), &authorization(), None).is_none());
        assert!(resolve_caller(&authenticator(), &authorization(), Some("")).is_none());
        assert!(resolve_caller(&authenticator(), &authorization(), Some("forged")).is_none());
    }
}
