//! Resource access guard
//!
//! Decides whether a caller may perform an operation on an already loaded
//! resource. The decision is evaluated in a fixed order:
//!
//! 1. a read of a public resource is allowed for anyone, including anonymous callers
//! 2. an absent caller is denied with [`DenyReason::NotAuthenticated`]
//! 3. the owner of the resource is allowed
//! 4. a caller holding the permission required by the call site is allowed,
//!    provided it acts in the resource's shop or mall users are enabled
//! 5. everyone else is denied with [`DenyReason::Unauthorized`]

use tracing::debug;

use crate::{
    caller::Caller,
    errors::AccountError,
    permission::Permission,
    resource::{Operation, Resource, Visibility},
};

/// Why the guard refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    Unauthorized,
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied(DenyReason),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allowed)
    }
}

/// Pure access decision over a caller, a resource and an operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGuard {
    mall_users: bool,
}

impl AccessGuard {
    /// Creates a guard. With `mall_users` enabled, permission holders may act
    /// on resources of every shop, not only their own.
    pub fn new(mall_users: bool) -> Self {
        Self { mall_users }
    }

    /// Evaluates the access rule for `operation` on `resource`.
    ///
    /// `required_permission` is the permission that overrides ownership at the
    /// calling site; `None` means only the owner may act.
    pub fn evaluate<R: Resource>(
        &self,
        caller: Option<&Caller>,
        resource: &R,
        operation: Operation,
        required_permission: Option<Permission>,
    ) -> Access {
        if operation == Operation::Read && resource.visibility() == Visibility::Public {
            return Access::Allowed;
        }

        let Some(caller) = caller else {
            return Access::Denied(DenyReason::NotAuthenticated);
        };

        if caller.id() == resource.owner_id() {
            return Access::Allowed;
        }

        if let Some(permission) = required_permission {
            if caller.has_permission(permission) && self.same_shop_or_mall_user(caller, resource) {
                return Access::Allowed;
            }
        }

        Access::Denied(DenyReason::Unauthorized)
    }

    /// True when the caller acts in the resource's shop, or mall users are enabled.
    pub fn same_shop_or_mall_user<R: Resource>(&self, caller: &Caller, resource: &R) -> bool {
        self.mall_users || caller.shop_id() == resource.shop_id()
    }

    /// Evaluates the rule and converts a denial into the matching [`AccountError`].
    pub fn ensure<R: Resource>(
        &self,
        caller: Option<&Caller>,
        resource: &R,
        operation: Operation,
        required_permission: Option<Permission>,
    ) -> Result<(), AccountError> {
        match self.evaluate(caller, resource, operation, required_permission) {
            Access::Allowed => Ok(()),
            Access::Denied(reason) => {
                debug!(
                    kind = %R::KIND,
                    id = resource.id(),
                    %operation,
                    caller = caller.map(|c| c.id().as_str()),
                    ?reason,
                    "access denied"
                );
                Err(match reason {
                    DenyReason::NotAuthenticated => AccountError::NotAuthenticated,
                    DenyReason::Unauthorized => AccountError::Unauthorized {
                        kind: R::KIND,
                        operation,
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        caller::{ShopId, UserId},
        resource::ResourceKind,
    };

    struct Doc {
        owner: UserId,
        shop: ShopId,
        visibility: Visibility,
    }

    impl Resource for Doc {
        const KIND: ResourceKind = ResourceKind::Basket;

        fn id(&self) -> &str {
            "doc-1"
        }

        fn owner_id(&self) -> &UserId {
            &self.owner
        }

        fn shop_id(&self) -> ShopId {
            self.shop
        }

        fn visibility(&self) -> Visibility {
            self.visibility
        }
    }

    fn doc(visibility: Visibility) -> Doc {
        Doc {
            owner: UserId::from("owner"),
            shop: ShopId(1),
            visibility,
        }
    }

    fn stranger() -> Caller {
        Caller::new("stranger", ShopId(1))
    }

    #[rstest]
    #[case(Operation::Read, Access::Allowed)]
    #[case(Operation::Update, Access::Denied(DenyReason::NotAuthenticated))]
    #[case(Operation::Delete, Access::Denied(DenyReason::NotAuthenticated))]
    fn test_anonymous_on_public_resource(#[case] operation: Operation, #[case] expected: Access) {
        let guard = AccessGuard::default();
        assert_eq!(guard.evaluate(None, &doc(Visibility::Public), operation, None), expected);
    }

    #[rstest]
    #[case(Operation::Read)]
    #[case(Operation::Update)]
    #[case(Operation::Delete)]
    fn test_anonymous_on_private_resource(#[case] operation: Operation) {
        let guard = AccessGuard::default();
        assert_eq!(
            guard.evaluate(None, &doc(Visibility::Private), operation, Some(Permission::DeleteBasket)),
            Access::Denied(DenyReason::NotAuthenticated)
        );
    }

    #[rstest]
    #[case(Operation::Read)]
    #[case(Operation::Create)]
    #[case(Operation::Update)]
    #[case(Operation::Delete)]
    fn test_owner_is_always_allowed(#[case] operation: Operation) {
        let guard = AccessGuard::default();
        // Owner acting from another shop and without any role
        let owner = Caller::new("owner", ShopId(2));
        assert!(guard
            .evaluate(Some(&owner), &doc(Visibility::Private), operation, Some(Permission::DeleteBasket))
            .is_allowed());
    }

    #[rstest]
    #[case(Operation::Update)]
    #[case(Operation::Delete)]
    fn test_stranger_without_permission_is_unauthorized(#[case] operation: Operation) {
        let guard = AccessGuard::default();
        assert_eq!(
            guard.evaluate(Some(&stranger()), &doc(Visibility::Public), operation, Some(Permission::DeleteBasket)),
            Access::Denied(DenyReason::Unauthorized)
        );
    }

    #[test]
    fn test_permission_holder_is_allowed() {
        let guard = AccessGuard::default();
        let admin = stranger().with_permission(Permission::DeleteBasket);
        assert!(guard
            .evaluate(Some(&admin), &doc(Visibility::Private), Operation::Delete, Some(Permission::DeleteBasket))
            .is_allowed());
    }

    #[test]
    fn test_unrelated_permission_does_not_override() {
        let guard = AccessGuard::default();
        let admin = stranger().with_permission(Permission::DeleteReview);
        assert_eq!(
            guard.evaluate(Some(&admin), &doc(Visibility::Private), Operation::Delete, Some(Permission::DeleteBasket)),
            Access::Denied(DenyReason::Unauthorized)
        );
    }

    #[test]
    fn test_permission_without_call_site_requirement_does_not_override() {
        let guard = AccessGuard::default();
        let admin = stranger().with_permission(Permission::DeleteBasket);
        assert_eq!(
            guard.evaluate(Some(&admin), &doc(Visibility::Private), Operation::Delete, None),
            Access::Denied(DenyReason::Unauthorized)
        );
    }

    #[rstest]
    #[case(false, Access::Denied(DenyReason::Unauthorized))]
    #[case(true, Access::Allowed)]
    fn test_permission_from_other_shop_requires_mall_users(#[case] mall_users: bool, #[case] expected: Access) {
        let guard = AccessGuard::new(mall_users);
        let admin = Caller::new("admin", ShopId(2)).with_permission(Permission::DeleteBasket);
        assert_eq!(
            guard.evaluate(Some(&admin), &doc(Visibility::Private), Operation::Delete, Some(Permission::DeleteBasket)),
            expected
        );
    }

    #[test]
    fn test_ensure_maps_denials_to_errors() {
        let guard = AccessGuard::default();
        let resource = doc(Visibility::Private);

        assert!(matches!(
            guard.ensure(None, &resource, Operation::Read, None),
            Err(AccountError::NotAuthenticated)
        ));
        assert!(matches!(
            guard.ensure(Some(&stranger()), &resource, Operation::Delete, None),
            Err(AccountError::Unauthorized {
                kind: ResourceKind::Basket,
                operation: Operation::Delete
            })
        ));
        assert!(guard
            .ensure(Some(&Caller::new("owner", ShopId(1))), &resource, Operation::Delete, None)
            .is_ok());
    }
}
