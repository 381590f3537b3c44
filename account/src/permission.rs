//! Named capabilities granted to a caller independently of ownership

use std::fmt;

use serde::{Deserialize, Serialize};

/// A capability that overrides ownership for one resource kind and operation.
///
/// The set is closed: call sites name the permission they require with a
/// variant, never with a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// Delete reviews written by other customers
    DeleteReview,
    /// Delete baskets owned by other customers
    DeleteBasket,
    /// Read private baskets owned by other customers
    ViewBasket,
    /// Read wished prices set by other customers
    ViewWishedPrices,
    /// Delete wished prices set by other customers
    DeleteWishedPrice,
}

impl Permission {
    /// Every permission, used when resolving the roles of a caller.
    pub const ALL: [Permission; 5] = [
        Permission::DeleteReview,
        Permission::DeleteBasket,
        Permission::ViewBasket,
        Permission::ViewWishedPrices,
        Permission::DeleteWishedPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::DeleteReview => "DELETE_REVIEW",
            Permission::DeleteBasket => "DELETE_BASKET",
            Permission::ViewBasket => "VIEW_BASKET",
            Permission::ViewWishedPrices => "VIEW_WISHED_PRICES",
            Permission::DeleteWishedPrice => "DELETE_WISHED_PRICE",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_names_match_serde_representation() {
        for permission in Permission::ALL {
            let json = serde_json::to_value(permission).unwrap();
            assert_eq!(json, serde_json::Value::String(permission.as_str().to_string()));
        }
    }

    #[test]
    fn test_permission_deserializes_from_config_name() {
        let permission: Permission = serde_json::from_str("\"DELETE_REVIEW\"").unwrap();
        assert_eq!(permission, Permission::DeleteReview);
        assert!(serde_json::from_str::<Permission>("\"delete_review\"").is_err());
    }
}
