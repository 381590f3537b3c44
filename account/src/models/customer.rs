use chrono::{DateTime, Utc};

use crate::{
    caller::{ShopId, UserId},
    models::AddressFields,
    resource::{Resource, ResourceKind},
};

/// A customer account with its invoice address.
///
/// A customer owns itself: its owner id is its own id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: UserId,
    pub shop_id: ShopId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub salutation: String,
    pub invoice_address: AddressFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a customer with an empty invoice address.
    pub fn new(id: UserId, shop_id: ShopId, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            shop_id,
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            salutation: String::new(),
            invoice_address: AddressFields::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Resource for Customer {
    const KIND: ResourceKind = ResourceKind::Customer;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn owner_id(&self) -> &UserId {
        &self.id
    }

    fn shop_id(&self) -> ShopId {
        self.shop_id
    }
}
