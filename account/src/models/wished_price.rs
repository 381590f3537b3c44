use chrono::{DateTime, Utc};

use crate::{
    caller::{ShopId, UserId},
    resource::{Resource, ResourceKind},
};

/// A price watch: notify the owner once the product reaches `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct WishedPrice {
    pub id: String,
    pub owner_id: UserId,
    pub shop_id: ShopId,
    pub product_id: String,
    pub currency: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Resource for WishedPrice {
    const KIND: ResourceKind = ResourceKind::WishedPrice;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    fn shop_id(&self) -> ShopId {
        self.shop_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWishedPrice {
    pub product_id: String,
    pub currency: String,
    pub price: f64,
}
