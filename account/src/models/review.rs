use chrono::{DateTime, Utc};

use crate::{
    caller::{ShopId, UserId},
    resource::{Resource, ResourceKind, Visibility},
};

/// A product review. Reviews are readable by anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub owner_id: UserId,
    pub shop_id: ShopId,
    pub product_id: String,
    pub text: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

impl Resource for Review {
    const KIND: ResourceKind = ResourceKind::Review;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    fn shop_id(&self) -> ShopId {
        self.shop_id
    }

    fn visibility(&self) -> Visibility {
        Visibility::Public
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: String,
    pub text: String,
    pub rating: i32,
}
