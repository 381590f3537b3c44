use chrono::{DateTime, Utc};

use crate::{
    caller::{ShopId, UserId},
    resource::{Resource, ResourceKind, Visibility},
};

/// Title of the basket that serves as a customer's wish list.
pub const WISH_LIST_TITLE: &str = "wishlist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    pub product_id: String,
    pub amount: u32,
}

/// A named product list owned by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    pub id: String,
    pub owner_id: UserId,
    pub shop_id: ShopId,
    pub title: String,
    pub public: bool,
    pub items: Vec<BasketItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Basket {
    pub fn new(id: String, owner_id: UserId, shop_id: ShopId, basket: NewBasket) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            shop_id,
            title: basket.title,
            public: basket.public,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds `amount` of a product, merging with an existing item.
    pub fn add_product(&mut self, product_id: &str, amount: u32) {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.amount = item.amount.saturating_add(amount),
            None => self.items.push(BasketItem {
                product_id: product_id.to_string(),
                amount,
            }),
        }
    }

    /// Removes `amount` of a product. The item is dropped once nothing is left.
    pub fn remove_product(&mut self, product_id: &str, amount: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            item.amount = item.amount.saturating_sub(amount);
        }
        self.items.retain(|item| item.amount > 0);
    }

    pub fn apply(&mut self, patch: BasketPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(public) = patch.public {
            self.public = public;
        }
    }
}

impl Resource for Basket {
    const KIND: ResourceKind = ResourceKind::Basket;

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
        if self.public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBasket {
    pub title: String,
    pub public: bool,
}

/// Partial basket update, `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasketPatch {
    pub title: Option<String>,
    pub public: Option<bool>,
}
