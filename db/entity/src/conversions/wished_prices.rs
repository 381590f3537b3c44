use emporium_account::{models::WishedPrice, ShopId, UserId};
use sea_orm::Set;

use crate::{errors::DbEntityError, wished_price};

impl TryFrom<wished_price::Model> for WishedPrice {
    type Error = DbEntityError;

    fn try_from(value: wished_price::Model) -> Result<Self, Self::Error> {
        Ok(WishedPrice {
            id: value.id,
            owner_id: UserId::new(value.owner_id),
            shop_id: ShopId(value.shop_id),
            product_id: value.product_id,
            currency: value.currency,
            price: value.price,
            created_at: value.created_at,
        })
    }
}

impl From<&WishedPrice> for wished_price::ActiveModel {
    fn from(value: &WishedPrice) -> Self {
        wished_price::ActiveModel {
            id: Set(value.id.clone()),
            owner_id: Set(value.owner_id.to_string()),
            shop_id: Set(value.shop_id.0),
            product_id: Set(value.product_id.clone()),
            currency: Set(value.currency.clone()),
            price: Set(value.price),
            created_at: Set(value.created_at),
        }
    }
}
