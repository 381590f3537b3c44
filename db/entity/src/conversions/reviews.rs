use emporium_account::{models::Review, ShopId, UserId};
use sea_orm::Set;

use crate::{errors::DbEntityError, review};

impl TryFrom<review::Model> for Review {
    type Error = DbEntityError;

    fn try_from(value: review::Model) -> Result<Self, Self::Error> {
        let rating = u8::try_from(value.rating)
            .ok()
            .filter(|rating| (1..=5).contains(rating))
            .ok_or_else(|| DbEntityError::Conversion(format!("invalid rating {} in review {}", value.rating, value.id)))?;

        Ok(Review {
            id: value.id,
            owner_id: UserId::new(value.owner_id),
            shop_id: ShopId(value.shop_id),
            product_id: value.product_id,
            text: value.text,
            rating,
            created_at: value.created_at,
        })
    }
}

impl From<&Review> for review::ActiveModel {
    fn from(value: &Review) -> Self {
        review::ActiveModel {
            id: Set(value.id.clone()),
            owner_id: Set(value.owner_id.to_string()),
            shop_id: Set(value.shop_id.0),
            product_id: Set(value.product_id.clone()),
            text: Set(value.text.clone()),
            rating: Set(i16::from(value.rating)),
            created_at: Set(value.created_at),
        }
    }
}
