use emporium_account::{
    models::{Basket, BasketItem},
    ShopId, UserId,
};
use sea_orm::{NotSet, Set};

use crate::{basket, basket_item, errors::DbEntityError};

/// Builds a basket from its row and item rows.
pub fn basket_from_rows(basket: basket::Model, items: Vec<basket_item::Model>) -> Result<Basket, DbEntityError> {
    let items = items
        .into_iter()
        .map(|item| {
            let amount = u32::try_from(item.amount).map_err(|_| {
                DbEntityError::Conversion(format!("invalid amount {} in basket {}", item.amount, item.basket_id))
            })?;
            Ok(BasketItem {
                product_id: item.product_id,
                amount,
            })
        })
        .collect::<Result<Vec<_>, DbEntityError>>()?;

    Ok(Basket {
        id: basket.id,
        owner_id: UserId::new(basket.owner_id),
        shop_id: ShopId(basket.shop_id),
        title: basket.title,
        public: basket.public,
        items,
        created_at: basket.created_at,
        updated_at: basket.updated_at,
    })
}

impl From<&Basket> for basket::ActiveModel {
    fn from(value: &Basket) -> Self {
        basket::ActiveModel {
            id: Set(value.id.clone()),
            owner_id: Set(value.owner_id.to_string()),
            shop_id: Set(value.shop_id.0),
            title: Set(value.title.clone()),
            public: Set(value.public),
            created_at: Set(value.created_at),
            updated_at: Set(value.updated_at),
        }
    }
}

/// Item rows of a basket, ready for insertion.
pub fn basket_item_models(value: &Basket) -> Vec<basket_item::ActiveModel> {
    value
        .items
        .iter()
        .map(|item| basket_item::ActiveModel {
            id: NotSet,
            basket_id: Set(value.id.clone()),
            product_id: Set(item.product_id.clone()),
            amount: Set(i64::from(item.amount)),
        })
        .collect()
}
