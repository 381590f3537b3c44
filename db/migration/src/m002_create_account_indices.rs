use sea_orm_migration::prelude::*;

use crate::m001_create_account_tables::{Basket, BasketItem, DeliveryAddress, Review, WishedPrice};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Basket titles are unique per owner
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_basket_owner_id_title")
                    .table(Basket::Table)
                    .col(Basket::OwnerId)
                    .col(Basket::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_basket_item_basket_id")
                    .table(BasketItem::Table)
                    .col(BasketItem::BasketId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_delivery_address_owner_id")
                    .table(DeliveryAddress::Table)
                    .col(DeliveryAddress::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_review_product_id")
                    .table(Review::Table)
                    .col(Review::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_wished_price_owner_id")
                    .table(WishedPrice::Table)
                    .col(WishedPrice::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_wished_price_owner_id",
            "idx_review_product_id",
            "idx_delivery_address_owner_id",
            "idx_basket_item_basket_id",
            "idx_basket_owner_id_title",
        ] {
            manager.drop_index(Index::drop().if_exists().name(name).to_owned()).await?;
        }
        Ok(())
    }
}
