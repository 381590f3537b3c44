use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Customer table
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customer::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Customer::ShopId).integer().not_null().default(1))
                    .col(ColumnDef::new(Customer::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Customer::FirstName).string().not_null().default(""))
                    .col(ColumnDef::new(Customer::LastName).string().not_null().default(""))
                    .col(ColumnDef::new(Customer::Salutation).string().not_null().default(""))
                    .col(ColumnDef::new(Customer::InvoiceSalutation).string().null())
                    .col(ColumnDef::new(Customer::InvoiceFirstName).string().null())
                    .col(ColumnDef::new(Customer::InvoiceLastName).string().null())
                    .col(ColumnDef::new(Customer::InvoiceCompany).string().null())
                    .col(ColumnDef::new(Customer::InvoiceAdditionalInfo).string().null())
                    .col(ColumnDef::new(Customer::InvoiceStreet).string().null())
                    .col(ColumnDef::new(Customer::InvoiceStreetNumber).string().null())
                    .col(ColumnDef::new(Customer::InvoiceZipCode).string().null())
                    .col(ColumnDef::new(Customer::InvoiceCity).string().null())
                    .col(ColumnDef::new(Customer::InvoiceCountryId).string().null())
                    .col(ColumnDef::new(Customer::InvoiceVatId).string().null())
                    .col(ColumnDef::new(Customer::InvoicePhone).string().null())
                    .col(ColumnDef::new(Customer::InvoiceMobile).string().null())
                    .col(ColumnDef::new(Customer::InvoiceFax).string().null())
                    .col(ColumnDef::new(Customer::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Customer::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create DeliveryAddress table
        manager
            .create_table(
                Table::create()
                    .table(DeliveryAddress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeliveryAddress::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeliveryAddress::OwnerId).string_len(32).not_null())
                    .col(ColumnDef::new(DeliveryAddress::ShopId).integer().not_null())
                    .col(ColumnDef::new(DeliveryAddress::Salutation).string().null())
                    .col(ColumnDef::new(DeliveryAddress::FirstName).string().null())
                    .col(ColumnDef::new(DeliveryAddress::LastName).string().null())
                    .col(ColumnDef::new(DeliveryAddress::Company).string().null())
                    .col(ColumnDef::new(DeliveryAddress::AdditionalInfo).string().null())
                    .col(ColumnDef::new(DeliveryAddress::Street).string().null())
                    .col(ColumnDef::new(DeliveryAddress::StreetNumber).string().null())
                    .col(ColumnDef::new(DeliveryAddress::ZipCode).string().null())
                    .col(ColumnDef::new(DeliveryAddress::City).string().null())
                    .col(ColumnDef::new(DeliveryAddress::CountryId).string().null())
                    .col(ColumnDef::new(DeliveryAddress::VatId).string().null())
                    .col(ColumnDef::new(DeliveryAddress::Phone).string().null())
                    .col(ColumnDef::new(DeliveryAddress::Mobile).string().null())
                    .col(ColumnDef::new(DeliveryAddress::Fax).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_address_owner_id")
                            .from(DeliveryAddress::Table, DeliveryAddress::OwnerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create Country table
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Country::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Country::Title).string().not_null())
                    .col(ColumnDef::new(Country::Active).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        // Create Basket table
        manager
            .create_table(
                Table::create()
                    .table(Basket::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Basket::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Basket::OwnerId).string_len(32).not_null())
                    .col(ColumnDef::new(Basket::ShopId).integer().not_null())
                    .col(ColumnDef::new(Basket::Title).string().not_null())
                    .col(ColumnDef::new(Basket::Public).boolean().not_null().default(false))
                    .col(ColumnDef::new(Basket::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Basket::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create BasketItem table
        manager
            .create_table(
                Table::create()
                    .table(BasketItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BasketItem::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BasketItem::BasketId).string_len(32).not_null())
                    .col(ColumnDef::new(BasketItem::ProductId).string().not_null())
                    .col(ColumnDef::new(BasketItem::Amount).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_basket_item_basket_id")
                            .from(BasketItem::Table, BasketItem::BasketId)
                            .to(Basket::Table, Basket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create Review table
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Review::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Review::OwnerId).string_len(32).not_null())
                    .col(ColumnDef::new(Review::ShopId).integer().not_null())
                    .col(ColumnDef::new(Review::ProductId).string().not_null())
                    .col(ColumnDef::new(Review::Text).text().not_null())
                    .col(ColumnDef::new(Review::Rating).small_integer().not_null())
                    .col(ColumnDef::new(Review::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Create NewsletterSubscription table
        manager
            .create_table(
                Table::create()
                    .table(NewsletterSubscription::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsletterSubscription::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscription::CustomerId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(NewsletterSubscription::ShopId).integer().not_null())
                    .col(ColumnDef::new(NewsletterSubscription::Email).string().not_null())
                    .col(ColumnDef::new(NewsletterSubscription::Status).string_len(32).not_null())
                    .col(ColumnDef::new(NewsletterSubscription::ConfirmCode).string_len(32).null())
                    .col(
                        ColumnDef::new(NewsletterSubscription::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_newsletter_subscription_customer_id")
                            .from(NewsletterSubscription::Table, NewsletterSubscription::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create WishedPrice table
        manager
            .create_table(
                Table::create()
                    .table(WishedPrice::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WishedPrice::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(WishedPrice::OwnerId).string_len(32).not_null())
                    .col(ColumnDef::new(WishedPrice::ShopId).integer().not_null())
                    .col(ColumnDef::new(WishedPrice::ProductId).string().not_null())
                    .col(ColumnDef::new(WishedPrice::Currency).string_len(3).not_null())
                    .col(ColumnDef::new(WishedPrice::Price).double().not_null())
                    .col(ColumnDef::new(WishedPrice::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WishedPrice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NewsletterSubscription::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BasketItem::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Basket::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DeliveryAddress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Customer {
    Table,
    Id,
    ShopId,
    Email,
    FirstName,
    LastName,
    Salutation,
    InvoiceSalutation,
    InvoiceFirstName,
    InvoiceLastName,
    InvoiceCompany,
    InvoiceAdditionalInfo,
    InvoiceStreet,
    InvoiceStreetNumber,
    InvoiceZipCode,
    InvoiceCity,
    InvoiceCountryId,
    InvoiceVatId,
    InvoicePhone,
    InvoiceMobile,
    InvoiceFax,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum DeliveryAddress {
    Table,
    Id,
    OwnerId,
    ShopId,
    Salutation,
    FirstName,
    LastName,
    Company,
    AdditionalInfo,
    Street,
    StreetNumber,
    ZipCode,
    City,
    CountryId,
    VatId,
    Phone,
    Mobile,
    Fax,
}

#[derive(DeriveIden)]
pub(crate) enum Country {
    Table,
    Id,
    Title,
    Active,
}

#[derive(DeriveIden)]
pub(crate) enum Basket {
    Table,
    Id,
    OwnerId,
    ShopId,
    Title,
    Public,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum BasketItem {
    Table,
    Id,
    BasketId,
    ProductId,
    Amount,
}

#[derive(DeriveIden)]
pub(crate) enum Review {
    Table,
    Id,
    OwnerId,
    ShopId,
    ProductId,
    Text,
    Rating,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum NewsletterSubscription {
    Table,
    Id,
    CustomerId,
    ShopId,
    Email,
    Status,
    ConfirmCode,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum WishedPrice {
    Table,
    Id,
    OwnerId,
    ShopId,
    ProductId,
    Currency,
    Price,
    CreatedAt,
}
