use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub shop_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub salutation: String,
    pub invoice_salutation: Option<String>,
    pub invoice_first_name: Option<String>,
    pub invoice_last_name: Option<String>,
    pub invoice_company: Option<String>,
    pub invoice_additional_info: Option<String>,
    pub invoice_street: Option<String>,
    pub invoice_street_number: Option<String>,
    pub invoice_zip_code: Option<String>,
    pub invoice_city: Option<String>,
    pub invoice_country_id: Option<String>,
    pub invoice_vat_id: Option<String>,
    pub invoice_phone: Option<String>,
    pub invoice_mobile: Option<String>,
    pub invoice_fax: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::delivery_address::Entity")]
    DeliveryAddress,
    #[sea_orm(has_many = "super::newsletter_subscription::Entity")]
    NewsletterSubscription,
}

impl Related<super::delivery_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryAddress.def()
    }
}

impl Related<super::newsletter_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsletterSubscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
