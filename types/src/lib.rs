//! GraphQL type definitions for the Emporium account API
//!
//! This crate contains pure GraphQL type definitions that can be reused
//! by clients without depending on the full API server implementation.

use async_graphql::{Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

/// Customer profile of the authenticated caller
#[derive(SimpleObject, Clone, Debug)]
pub struct Customer {
    pub id: ID,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub salutation: String,
    /// Shop the customer is registered in
    pub shop_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Postal address
#[derive(SimpleObject, Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub salutation: Option<String>,
    #[graphql(name = "firstname")]
    pub first_name: Option<String>,
    #[graphql(name = "lastname")]
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub additional_info: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country_id: Option<String>,
    #[graphql(name = "vatID")]
    pub vat_id: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
}

/// Additional shipping address
#[derive(SimpleObject, Clone, Debug)]
pub struct DeliveryAddress {
    pub id: ID,
    #[graphql(flatten)]
    pub address: Address,
}

/// Address fields to set; omitted fields keep their stored value
#[derive(InputObject, Clone, Debug, Default)]
pub struct AddressInput {
    pub salutation: Option<String>,
    #[graphql(name = "firstname")]
    pub first_name: Option<String>,
    #[graphql(name = "lastname")]
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub additional_info: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country_id: Option<String>,
    #[graphql(name = "vatID")]
    pub vat_id: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct BasketItem {
    pub product_id: ID,
    pub amount: i32,
}

/// Named product list; the list titled `wishlist` is the wish list
#[derive(SimpleObject, Clone, Debug)]
pub struct Basket {
    pub id: ID,
    pub title: String,
    /// Public baskets are readable by anyone
    pub public: bool,
    pub owner_id: ID,
    pub items: Vec<BasketItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(InputObject, Clone, Debug)]
pub struct BasketInput {
    pub title: String,
    #[graphql(default = false)]
    pub public: bool,
}

/// Product review
#[derive(SimpleObject, Clone, Debug)]
pub struct Review {
    pub id: ID,
    pub product_id: ID,
    pub reviewer_id: ID,
    pub text: String,
    /// Rating from 1 to 5
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(InputObject, Clone, Debug)]
pub struct ReviewInput {
    pub product_id: ID,
    #[graphql(default)]
    pub text: String,
    pub rating: i32,
}

/// Newsletter subscription state
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum NewsletterStatus {
    #[graphql(name = "UNSUBSCRIBED")]
    Unsubscribed,
    /// Waiting for confirmation
    #[graphql(name = "MISSING_DOUBLE_OPTIN")]
    MissingDoubleOptIn,
    #[graphql(name = "SUBSCRIBED")]
    Subscribed,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct NewsletterSubscription {
    pub email: String,
    pub status: NewsletterStatus,
    pub updated_at: DateTime<Utc>,
}

/// Subscription request; without `email` the caller's own address is used
#[derive(InputObject, Clone, Debug, Default)]
pub struct NewsletterSubscribeInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salutation: Option<String>,
}

#[derive(InputObject, Clone, Debug)]
pub struct NewsletterOptInInput {
    pub email: String,
    pub confirm_code: String,
}

/// Price watch for a product
#[derive(SimpleObject, Clone, Debug)]
pub struct WishedPrice {
    pub id: ID,
    pub product_id: ID,
    pub currency: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(InputObject, Clone, Debug)]
pub struct WishedPriceInput {
    pub product_id: ID,
    /// ISO 4217 code of one of the shop's currencies
    pub currency: String,
    pub price: f64,
}
