//! Account model to GraphQL type conversions
//!
//! This module contains conversion functions between the account service
//! models and the GraphQL types. These conversions are kept separate from
//! the type definitions to avoid requiring API clients to depend on the
//! account crate.

use emporium_account::models::{self, AddressFields};
use emporium_api_types::{
    Address, AddressInput, Basket, BasketItem, Customer, DeliveryAddress, NewsletterStatus, NewsletterSubscription,
    Review, WishedPrice,
};

pub fn customer_from_model(customer: models::Customer) -> Customer {
    Customer {
        id: customer.id.as_str().into(),
        email: customer.email,
        first_name: customer.first_name,
        last_name: customer.last_name,
        salutation: customer.salutation,
        shop_id: customer.shop_id.0,
        created_at: customer.created_at,
        updated_at: customer.updated_at,
    }
}

pub fn address_from_fields(fields: AddressFields) -> Address {
    Address {
        salutation: fields.salutation,
        first_name: fields.first_name,
        last_name: fields.last_name,
        company: fields.company,
        additional_info: fields.additional_info,
        street: fields.street,
        street_number: fields.street_number,
        zip_code: fields.zip_code,
        city: fields.city,
        country_id: fields.country_id,
        vat_id: fields.vat_id,
        phone: fields.phone,
        mobile: fields.mobile,
        fax: fields.fax,
    }
}

/// Input fields map one to one; omitted fields stay `None` and keep the stored value
pub fn address_fields_from_input(input: AddressInput) -> AddressFields {
    AddressFields {
        salutation: input.salutation,
        first_name: input.first_name,
        last_name: input.last_name,
        company: input.company,
        additional_info: input.additional_info,
        street: input.street,
        street_number: input.street_number,
        zip_code: input.zip_code,
        city: input.city,
        country_id: input.country_id,
        vat_id: input.vat_id,
        phone: input.phone,
        mobile: input.mobile,
        fax: input.fax,
    }
}

pub fn delivery_address_from_model(address: models::DeliveryAddress) -> DeliveryAddress {
    DeliveryAddress {
        id: address.id.into(),
        address: address_from_fields(address.fields),
    }
}

pub fn basket_from_model(basket: models::Basket) -> Basket {
    Basket {
        id: basket.id.into(),
        title: basket.title,
        public: basket.public,
        owner_id: basket.owner_id.as_str().into(),
        items: basket
            .items
            .into_iter()
            .map(|item| BasketItem {
                product_id: item.product_id.into(),
                amount: i32::try_from(item.amount).unwrap_or(i32::MAX),
            })
            .collect(),
        created_at: basket.created_at,
        updated_at: basket.updated_at,
    }
}

pub fn review_from_model(review: models::Review) -> Review {
    Review {
        id: review.id.into(),
        product_id: review.product_id.into(),
        reviewer_id: review.owner_id.as_str().into(),
        text: review.text,
        rating: i32::from(review.rating),
        created_at: review.created_at,
    }
}

pub fn newsletter_status_from_model(status: models::NewsletterStatus) -> NewsletterStatus {
    match status {
        models::NewsletterStatus::Unsubscribed => NewsletterStatus::Unsubscribed,
        models::NewsletterStatus::MissingDoubleOptIn => NewsletterStatus::MissingDoubleOptIn,
        models::NewsletterStatus::Subscribed => NewsletterStatus::Subscribed,
    }
}

pub fn subscription_from_model(subscription: models::NewsletterSubscription) -> NewsletterSubscription {
    NewsletterSubscription {
        email: subscription.email,
        status: newsletter_status_from_model(subscription.status),
        updated_at: subscription.updated_at,
    }
}

pub fn wished_price_from_model(wished_price: models::WishedPrice) -> WishedPrice {
    WishedPrice {
        id: wished_price.id.into(),
        product_id: wished_price.product_id.into(),
        currency: wished_price.currency,
        price: wished_price.price,
        created_at: wished_price.created_at,
    }
}
