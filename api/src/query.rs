//! GraphQL query root and resolver implementations

use async_graphql::{Context, Object, Result, ID};
use emporium_api_types::{Address, Basket, Customer, DeliveryAddress, NewsletterSubscription, Review, WishedPrice};

use crate::{
    conversions::{
        address_from_fields, basket_from_model, customer_from_model, delivery_address_from_model, review_from_model,
        subscription_from_model, wished_price_from_model,
    },
    errors::account_error,
    schema::{caller, services},
};

/// Root query type for the caller's account data
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Profile of the authenticated customer
    async fn customer(&self, ctx: &Context<'_>) -> Result<Customer> {
        let customer = services(ctx)?
            .customers
            .customer(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(customer_from_model(customer))
    }

    /// Invoice address of the authenticated customer
    async fn customer_invoice_address(&self, ctx: &Context<'_>) -> Result<Address> {
        let fields = services(ctx)?
            .customers
            .invoice_address(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(address_from_fields(fields))
    }

    async fn customer_delivery_addresses(&self, ctx: &Context<'_>) -> Result<Vec<DeliveryAddress>> {
        let addresses = services(ctx)?
            .customers
            .delivery_addresses(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(addresses.into_iter().map(delivery_address_from_model).collect())
    }

    async fn customer_delivery_address(&self, ctx: &Context<'_>, id: ID) -> Result<DeliveryAddress> {
        let address = services(ctx)?
            .customers
            .delivery_address(caller(ctx), &id)
            .await
            .map_err(account_error)?;
        Ok(delivery_address_from_model(address))
    }

    /// Retrieve a basket by id
    ///
    /// Public baskets can be read without authentication. Private baskets are
    /// visible to their owner and to callers holding `VIEW_BASKET`.
    async fn basket(&self, ctx: &Context<'_>, id: ID) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .basket(caller(ctx), &id)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    /// All baskets of the authenticated customer
    async fn baskets(&self, ctx: &Context<'_>) -> Result<Vec<Basket>> {
        let baskets = services(ctx)?
            .baskets
            .baskets(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(baskets.into_iter().map(basket_from_model).collect())
    }

    /// Wish list of the authenticated customer, null until the first product is added
    async fn wish_list(&self, ctx: &Context<'_>) -> Result<Option<Basket>> {
        let basket = services(ctx)?
            .baskets
            .wish_list(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(basket.map(basket_from_model))
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Review> {
        let review = services(ctx)?
            .reviews
            .review(caller(ctx), &id)
            .await
            .map_err(account_error)?;
        Ok(review_from_model(review))
    }

    async fn newsletter_status(&self, ctx: &Context<'_>) -> Result<NewsletterSubscription> {
        let subscription = services(ctx)?
            .newsletter
            .status(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(subscription_from_model(subscription))
    }

    async fn wished_price(&self, ctx: &Context<'_>, id: ID) -> Result<WishedPrice> {
        let wished_price = services(ctx)?
            .wished_prices
            .wished_price(caller(ctx), &id)
            .await
            .map_err(account_error)?;
        Ok(wished_price_from_model(wished_price))
    }

    async fn wished_prices(&self, ctx: &Context<'_>) -> Result<Vec<WishedPrice>> {
        let wished_prices = services(ctx)?
            .wished_prices
            .wished_prices(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(wished_prices.into_iter().map(wished_price_from_model).collect())
    }
}
