//! GraphQL mutation root and resolver implementations

use async_graphql::{Context, Object, Result, ID};
use emporium_account::models::{NewBasket, NewReview, NewWishedPrice, NewsletterSubscribeInput as SubscribeRequest};
use emporium_api_types::{
    Address, AddressInput, Basket, BasketInput, DeliveryAddress, NewsletterOptInInput, NewsletterSubscribeInput,
    NewsletterSubscription, Review, ReviewInput, WishedPrice, WishedPriceInput,
};

use crate::{
    conversions::{
        address_fields_from_input, address_from_fields, basket_from_model, delivery_address_from_model,
        review_from_model, subscription_from_model, wished_price_from_model,
    },
    errors::account_error,
    schema::{caller, services},
};

/// Root mutation type for changes to the caller's account data
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Update the invoice address; omitted fields keep their value
    async fn customer_invoice_address_set(&self, ctx: &Context<'_>, invoice_address: AddressInput) -> Result<Address> {
        let fields = services(ctx)?
            .customers
            .set_invoice_address(caller(ctx), address_fields_from_input(invoice_address))
            .await
            .map_err(account_error)?;
        Ok(address_from_fields(fields))
    }

    async fn customer_delivery_address_add(&self, ctx: &Context<'_>, delivery_address: AddressInput) -> Result<DeliveryAddress> {
        let address = services(ctx)?
            .customers
            .add_delivery_address(caller(ctx), address_fields_from_input(delivery_address))
            .await
            .map_err(account_error)?;
        Ok(delivery_address_from_model(address))
    }

    async fn customer_delivery_address_delete(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        services(ctx)?
            .customers
            .delete_delivery_address(caller(ctx), &id)
            .await
            .map_err(account_error)
    }

    /// Create a basket; titles are unique per customer
    async fn basket_create(&self, ctx: &Context<'_>, basket: BasketInput) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .create(
                caller(ctx),
                NewBasket {
                    title: basket.title,
                    public: basket.public,
                },
            )
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    /// Delete a basket
    ///
    /// Owners may delete their baskets; callers holding `DELETE_BASKET` may
    /// delete any basket of their shop.
    async fn basket_remove(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        services(ctx)?
            .baskets
            .remove(caller(ctx), &id)
            .await
            .map_err(account_error)
    }

    async fn basket_make_public(&self, ctx: &Context<'_>, id: ID) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .make_public(caller(ctx), &id)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    async fn basket_make_private(&self, ctx: &Context<'_>, id: ID) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .make_private(caller(ctx), &id)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    async fn basket_add_product(
        &self,
        ctx: &Context<'_>,
        basket_id: ID,
        product_id: ID,
        #[graphql(default = 1)] amount: i32,
    ) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .add_product(caller(ctx), &basket_id, &product_id, amount)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    /// Remove an amount of a product; the item disappears once nothing is left
    async fn basket_remove_product(
        &self,
        ctx: &Context<'_>,
        basket_id: ID,
        product_id: ID,
        #[graphql(default = 1)] amount: i32,
    ) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .remove_product(caller(ctx), &basket_id, &product_id, amount)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    /// Add a product to the wish list, creating the list on first use
    async fn wish_list_add_product(&self, ctx: &Context<'_>, product_id: ID) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .wish_list_add_product(caller(ctx), &product_id)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    async fn wish_list_remove_product(&self, ctx: &Context<'_>, product_id: ID) -> Result<Basket> {
        let basket = services(ctx)?
            .baskets
            .wish_list_remove_product(caller(ctx), &product_id)
            .await
            .map_err(account_error)?;
        Ok(basket_from_model(basket))
    }

    /// Write a review for a product
    async fn review_set(&self, ctx: &Context<'_>, review: ReviewInput) -> Result<Review> {
        let review = services(ctx)?
            .reviews
            .set(
                caller(ctx),
                NewReview {
                    product_id: review.product_id.0,
                    text: review.text,
                    rating: review.rating,
                },
            )
            .await
            .map_err(account_error)?;
        Ok(review_from_model(review))
    }

    /// Delete a review; requires ownership or `DELETE_REVIEW`
    async fn review_delete(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        services(ctx)?
            .reviews
            .delete(caller(ctx), &id)
            .await
            .map_err(account_error)
    }

    /// Subscribe to the newsletter
    ///
    /// Anonymous callers must pass an email. With double opt-in enabled the
    /// subscription stays `MISSING_DOUBLE_OPTIN` until confirmed.
    async fn newsletter_subscribe(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] newsletter_status: NewsletterSubscribeInput,
    ) -> Result<NewsletterSubscription> {
        let request = SubscribeRequest {
            email: newsletter_status.email,
            first_name: newsletter_status.first_name,
            last_name: newsletter_status.last_name,
            salutation: newsletter_status.salutation,
        };
        let subscription = services(ctx)?
            .newsletter
            .subscribe(caller(ctx), request)
            .await
            .map_err(account_error)?;
        Ok(subscription_from_model(subscription))
    }

    /// Confirm a pending subscription with the code sent by email
    async fn newsletter_opt_in(&self, ctx: &Context<'_>, newsletter_status: NewsletterOptInInput) -> Result<NewsletterSubscription> {
        let subscription = services(ctx)?
            .newsletter
            .opt_in(&newsletter_status.email, &newsletter_status.confirm_code)
            .await
            .map_err(account_error)?;
        Ok(subscription_from_model(subscription))
    }

    async fn newsletter_unsubscribe(&self, ctx: &Context<'_>) -> Result<NewsletterSubscription> {
        let subscription = services(ctx)?
            .newsletter
            .unsubscribe(caller(ctx))
            .await
            .map_err(account_error)?;
        Ok(subscription_from_model(subscription))
    }

    /// Watch a product price; a notification is sent once the price is stored
    async fn wished_price_set(&self, ctx: &Context<'_>, wished_price: WishedPriceInput) -> Result<WishedPrice> {
        let wished_price = services(ctx)?
            .wished_prices
            .set(
                caller(ctx),
                NewWishedPrice {
                    product_id: wished_price.product_id.0,
                    currency: wished_price.currency,
                    price: wished_price.price,
                },
            )
            .await
            .map_err(account_error)?;
        Ok(wished_price_from_model(wished_price))
    }

    async fn wished_price_delete(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        services(ctx)?
            .wished_prices
            .delete(caller(ctx), &id)
            .await
            .map_err(account_error)
    }
}
