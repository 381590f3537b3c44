//! Persistence contracts for the account services
//!
//! One trait per resource kind. Implementations own row atomicity and
//! last-writer-wins semantics; the services only sequence calls and never
//! retry. `save` inserts or replaces the record with the same id.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    caller::UserId,
    errors::RepositoryError,
    models::{Basket, Country, Customer, DeliveryAddress, NewsletterSubscription, Review, WishedPrice},
};

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find(&self, id: &UserId) -> RepositoryResult<Option<Customer>>;

    /// Looks a customer up by its natural key.
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;

    async fn save(&self, customer: &Customer) -> RepositoryResult<()>;
}

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find(&self, id: &str) -> RepositoryResult<Option<DeliveryAddress>>;

    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<DeliveryAddress>>;

    async fn save(&self, address: &DeliveryAddress) -> RepositoryResult<()>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find(&self, id: &str) -> RepositoryResult<Option<Country>>;
}

#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn find(&self, id: &str) -> RepositoryResult<Option<Basket>>;

    /// Titles are unique per owner.
    async fn find_by_owner_and_title(&self, owner_id: &UserId, title: &str) -> RepositoryResult<Option<Basket>>;

    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<Basket>>;

    /// Stores the basket together with its items, replacing any previous items.
    async fn save(&self, basket: &Basket) -> RepositoryResult<()>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find(&self, id: &str) -> RepositoryResult<Option<Review>>;

    async fn save(&self, review: &Review) -> RepositoryResult<()>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn find_by_customer(&self, customer_id: &UserId) -> RepositoryResult<Option<NewsletterSubscription>>;

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<NewsletterSubscription>>;

    async fn save(&self, subscription: &NewsletterSubscription) -> RepositoryResult<()>;
}

#[async_trait]
pub trait WishedPriceRepository: Send + Sync {
    async fn find(&self, id: &str) -> RepositoryResult<Option<WishedPrice>>;

    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<WishedPrice>>;

    async fn save(&self, wished_price: &WishedPrice) -> RepositoryResult<()>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

/// The full set of repository adapters the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub customers: Arc<dyn CustomerRepository>,
    pub addresses: Arc<dyn AddressRepository>,
    pub countries: Arc<dyn CountryRepository>,
    pub baskets: Arc<dyn BasketRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
    pub wished_prices: Arc<dyn WishedPriceRepository>,
}

impl Repositories {
    /// Uses one adapter value for every repository contract.
    pub fn from_adapter<A>(adapter: A) -> Self
    where
        A: CustomerRepository
            + AddressRepository
            + CountryRepository
            + BasketRepository
            + ReviewRepository
            + NewsletterRepository
            + WishedPriceRepository
            + 'static,
    {
        Self::from_shared(Arc::new(adapter))
    }

    /// Like [`from_adapter`](Self::from_adapter), for an adapter the caller keeps a handle to.
    pub fn from_shared<A>(adapter: Arc<A>) -> Self
    where
        A: CustomerRepository
            + AddressRepository
            + CountryRepository
            + BasketRepository
            + ReviewRepository
            + NewsletterRepository
            + WishedPriceRepository
            + 'static,
    {
        Self {
            customers: adapter.clone(),
            addresses: adapter.clone(),
            countries: adapter.clone(),
            baskets: adapter.clone(),
            reviews: adapter.clone(),
            newsletter: adapter.clone(),
            wished_prices: adapter,
        }
    }
}
