//! Service façades, one per resource kind
//!
//! Every operation follows the same shape: validate the payload, load the
//! target, ask the [`AccessGuard`] and only then mutate or return. Errors are
//! never translated here; they reach the transport layer unchanged.

use std::sync::Arc;

use crate::{
    caller::ShopId,
    guard::AccessGuard,
    models::AddressField,
    notification::WishedPriceNotifier,
    repository::Repositories,
};

mod basket;
mod customer;
mod newsletter;
mod review;
mod wished_price;

pub use basket::BasketService;
pub use customer::CustomerService;
pub use newsletter::NewsletterService;
pub use review::ReviewService;
pub use wished_price::WishedPriceService;

/// Shop-level settings the façades depend on
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address fields that must be non-blank on every address write
    pub must_fill_fields: Vec<AddressField>,
    /// Allow permission holders to act across shops
    pub mall_users: bool,
    /// Require a confirmation code before a subscription becomes active
    pub newsletter_double_opt_in: bool,
    /// Currencies accepted for wished prices
    pub currencies: Vec<String>,
    /// Shop assigned to customers created without a caller
    pub default_shop_id: ShopId,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            must_fill_fields: Vec::new(),
            mall_users: false,
            newsletter_double_opt_in: true,
            currencies: vec!["EUR".to_string()],
            default_shop_id: ShopId::default(),
        }
    }
}

/// All account façades, wired to the same repositories and guard.
#[derive(Clone)]
pub struct AccountServices {
    pub customers: Arc<CustomerService>,
    pub baskets: Arc<BasketService>,
    pub reviews: Arc<ReviewService>,
    pub newsletter: Arc<NewsletterService>,
    pub wished_prices: Arc<WishedPriceService>,
}

impl AccountServices {
    pub fn new(repositories: Repositories, notifier: Arc<dyn WishedPriceNotifier>, config: ServiceConfig) -> Self {
        let guard = AccessGuard::new(config.mall_users);
        let config = Arc::new(config);

        Self {
            customers: Arc::new(CustomerService::new(
                Arc::clone(&repositories.customers),
                Arc::clone(&repositories.addresses),
                Arc::clone(&repositories.countries),
                guard,
                Arc::clone(&config),
            )),
            baskets: Arc::new(BasketService::new(Arc::clone(&repositories.baskets), guard)),
            reviews: Arc::new(ReviewService::new(Arc::clone(&repositories.reviews), guard)),
            newsletter: Arc::new(NewsletterService::new(
                Arc::clone(&repositories.newsletter),
                Arc::clone(&repositories.customers),
                guard,
                Arc::clone(&config),
            )),
            wished_prices: Arc::new(WishedPriceService::new(
                Arc::clone(&repositories.wished_prices),
                notifier,
                guard,
                config,
            )),
        }
    }
}
