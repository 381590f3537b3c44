//! In-memory collaborators for tests

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    caller::UserId,
    errors::RepositoryError,
    models::{Basket, Country, Customer, DeliveryAddress, NewsletterSubscription, Review, WishedPrice},
    notification::{NotificationError, WishedPriceNotifier},
    repository::{
        AddressRepository, BasketRepository, CountryRepository, CustomerRepository, NewsletterRepository,
        RepositoryResult, ReviewRepository, WishedPriceRepository,
    },
};

#[derive(Default)]
struct Tables {
    customers: HashMap<String, Customer>,
    addresses: HashMap<String, DeliveryAddress>,
    countries: HashMap<String, Country>,
    baskets: HashMap<String, Basket>,
    reviews: HashMap<String, Review>,
    subscriptions: HashMap<String, NewsletterSubscription>,
    wished_prices: HashMap<String, WishedPrice>,
}

/// Repository adapter backed by hash maps.
///
/// Writes can be switched to fail, which simulates an unavailable database.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writable(&self) -> RepositoryResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(RepositoryError::msg("database is unavailable"))
        } else {
            Ok(())
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn insert_country(&self, country: Country) {
        self.tables().countries.insert(country.id.clone(), country);
    }

    pub fn insert_customer(&self, customer: Customer) {
        self.tables().customers.insert(customer.id.to_string(), customer);
    }

    pub fn customer_count(&self) -> usize {
        self.tables().customers.len()
    }

    pub fn basket_count(&self) -> usize {
        self.tables().baskets.len()
    }
}

fn sorted_by<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(key);
    items
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn find(&self, id: &UserId) -> RepositoryResult<Option<Customer>> {
        Ok(self.tables().customers.get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        Ok(self
            .tables()
            .customers
            .values()
            .find(|c| c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn save(&self, customer: &Customer) -> RepositoryResult<()> {
        self.check_writable()?;
        self.insert_customer(customer.clone());
        Ok(())
    }
}

#[async_trait]
impl AddressRepository for InMemoryStore {
    async fn find(&self, id: &str) -> RepositoryResult<Option<DeliveryAddress>> {
        Ok(self.tables().addresses.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<DeliveryAddress>> {
        let items = self
            .tables()
            .addresses
            .values()
            .filter(|a| &a.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(sorted_by(items, |a: &DeliveryAddress| a.id.clone()))
    }

    async fn save(&self, address: &DeliveryAddress) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().addresses.insert(address.id.clone(), address.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().addresses.remove(id);
        Ok(())
    }
}

#[async_trait]
impl CountryRepository for InMemoryStore {
    async fn find(&self, id: &str) -> RepositoryResult<Option<Country>> {
        Ok(self.tables().countries.get(id).cloned())
    }
}

#[async_trait]
impl BasketRepository for InMemoryStore {
    async fn find(&self, id: &str) -> RepositoryResult<Option<Basket>> {
        Ok(self.tables().baskets.get(id).cloned())
    }

    async fn find_by_owner_and_title(&self, owner_id: &UserId, title: &str) -> RepositoryResult<Option<Basket>> {
        Ok(self
            .tables()
            .baskets
            .values()
            .find(|b| &b.owner_id == owner_id && b.title == title)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<Basket>> {
        let items = self
            .tables()
            .baskets
            .values()
            .filter(|b| &b.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(sorted_by(items, |b: &Basket| b.id.clone()))
    }

    async fn save(&self, basket: &Basket) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().baskets.insert(basket.id.clone(), basket.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().baskets.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find(&self, id: &str) -> RepositoryResult<Option<Review>> {
        Ok(self.tables().reviews.get(id).cloned())
    }

    async fn save(&self, review: &Review) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().reviews.insert(review.id.clone(), review.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().reviews.remove(id);
        Ok(())
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryStore {
    async fn find_by_customer(&self, customer_id: &UserId) -> RepositoryResult<Option<NewsletterSubscription>> {
        Ok(self
            .tables()
            .subscriptions
            .values()
            .find(|s| &s.customer_id == customer_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<NewsletterSubscription>> {
        Ok(self
            .tables()
            .subscriptions
            .values()
            .find(|s| s.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn save(&self, subscription: &NewsletterSubscription) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables()
            .subscriptions
            .insert(subscription.id.clone(), subscription.clone());
        Ok(())
    }
}

#[async_trait]
impl WishedPriceRepository for InMemoryStore {
    async fn find(&self, id: &str) -> RepositoryResult<Option<WishedPrice>> {
        Ok(self.tables().wished_prices.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<WishedPrice>> {
        let items = self
            .tables()
            .wished_prices
            .values()
            .filter(|w| &w.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(sorted_by(items, |w: &WishedPrice| w.created_at))
    }

    async fn save(&self, wished_price: &WishedPrice) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables()
            .wished_prices
            .insert(wished_price.id.clone(), wished_price.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.check_writable()?;
        self.tables().wished_prices.remove(id);
        Ok(())
    }
}

/// Notifier that records every call and optionally fails it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<WishedPrice>>,
    fail: bool,
    notify: Notify,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails after being recorded.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<WishedPrice> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Waits until at least `count` notifications were recorded, or the timeout passes.
    pub async fn wait_for(&self, count: usize, timeout: Duration) -> Vec<WishedPrice> {
        let _ = tokio::time::timeout(timeout, async {
            loop {
                let notified = self.notify.notified();
                if self.sent().len() >= count {
                    break;
                }
                notified.await;
            }
        })
        .await;
        self.sent()
    }
}

#[async_trait]
impl WishedPriceNotifier for RecordingNotifier {
    async fn notify(&self, wished_price: &WishedPrice) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(wished_price.clone());
        self.notify.notify_waiters();

        if self.fail {
            Err(NotificationError::Delivery("smtp relay refused connection".into()))
        } else {
            Ok(())
        }
    }
}
