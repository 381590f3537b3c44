use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    caller::{require_caller, Caller, UserId},
    errors::{AccountError, Result},
    guard::AccessGuard,
    models::{Customer, NewsletterStatus, NewsletterSubscribeInput, NewsletterSubscription},
    new_id,
    repository::{CustomerRepository, NewsletterRepository},
    resource::{Operation, ResourceKind},
    service::ServiceConfig,
    validation,
};

/// Newsletter subscriptions with optional double opt-in.
pub struct NewsletterService {
    subscriptions: Arc<dyn NewsletterRepository>,
    customers: Arc<dyn CustomerRepository>,
    guard: AccessGuard,
    config: Arc<ServiceConfig>,
}

impl NewsletterService {
    pub fn new(
        subscriptions: Arc<dyn NewsletterRepository>,
        customers: Arc<dyn CustomerRepository>,
        guard: AccessGuard,
        config: Arc<ServiceConfig>,
    ) -> Self {
        Self {
            subscriptions,
            customers,
            guard,
            config,
        }
    }

    async fn load(&self, customer_id: &UserId) -> Result<NewsletterSubscription> {
        self.subscriptions
            .find_by_customer(customer_id)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::NewsletterSubscription, customer_id.as_str()))
    }

    /// Finds the customer with this email or registers a new one.
    ///
    /// The flag is `true` when the customer was registered by this call.
    async fn upsert_customer(
        &self,
        caller: Option<&Caller>,
        email: &str,
        input: &NewsletterSubscribeInput,
    ) -> Result<(Customer, bool)> {
        if let Some(customer) = self.customers.find_by_email(email).await? {
            return Ok((customer, false));
        }

        let shop_id = caller.map_or(self.config.default_shop_id, Caller::shop_id);
        let mut customer = Customer::new(UserId::new(new_id()), shop_id, email);
        customer.first_name = input.first_name.clone().unwrap_or_default();
        customer.last_name = input.last_name.clone().unwrap_or_default();
        customer.salutation = input.salutation.clone().unwrap_or_default();
        self.customers.save(&customer).await?;

        debug!(customer = %customer.id, "registered customer for newsletter");
        Ok((customer, true))
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn status(&self, caller: Option<&Caller>) -> Result<NewsletterSubscription> {
        let caller = require_caller(caller)?;
        let subscription = self.load(caller.id()).await?;
        self.guard.ensure(Some(caller), &subscription, Operation::Read, None)?;
        Ok(subscription)
    }

    /// Subscribes the customer behind `input.email`, or the caller when no
    /// email is given.
    ///
    /// An authenticated caller may only subscribe its own address or one that
    /// belongs to no customer yet. Anonymous requests for a known address only
    /// start the double opt-in, whatever the configuration says. A pending
    /// confirmation code is kept until it is used.
    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn subscribe(
        &self,
        caller: Option<&Caller>,
        input: NewsletterSubscribeInput,
    ) -> Result<NewsletterSubscription> {
        if let Some(email) = input.email.as_deref() {
            validation::check_email(email)?;
        }

        let (customer, registered) = match input.email.as_deref() {
            Some(email) => self.upsert_customer(caller, email, &input).await?,
            None => {
                let caller = require_caller(caller)?;
                let customer = self
                    .customers
                    .find(caller.id())
                    .await?
                    .ok_or_else(|| AccountError::not_found(ResourceKind::Customer, caller.id().as_str()))?;
                (customer, false)
            }
        };

        let mut subscription = match self.subscriptions.find_by_customer(&customer.id).await? {
            Some(subscription) => subscription,
            None => NewsletterSubscription {
                id: new_id(),
                customer_id: customer.id.clone(),
                shop_id: customer.shop_id,
                email: customer.email.clone(),
                status: NewsletterStatus::Unsubscribed,
                confirm_code: None,
                updated_at: Utc::now(),
            },
        };

        // Known addresses are changed by their owner or confirmed by mail
        let confirmed_owner = match caller {
            _ if registered => true,
            Some(caller) => {
                self.guard.ensure(Some(caller), &subscription, Operation::Update, None)?;
                true
            }
            None => false,
        };

        match subscription.status {
            NewsletterStatus::Subscribed => {}
            NewsletterStatus::MissingDoubleOptIn if subscription.confirm_code.is_some() => {}
            _ if self.config.newsletter_double_opt_in || !confirmed_owner => {
                subscription.status = NewsletterStatus::MissingDoubleOptIn;
                subscription.confirm_code = Some(new_id());
            }
            _ => {
                subscription.status = NewsletterStatus::Subscribed;
                subscription.confirm_code = None;
            }
        }
        subscription.email = customer.email;
        subscription.updated_at = Utc::now();
        self.subscriptions.save(&subscription).await?;

        info!(customer = %subscription.customer_id, status = %subscription.status, "newsletter subscription saved");
        Ok(subscription)
    }

    /// Confirms a pending subscription. No caller is required; the
    /// confirmation code proves ownership of the address.
    #[instrument(skip(self, confirm_code))]
    pub async fn opt_in(&self, email: &str, confirm_code: &str) -> Result<NewsletterSubscription> {
        let mut subscription = self
            .subscriptions
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::NewsletterSubscription, email))?;

        if subscription.status == NewsletterStatus::Subscribed {
            return Ok(subscription);
        }
        if subscription.confirm_code.as_deref() != Some(confirm_code) {
            return Err(AccountError::InvalidConfirmCode(email.to_string()));
        }

        subscription.status = NewsletterStatus::Subscribed;
        subscription.confirm_code = None;
        subscription.updated_at = Utc::now();
        self.subscriptions.save(&subscription).await?;

        info!(customer = %subscription.customer_id, "newsletter subscription confirmed");
        Ok(subscription)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn unsubscribe(&self, caller: Option<&Caller>) -> Result<NewsletterSubscription> {
        let caller = require_caller(caller)?;
        let mut subscription = self.load(caller.id()).await?;
        self.guard.ensure(Some(caller), &subscription, Operation::Update, None)?;

        subscription.status = NewsletterStatus::Unsubscribed;
        subscription.confirm_code = None;
        subscription.updated_at = Utc::now();
        self.subscriptions.save(&subscription).await?;

        info!(customer = %subscription.customer_id, "newsletter subscription cancelled");
        Ok(subscription)
    }
}
