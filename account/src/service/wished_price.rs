use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    caller::{require_caller, Caller},
    errors::{AccountError, Result},
    guard::AccessGuard,
    models::{NewWishedPrice, WishedPrice},
    new_id,
    notification::{self, WishedPriceNotifier},
    permission::Permission,
    repository::WishedPriceRepository,
    resource::{Operation, ResourceKind},
    service::ServiceConfig,
    validation,
};

/// Price watches.
///
/// Every stored wished price triggers a notification on a separate task; the
/// save is never affected by its outcome.
pub struct WishedPriceService {
    wished_prices: Arc<dyn WishedPriceRepository>,
    notifier: Arc<dyn WishedPriceNotifier>,
    guard: AccessGuard,
    config: Arc<ServiceConfig>,
}

impl WishedPriceService {
    pub fn new(
        wished_prices: Arc<dyn WishedPriceRepository>,
        notifier: Arc<dyn WishedPriceNotifier>,
        guard: AccessGuard,
        config: Arc<ServiceConfig>,
    ) -> Self {
        Self {
            wished_prices,
            notifier,
            guard,
            config,
        }
    }

    async fn load(&self, id: &str) -> Result<WishedPrice> {
        self.wished_prices
            .find(id)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::WishedPrice, id))
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn wished_price(&self, caller: Option<&Caller>, id: &str) -> Result<WishedPrice> {
        let wished_price = self.load(id).await?;
        self.guard
            .ensure(caller, &wished_price, Operation::Read, Some(Permission::ViewWishedPrices))?;
        Ok(wished_price)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn wished_prices(&self, caller: Option<&Caller>) -> Result<Vec<WishedPrice>> {
        let caller = require_caller(caller)?;
        Ok(self.wished_prices.list_by_owner(caller.id()).await?)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str()), product = %input.product_id))]
    pub async fn set(&self, caller: Option<&Caller>, input: NewWishedPrice) -> Result<WishedPrice> {
        validation::check_not_blank("productId", &input.product_id)?;
        validation::check_price(input.price)?;
        validation::check_currency(&input.currency, &self.config.currencies)?;

        let caller = require_caller(caller)?;
        let wished_price = WishedPrice {
            id: new_id(),
            owner_id: caller.id().clone(),
            shop_id: caller.shop_id(),
            product_id: input.product_id,
            currency: input.currency.to_uppercase(),
            price: input.price,
            created_at: Utc::now(),
        };
        self.wished_prices.save(&wished_price).await?;
        info!(id = %wished_price.id, owner = %wished_price.owner_id, "wished price saved");

        notification::dispatch(Arc::clone(&self.notifier), wished_price.clone());
        Ok(wished_price)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn delete(&self, caller: Option<&Caller>, id: &str) -> Result<bool> {
        let wished_price = self.load(id).await?;
        self.guard
            .ensure(caller, &wished_price, Operation::Delete, Some(Permission::DeleteWishedPrice))?;

        self.wished_prices.delete(id).await?;
        info!(id, "wished price deleted");
        Ok(true)
    }
}
