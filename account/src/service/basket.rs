use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    caller::{require_caller, Caller},
    errors::{AccountError, Result},
    guard::AccessGuard,
    models::{Basket, BasketPatch, NewBasket, WISH_LIST_TITLE},
    new_id,
    permission::Permission,
    repository::BasketRepository,
    resource::{Operation, ResourceKind},
    validation,
};

/// Baskets and the wish list.
pub struct BasketService {
    baskets: Arc<dyn BasketRepository>,
    guard: AccessGuard,
}

impl BasketService {
    pub fn new(baskets: Arc<dyn BasketRepository>, guard: AccessGuard) -> Self {
        Self { baskets, guard }
    }

    async fn load(&self, id: &str) -> Result<Basket> {
        self.baskets
            .find(id)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::Basket, id))
    }

    async fn ensure_title_free(&self, caller: &Caller, title: &str) -> Result<()> {
        if self.baskets.find_by_owner_and_title(caller.id(), title).await?.is_some() {
            return Err(AccountError::BasketExists(title.to_string()));
        }
        Ok(())
    }

    /// Reads a basket. Public baskets are readable anonymously.
    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn basket(&self, caller: Option<&Caller>, id: &str) -> Result<Basket> {
        let basket = self.load(id).await?;
        self.guard
            .ensure(caller, &basket, Operation::Read, Some(Permission::ViewBasket))?;
        Ok(basket)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn baskets(&self, caller: Option<&Caller>) -> Result<Vec<Basket>> {
        let caller = require_caller(caller)?;
        Ok(self.baskets.list_by_owner(caller.id()).await?)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str()), title = %basket.title))]
    pub async fn create(&self, caller: Option<&Caller>, basket: NewBasket) -> Result<Basket> {
        validation::check_not_blank("title", &basket.title)?;

        let caller = require_caller(caller)?;
        self.ensure_title_free(caller, &basket.title).await?;

        let basket = Basket::new(new_id(), caller.id().clone(), caller.shop_id(), basket);
        self.baskets.save(&basket).await?;

        info!(id = %basket.id, owner = %basket.owner_id, "basket created");
        Ok(basket)
    }

    /// Applies the fields present in `patch`; absent fields keep their values.
    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn update(&self, caller: Option<&Caller>, id: &str, patch: BasketPatch) -> Result<Basket> {
        if let Some(title) = patch.title.as_deref() {
            validation::check_not_blank("title", title)?;
        }

        let mut basket = self.load(id).await?;
        self.guard.ensure(caller, &basket, Operation::Update, None)?;

        if let (Some(caller), Some(title)) = (caller, patch.title.as_deref()) {
            if title != basket.title {
                self.ensure_title_free(caller, title).await?;
            }
        }

        basket.apply(patch);
        basket.updated_at = Utc::now();
        self.baskets.save(&basket).await?;
        Ok(basket)
    }

    pub async fn make_public(&self, caller: Option<&Caller>, id: &str) -> Result<Basket> {
        self.update(
            caller,
            id,
            BasketPatch {
                public: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn make_private(&self, caller: Option<&Caller>, id: &str) -> Result<Basket> {
        self.update(
            caller,
            id,
            BasketPatch {
                public: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn add_product(
        &self,
        caller: Option<&Caller>,
        basket_id: &str,
        product_id: &str,
        amount: i32,
    ) -> Result<Basket> {
        validation::check_not_blank("productId", product_id)?;
        let amount = validation::check_amount(amount)?;

        let mut basket = self.load(basket_id).await?;
        self.guard.ensure(caller, &basket, Operation::Update, None)?;

        basket.add_product(product_id, amount);
        basket.updated_at = Utc::now();
        self.baskets.save(&basket).await?;
        Ok(basket)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn remove_product(
        &self,
        caller: Option<&Caller>,
        basket_id: &str,
        product_id: &str,
        amount: i32,
    ) -> Result<Basket> {
        validation::check_not_blank("productId", product_id)?;
        let amount = validation::check_amount(amount)?;

        let mut basket = self.load(basket_id).await?;
        self.guard.ensure(caller, &basket, Operation::Update, None)?;

        basket.remove_product(product_id, amount);
        basket.updated_at = Utc::now();
        self.baskets.save(&basket).await?;
        Ok(basket)
    }

    /// Deletes a basket. Holders of `DELETE_BASKET` may delete foreign baskets.
    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn remove(&self, caller: Option<&Caller>, id: &str) -> Result<bool> {
        let basket = self.load(id).await?;
        self.guard
            .ensure(caller, &basket, Operation::Delete, Some(Permission::DeleteBasket))?;

        self.baskets.delete(id).await?;
        info!(id, owner = %basket.owner_id, "basket removed");
        Ok(true)
    }

    /// The caller's wish list, if one was created yet.
    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn wish_list(&self, caller: Option<&Caller>) -> Result<Option<Basket>> {
        let caller = require_caller(caller)?;
        Ok(self.baskets.find_by_owner_and_title(caller.id(), WISH_LIST_TITLE).await?)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn wish_list_add_product(&self, caller: Option<&Caller>, product_id: &str) -> Result<Basket> {
        validation::check_not_blank("productId", product_id)?;
        let caller = require_caller(caller)?;

        let mut wish_list = match self.baskets.find_by_owner_and_title(caller.id(), WISH_LIST_TITLE).await? {
            Some(wish_list) => wish_list,
            None => {
                debug!(owner = %caller.id(), "creating wish list");
                Basket::new(
                    new_id(),
                    caller.id().clone(),
                    caller.shop_id(),
                    NewBasket {
                        title: WISH_LIST_TITLE.to_string(),
                        public: false,
                    },
                )
            }
        };
        self.guard.ensure(Some(caller), &wish_list, Operation::Update, None)?;

        // A product is listed at most once
        if !wish_list.items.iter().any(|item| item.product_id == product_id) {
            wish_list.add_product(product_id, 1);
        }
        wish_list.updated_at = Utc::now();
        self.baskets.save(&wish_list).await?;
        Ok(wish_list)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn wish_list_remove_product(&self, caller: Option<&Caller>, product_id: &str) -> Result<Basket> {
        let caller = require_caller(caller)?;

        let mut wish_list = self
            .baskets
            .find_by_owner_and_title(caller.id(), WISH_LIST_TITLE)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::Basket, WISH_LIST_TITLE))?;
        self.guard.ensure(Some(caller), &wish_list, Operation::Update, None)?;

        wish_list.remove_product(product_id, u32::MAX);
        wish_list.updated_at = Utc::now();
        self.baskets.save(&wish_list).await?;
        Ok(wish_list)
    }
}
