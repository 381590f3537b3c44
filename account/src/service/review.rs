use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    caller::{require_caller, Caller},
    errors::{AccountError, Result},
    guard::AccessGuard,
    models::{NewReview, Review},
    new_id,
    permission::Permission,
    repository::ReviewRepository,
    resource::{Operation, ResourceKind},
    validation,
};

/// Product reviews. Anyone may read, only the reviewer or a
/// `DELETE_REVIEW` holder may delete.
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    guard: AccessGuard,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, guard: AccessGuard) -> Self {
        Self { reviews, guard }
    }

    async fn load(&self, id: &str) -> Result<Review> {
        self.reviews
            .find(id)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::Review, id))
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn review(&self, caller: Option<&Caller>, id: &str) -> Result<Review> {
        let review = self.load(id).await?;
        self.guard.ensure(caller, &review, Operation::Read, None)?;
        Ok(review)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str()), product = %review.product_id))]
    pub async fn set(&self, caller: Option<&Caller>, review: NewReview) -> Result<Review> {
        validation::check_not_blank("productId", &review.product_id)?;
        let rating = validation::check_rating(review.rating)?;

        let caller = require_caller(caller)?;
        let review = Review {
            id: new_id(),
            owner_id: caller.id().clone(),
            shop_id: caller.shop_id(),
            product_id: review.product_id,
            text: review.text,
            rating,
            created_at: Utc::now(),
        };
        self.reviews.save(&review).await?;

        info!(id = %review.id, owner = %review.owner_id, "review saved");
        Ok(review)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn delete(&self, caller: Option<&Caller>, id: &str) -> Result<bool> {
        let review = self.load(id).await?;
        self.guard
            .ensure(caller, &review, Operation::Delete, Some(Permission::DeleteReview))?;

        self.reviews.delete(id).await?;
        info!(id, owner = %review.owner_id, "review deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{caller::ShopId, testing::InMemoryStore};

    fn service() -> ReviewService {
        ReviewService::new(Arc::new(InMemoryStore::new()), AccessGuard::default())
    }

    async fn review_by(service: &ReviewService, owner: &Caller) -> Review {
        service
            .set(
                Some(owner),
                NewReview {
                    product_id: "p-1".into(),
                    text: "Solid kite".into(),
                    rating: 4,
                },
            )
            .await
            .unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn test_reviews_are_public() {
        let service = service();
        let review = review_by(&service, &Caller::new("x", ShopId(1))).await;

        let read = service.review(None, &review.id).await.unwrap();
        assert_eq!(read.rating, 4);
        assert_eq!(read.owner_id.as_str(), "x");
    }

    #[test_log::test(tokio::test)]
    async fn test_delete_requires_ownership_or_permission() {
        let service = service();
        let review = review_by(&service, &Caller::new("x", ShopId(1))).await;

        let y = Caller::new("y", ShopId(1));
        assert!(matches!(
            service.delete(Some(&y), &review.id).await,
            Err(AccountError::Unauthorized {
                kind: ResourceKind::Review,
                operation: Operation::Delete
            })
        ));

        let moderator = y.with_permission(Permission::DeleteReview);
        assert!(service.delete(Some(&moderator), &review.id).await.unwrap());
    }

    #[test_log::test(tokio::test)]
    async fn test_anonymous_delete_is_not_authenticated() {
        let service = service();
        let review = review_by(&service, &Caller::new("x", ShopId(1))).await;

        assert!(matches!(
            service.delete(None, &review.id).await,
            Err(AccountError::NotAuthenticated)
        ));
    }

    #[test_log::test(tokio::test)]
    async fn test_rating_out_of_range_is_rejected_before_authentication() {
        let service = service();
        let err = service
            .set(
                None,
                NewReview {
                    product_id: "p-1".into(),
                    text: String::new(),
                    rating: 9,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::ValidationFailed { missing_fields } if missing_fields == ["rating"]));
    }
}
