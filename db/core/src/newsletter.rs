use async_trait::async_trait;
use emporium_account::{
    models::NewsletterSubscription,
    repository::{NewsletterRepository, RepositoryResult},
    UserId,
};
use emporium_db_entity::newsletter_subscription;
use sea_orm::{sea_query::OnConflict, ColumnTrait, EntityTrait, Iterable, QueryFilter};
use tracing::instrument;

use crate::{db::EmporiumDb, errors::DbSqlError};

#[async_trait]
impl NewsletterRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find_by_customer(&self, customer_id: &UserId) -> RepositoryResult<Option<NewsletterSubscription>> {
        let model = newsletter_subscription::Entity::find()
            .filter(newsletter_subscription::Column::CustomerId.eq(customer_id.as_str()))
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model
            .map(NewsletterSubscription::try_from)
            .transpose()
            .map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<NewsletterSubscription>> {
        let model = newsletter_subscription::Entity::find()
            .filter(newsletter_subscription::Column::Email.eq(email.to_lowercase()))
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model
            .map(NewsletterSubscription::try_from)
            .transpose()
            .map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip_all, fields(id = %value.id))]
    async fn save(&self, value: &NewsletterSubscription) -> RepositoryResult<()> {
        let mut model = newsletter_subscription::ActiveModel::from(value);
        model.email = sea_orm::Set(value.email.to_lowercase());

        newsletter_subscription::Entity::insert(model)
            .on_conflict(
                OnConflict::column(newsletter_subscription::Column::Id)
                    .update_columns(
                        newsletter_subscription::Column::iter()
                            .filter(|c| !matches!(c, newsletter_subscription::Column::Id)),
                    )
                    .to_owned(),
            )
            .exec_without_returning(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }
}
