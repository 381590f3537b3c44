use async_trait::async_trait;
use emporium_account::{
    models::Review,
    repository::{RepositoryResult, ReviewRepository},
};
use emporium_db_entity::review;
use sea_orm::{sea_query::OnConflict, EntityTrait, Iterable};
use tracing::instrument;

use crate::{db::EmporiumDb, errors::DbSqlError};

#[async_trait]
impl ReviewRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find(&self, id: &str) -> RepositoryResult<Option<Review>> {
        let model = review::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model.map(Review::try_from).transpose().map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip_all, fields(id = %value.id))]
    async fn save(&self, value: &Review) -> RepositoryResult<()> {
        review::Entity::insert(review::ActiveModel::from(value))
            .on_conflict(
                OnConflict::column(review::Column::Id)
                    .update_columns(review::Column::iter().filter(|c| !matches!(c, review::Column::Id)))
                    .to_owned(),
            )
            .exec_without_returning(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        review::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }
}
