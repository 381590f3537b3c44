use async_trait::async_trait;
use emporium_account::{
    models::Customer,
    repository::{CustomerRepository, RepositoryResult},
    UserId,
};
use emporium_db_entity::customer;
use sea_orm::{sea_query::OnConflict, ColumnTrait, EntityTrait, Iterable, QueryFilter};
use tracing::instrument;

use crate::{db::EmporiumDb, errors::DbSqlError};

#[async_trait]
impl CustomerRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find(&self, id: &UserId) -> RepositoryResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id.as_str())
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model.map(Customer::try_from).transpose().map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>> {
        let model = customer::Entity::find()
            .filter(customer::Column::Email.eq(email.to_lowercase()))
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model.map(Customer::try_from).transpose().map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip_all, fields(id = %value.id))]
    async fn save(&self, value: &Customer) -> RepositoryResult<()> {
        let mut model = customer::ActiveModel::from(value);
        model.email = sea_orm::Set(value.email.to_lowercase());

        customer::Entity::insert(model)
            .on_conflict(
                OnConflict::column(customer::Column::Id)
                    .update_columns(
                        customer::Column::iter()
                            .filter(|c| !matches!(c, customer::Column::Id | customer::Column::CreatedAt)),
                    )
                    .to_owned(),
            )
            .exec_without_returning(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }
}
