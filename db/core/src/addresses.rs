use async_trait::async_trait;
use emporium_account::{
    models::{Country, DeliveryAddress},
    repository::{AddressRepository, CountryRepository, RepositoryResult},
    UserId,
};
use emporium_db_entity::{country, delivery_address};
use sea_orm::{sea_query::OnConflict, ColumnTrait, EntityTrait, Iterable, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::{db::EmporiumDb, errors::DbSqlError};

#[async_trait]
impl AddressRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find(&self, id: &str) -> RepositoryResult<Option<DeliveryAddress>> {
        let model = delivery_address::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model.map(DeliveryAddress::try_from).transpose().map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip(self))]
    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<DeliveryAddress>> {
        let models = delivery_address::Entity::find()
            .filter(delivery_address::Column::OwnerId.eq(owner_id.as_str()))
            .order_by_asc(delivery_address::Column::Id)
            .all(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(models
            .into_iter()
            .map(DeliveryAddress::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip_all, fields(id = %value.id))]
    async fn save(&self, value: &DeliveryAddress) -> RepositoryResult<()> {
        delivery_address::Entity::insert(delivery_address::ActiveModel::from(value))
            .on_conflict(
                OnConflict::column(delivery_address::Column::Id)
                    .update_columns(
                        delivery_address::Column::iter().filter(|c| !matches!(c, delivery_address::Column::Id)),
                    )
                    .to_owned(),
            )
            .exec_without_returning(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        delivery_address::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }
}

#[async_trait]
impl CountryRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find(&self, id: &str) -> RepositoryResult<Option<Country>> {
        let model = country::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model.map(Country::from))
    }
}
