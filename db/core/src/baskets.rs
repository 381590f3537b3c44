use async_trait::async_trait;
use emporium_account::{
    models::Basket,
    repository::{BasketRepository, RepositoryResult},
    UserId,
};
use emporium_db_entity::{basket, basket_item, conversions::baskets::{basket_from_rows, basket_item_models}};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, EntityTrait, Iterable, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use tracing::instrument;

use crate::{db::EmporiumDb, errors::DbSqlError};

impl EmporiumDb {
    /// Loads baskets matching `query` together with their items.
    async fn load_baskets(&self, query: Select<basket::Entity>) -> Result<Vec<Basket>, DbSqlError> {
        let rows = query
            .find_with_related(basket_item::Entity)
            .order_by_asc(basket_item::Column::Id)
            .all(self.conn())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(basket, items)| basket_from_rows(basket, items))
            .collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl BasketRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find(&self, id: &str) -> RepositoryResult<Option<Basket>> {
        let baskets = self
            .load_baskets(basket::Entity::find().filter(basket::Column::Id.eq(id)))
            .await?;
        Ok(baskets.into_iter().next())
    }

    #[instrument(level = "trace", skip(self))]
    async fn find_by_owner_and_title(&self, owner_id: &UserId, title: &str) -> RepositoryResult<Option<Basket>> {
        let baskets = self
            .load_baskets(
                basket::Entity::find()
                    .filter(basket::Column::OwnerId.eq(owner_id.as_str()))
                    .filter(basket::Column::Title.eq(title)),
            )
            .await?;
        Ok(baskets.into_iter().next())
    }

    #[instrument(level = "trace", skip(self))]
    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<Basket>> {
        Ok(self
            .load_baskets(basket::Entity::find().filter(basket::Column::OwnerId.eq(owner_id.as_str())))
            .await?)
    }

    #[instrument(level = "trace", skip_all, fields(id = %value.id))]
    async fn save(&self, value: &Basket) -> RepositoryResult<()> {
        let tx = self.conn().begin().await.map_err(DbSqlError::from)?;

        basket::Entity::insert(basket::ActiveModel::from(value))
            .on_conflict(
                OnConflict::column(basket::Column::Id)
                    .update_columns(
                        basket::Column::iter().filter(|c| !matches!(c, basket::Column::Id | basket::Column::CreatedAt)),
                    )
                    .to_owned(),
            )
            .exec_without_returning(&tx)
            .await
            .map_err(DbSqlError::from)?;

        basket_item::Entity::delete_many()
            .filter(basket_item::Column::BasketId.eq(value.id.as_str()))
            .exec(&tx)
            .await
            .map_err(DbSqlError::from)?;

        let items = basket_item_models(value);
        if !items.is_empty() {
            basket_item::Entity::insert_many(items)
                .exec_without_returning(&tx)
                .await
                .map_err(DbSqlError::from)?;
        }

        tx.commit().await.map_err(DbSqlError::from)?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let tx = self.conn().begin().await.map_err(DbSqlError::from)?;

        basket_item::Entity::delete_many()
            .filter(basket_item::Column::BasketId.eq(id))
            .exec(&tx)
            .await
            .map_err(DbSqlError::from)?;
        basket::Entity::delete_by_id(id)
            .exec(&tx)
            .await
            .map_err(DbSqlError::from)?;

        tx.commit().await.map_err(DbSqlError::from)?;
        Ok(())
    }
}
