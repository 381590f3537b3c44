use async_trait::async_trait;
use emporium_account::{
    models::WishedPrice,
    repository::{RepositoryResult, WishedPriceRepository},
    UserId,
};
use emporium_db_entity::wished_price;
use sea_orm::{sea_query::OnConflict, ColumnTrait, EntityTrait, Iterable, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::{db::EmporiumDb, errors::DbSqlError};

#[async_trait]
impl WishedPriceRepository for EmporiumDb {
    #[instrument(level = "trace", skip(self))]
    async fn find(&self, id: &str) -> RepositoryResult<Option<WishedPrice>> {
        let model = wished_price::Entity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(model.map(WishedPrice::try_from).transpose().map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip(self))]
    async fn list_by_owner(&self, owner_id: &UserId) -> RepositoryResult<Vec<WishedPrice>> {
        let models = wished_price::Entity::find()
            .filter(wished_price::Column::OwnerId.eq(owner_id.as_str()))
            .order_by_asc(wished_price::Column::CreatedAt)
            .all(self.conn())
            .await
            .map_err(DbSqlError::from)?;

        Ok(models
            .into_iter()
            .map(WishedPrice::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbSqlError::from)?)
    }

    #[instrument(level = "trace", skip_all, fields(id = %value.id))]
    async fn save(&self, value: &WishedPrice) -> RepositoryResult<()> {
        wished_price::Entity::insert(wished_price::ActiveModel::from(value))
            .on_conflict(
                OnConflict::column(wished_price::Column::Id)
                    .update_columns(
                        wished_price::Column::iter()
                            .filter(|c| !matches!(c, wished_price::Column::Id | wished_price::Column::CreatedAt)),
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
        wished_price::Entity::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(DbSqlError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use emporium_account::ShopId;

    use super::*;

    fn wished_price(id: &str, age_minutes: i64) -> WishedPrice {
        WishedPrice {
            id: id.into(),
            owner_id: UserId::from("c-1"),
            shop_id: ShopId(1),
            product_id: "p-1".into(),
            currency: "EUR".into(),
            price: 12.5,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_creation() -> anyhow::Result<()> {
        let db = EmporiumDb::new_in_memory().await?;
        db.save(&wished_price("w-new", 1)).await?;
        db.save(&wished_price("w-old", 10)).await?;

        let ids: Vec<_> = db
            .list_by_owner(&UserId::from("c-1"))
            .await?
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, ["w-old", "w-new"]);

        db.delete("w-old").await?;
        assert!(db.find("w-old").await?.is_none());
        assert_eq!(db.find("w-new").await?.map(|w| w.price), Some(12.5));
        Ok(())
    }
}
