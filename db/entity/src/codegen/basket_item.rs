use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "basket_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub basket_id: String,
    pub product_id: String,
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::basket::Entity",
        from = "Column::BasketId",
        to = "super::basket::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Basket,
}

impl Related<super::basket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Basket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
