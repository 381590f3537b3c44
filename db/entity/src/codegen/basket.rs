use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "basket")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    pub shop_id: i32,
    pub title: String,
    pub public: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::basket_item::Entity")]
    BasketItem,
}

impl Related<super::basket_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BasketItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
