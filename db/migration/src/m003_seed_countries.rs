use sea_orm_migration::prelude::*;

use crate::m001_create_account_tables::Country;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Countries available right after installation: (id, title, active)
const COUNTRIES: [(&str, &str, bool); 6] = [
    ("DE", "Germany", true),
    ("AT", "Austria", true),
    ("CH", "Switzerland", true),
    ("GB", "United Kingdom", true),
    ("US", "United States", true),
    ("BV", "Bouvet Island", false),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Country::Table)
            .columns([Country::Id, Country::Title, Country::Active]);
        for (id, title, active) in COUNTRIES {
            insert.values_panic([id.into(), title.into(), active.into()]);
        }
        insert.on_conflict(OnConflict::column(Country::Id).do_nothing().to_owned());

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<&str> = COUNTRIES.iter().map(|(id, _, _)| *id).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Country::Table)
                    .and_where(Expr::col(Country::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
