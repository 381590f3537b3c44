use sea_orm_migration::async_trait;
pub use sea_orm_migration::{MigrationTrait, MigratorTrait};

mod m001_create_account_tables;
mod m002_create_account_indices;
mod m003_seed_countries;

/// Creates all account tables, the same on SQLite and PostgreSQL.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m001_create_account_tables::Migration),
            Box::new(m002_create_account_indices::Migration),
            Box::new(m003_seed_countries::Migration),
        ]
    }
}
