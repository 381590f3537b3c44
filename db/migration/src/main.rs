//! Applies or rolls back the account schema, e.g. `DATABASE_URL=... migration up`

use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
