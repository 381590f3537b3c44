//! SQL persistence for the account services.
//!
//! [`EmporiumDb`] owns the connection pool and implements every repository
//! contract of `emporium-account`, so one handle backs all services:
//!
//! ```rust,ignore
//! let db = EmporiumDb::new("sqlite://data/emporium.db?mode=rwc", Default::default()).await?;
//! let repositories = Repositories::from_adapter(db.clone());
//! ```

pub mod addresses;
pub mod baskets;
pub mod customers;
pub mod db;
pub mod errors;
pub mod newsletter;
pub mod reviews;
pub mod wished_prices;

pub use sea_orm::DatabaseConnection;

pub use crate::{
    db::{EmporiumDb, EmporiumDbConfig},
    errors::{DbSqlError, Result},
};
