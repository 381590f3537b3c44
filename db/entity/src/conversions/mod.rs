//! Conversions between entity models and account models.
//!
//! Reading is fallible (`TryFrom<Model>`) because stored values may violate
//! model invariants; writing builds a fully set `ActiveModel`.

mod addresses;
pub mod baskets;
mod customers;
mod newsletter;
mod reviews;
mod wished_prices;
