//! SeaORM bindings for the account database.
//!
//! Entities mirror the tables created by the `migration` crate one to one.
//! Conversions between entity models and account models live in [`conversions`].

#![allow(clippy::all)]

pub mod codegen;

pub mod conversions;

pub mod errors;

pub use codegen::*;
