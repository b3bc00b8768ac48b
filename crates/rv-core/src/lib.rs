//! rv-core - Core library for resultview
//!
//! This crate provides the shared types used across the resultview workspace:
//! the `Book` record and the `rv.yml` configuration.

pub mod book;
pub mod config;
pub mod error;

pub use book::{format_price, Book};
pub use config::ViewerConfig;
pub use error::{CoreError, CoreResult};
