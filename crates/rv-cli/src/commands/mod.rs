//! CLI command implementations

pub(crate) mod books;
pub(crate) mod common;
pub(crate) mod exec;
pub(crate) mod query;
pub(crate) mod render;
