//! Compound record and search filter types.
//!
//! This crate defines the data model without any database dependencies.
//! `compound-lookup-db` maps rows into these types and consumes the filters.

pub mod filter;
pub mod types;

pub use filter::{AromaFilter, CompoundFilter};
pub use types::*;
