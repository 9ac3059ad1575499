//! SQLite access layer for the compound table.
//!
//! Opens the datastore read-only, validates the expected columns, and
//! provides the filtered search and batch membership queries.

pub mod queries;
pub mod schema;

pub use queries::{
    build_search_query, catalog_stats, escape_like, find_compounds_by_cas, get_compound_by_cas,
    list_categories, search_compounds, CatalogStats, QueryError, SearchQuery, MAX_BATCH_PARAMS,
};
pub use rusqlite::Connection;
pub use schema::{open_database, open_memory, validate_schema, SchemaError};
