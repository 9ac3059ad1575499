//! Datastore opening and schema validation.
//!
//! The `compounds` table is owned by whoever builds the database file.
//! This crate only checks that it looks the way the queries expect.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use compound_lookup_catalog::{COLUMNS, TABLE};
use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Database has no 'compounds' table")]
    MissingTable,
    #[error("Table 'compounds' is missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Open the compound database read-only.
///
/// The file must already exist; SQLite would otherwise create an empty one.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if !path.is_file() {
        return Err(SchemaError::NotFound(path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    validate_schema(&conn)?;
    log::debug!("Opened {} read-only", path.display());
    Ok(conn)
}

/// Open an in-memory database with the compound table. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Check that the compound table exists and carries every expected column.
pub fn validate_schema(conn: &Connection) -> Result<(), SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        [TABLE],
        |row| row.get(0),
    )?;
    if !exists {
        return Err(SchemaError::MissingTable);
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({TABLE})"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<HashSet<_>, _>>()?;

    let missing: Vec<String> = COLUMNS
        .iter()
        .filter(|c| !present.contains(**c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }

    Ok(())
}

/// Create the compound table if it doesn't exist.
///
/// Only fixtures and [`open_memory`] call this; real databases are built
/// elsewhere.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS compounds (
    cas_number TEXT NOT NULL,
    molecular_weight REAL,
    molecular_formula TEXT,
    compound_name_en TEXT,
    compound_name_cn TEXT,
    description TEXT,
    threshold_threshold TEXT,
    threshold_detection TEXT,
    threshold_recognition TEXT,
    ion_fragments TEXT,
    odor TEXT,
    ri_semi_nonpolar TEXT,
    ri_nonpolar TEXT,
    ri_polar TEXT,
    category TEXT,
    detected_samples TEXT,
    has_aroma INTEGER
);
CREATE INDEX IF NOT EXISTS idx_compounds_cas ON compounds(cas_number);
"#;
