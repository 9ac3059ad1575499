//! Read queries for the compound table.
//!
//! Provides the filtered search, the batch membership lookup, single-record
//! lookup for detail views, and a few summary counts.

use compound_lookup_catalog::{AromaFilter, COLUMNS, Compound, CompoundFilter, TABLE};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, params_from_iter};
use thiserror::Error;

/// Upper bound on bound parameters in one statement (bundled SQLite's
/// `SQLITE_MAX_VARIABLE_NUMBER`).
pub const MAX_BATCH_PARAMS: usize = 32766;

/// The aroma predicate. Row mapping, filters and stats all go through it,
/// so every non-NULL row lands on exactly one side.
const AROMATIC: &str = "has_aroma = 1";
const NOT_AROMATIC: &str = "(has_aroma IS NULL OR NOT (has_aroma = 1))";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Too many identifiers in one batch: {count} (max {max})")]
    TooManyIdentifiers { count: usize, max: usize },
}

// ── Filtered Search ─────────────────────────────────────────────────────────

/// A parameterized statement ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub sql: String,
    pub params: Vec<String>,
}

/// Escape `LIKE` metacharacters so user input only ever matches literally.
///
/// Pairs with `ESCAPE '\'` in the generated predicate.
pub fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Build the search statement for a filter.
///
/// Only present (non-blank) fields contribute a predicate, and every value
/// is a bound parameter.
pub fn build_search_query(filter: &CompoundFilter) -> SearchQuery {
    let filter = filter.normalized();
    let mut sql = format!("{} WHERE 1=1", select_clause());
    let mut params = Vec::new();

    for (column, value) in filter.text_constraints() {
        params.push(format!("%{}%", escape_like(value)));
        sql.push_str(&format!(" AND {column} LIKE ?{} ESCAPE '\\'", params.len()));
    }

    match filter.aroma {
        AromaFilter::Any => {}
        AromaFilter::Aromatic => sql.push_str(&format!(" AND {AROMATIC}")),
        AromaFilter::NotAromatic => sql.push_str(&format!(" AND {NOT_AROMATIC}")),
    }

    SearchQuery { sql, params }
}

/// Search compounds by substring filters and the aroma flag.
///
/// Substring matching uses SQLite's default `LIKE`: case-insensitive for
/// ASCII letters, exact for everything else. Row order is whatever the
/// datastore returns.
pub fn search_compounds(
    conn: &Connection,
    filter: &CompoundFilter,
) -> Result<Vec<Compound>, QueryError> {
    let query = build_search_query(filter);
    log::debug!("search: {} ({} params)", query.sql, query.params.len());
    let mut stmt = conn.prepare(&query.sql)?;
    let rows = stmt.query_map(params_from_iter(query.params.iter()), row_to_compound)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Identifier Lookups ──────────────────────────────────────────────────────

/// Fetch every compound whose CAS number exactly equals one of `ids`.
///
/// Runs a single `IN (...)` statement. Duplicates in `ids` are bound as
/// given. An empty slice returns immediately without querying.
pub fn find_compounds_by_cas(
    conn: &Connection,
    ids: &[String],
) -> Result<Vec<Compound>, QueryError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    if ids.len() > MAX_BATCH_PARAMS {
        return Err(QueryError::TooManyIdentifiers {
            count: ids.len(),
            max: MAX_BATCH_PARAMS,
        });
    }

    let placeholders = (1..=ids.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("{} WHERE cas_number IN ({placeholders})", select_clause());
    log::debug!("batch lookup: {} identifiers", ids.len());

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), row_to_compound)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch one compound by exact CAS number.
pub fn get_compound_by_cas(conn: &Connection, cas: &str) -> Result<Option<Compound>, QueryError> {
    let sql = format!("{} WHERE cas_number = ?1 LIMIT 1", select_clause());
    conn.query_row(&sql, [cas], row_to_compound)
        .optional()
        .map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary counts for the compound table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub compounds: i64,
    pub aromatic: i64,
    pub not_aromatic: i64,
    pub categories: i64,
}

/// Get overall compound table statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, QueryError> {
    let compounds: i64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM {TABLE}"), [], |r| r.get(0))?;
    let aromatic: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {TABLE} WHERE {AROMATIC}"),
        [],
        |r| r.get(0),
    )?;
    let not_aromatic: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {TABLE} WHERE {NOT_AROMATIC}"),
        [],
        |r| r.get(0),
    )?;
    let categories: i64 = conn.query_row(
        &format!(
            "SELECT COUNT(DISTINCT category) FROM {TABLE}
             WHERE category IS NOT NULL AND TRIM(category) <> ''"
        ),
        [],
        |r| r.get(0),
    )?;

    Ok(CatalogStats {
        compounds,
        aromatic,
        not_aromatic,
        categories,
    })
}

/// Distinct non-blank categories with their record counts, by name.
pub fn list_categories(conn: &Connection) -> Result<Vec<(String, i64)>, QueryError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT category, COUNT(*) FROM {TABLE}
         WHERE category IS NOT NULL AND TRIM(category) <> ''
         GROUP BY category ORDER BY category"
    ))?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

/// Column list for every read. `has_aroma` comes back already reduced to
/// NULL, 0 or 1 by the `AROMATIC` predicate.
fn select_clause() -> String {
    let columns = COLUMNS
        .iter()
        .map(|&c| {
            if c == "has_aroma" {
                format!("CASE WHEN has_aroma IS NULL THEN NULL WHEN {AROMATIC} THEN 1 ELSE 0 END")
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {columns} FROM {TABLE}")
}

/// Read any column type as display text. NULL becomes `None`.
fn text_at(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(real_text(f)),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}

/// Format a REAL the way SQLite prints it, keeping `.0` on whole values.
fn real_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

/// Read the reduced aroma flag. Only 1 is true.
fn flag_at(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Option<bool>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i == 1),
        _ => Some(false),
    })
}

fn row_to_compound(row: &rusqlite::Row<'_>) -> rusqlite::Result<Compound> {
    Ok(Compound {
        cas_number: text_at(row, 0)?.unwrap_or_default(),
        molecular_weight: text_at(row, 1)?,
        molecular_formula: text_at(row, 2)?,
        compound_name_en: text_at(row, 3)?,
        compound_name_cn: text_at(row, 4)?,
        description: text_at(row, 5)?,
        threshold_threshold: text_at(row, 6)?,
        threshold_detection: text_at(row, 7)?,
        threshold_recognition: text_at(row, 8)?,
        ion_fragments: text_at(row, 9)?,
        odor: text_at(row, 10)?,
        ri_semi_nonpolar: text_at(row, 11)?,
        ri_nonpolar: text_at(row, 12)?,
        ri_polar: text_at(row, 13)?,
        category: text_at(row, 14)?,
        detected_samples: text_at(row, 15)?,
        has_aroma: flag_at(row, 16)?,
    })
}
