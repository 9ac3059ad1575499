//! Batch reconciliation: which requested identifiers came back.

use std::collections::HashSet;

use compound_lookup_catalog::Compound;
use compound_lookup_db::QueryError;

use crate::store::CompoundStore;

/// Result of a batch lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// No identifiers were supplied; nothing was queried.
    Empty,
    Completed(BatchReport),
}

/// Found/missing partition of a batch request.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Identifiers as supplied, duplicates included.
    pub requested: Vec<String>,
    /// Rows returned by the membership query.
    pub records: Vec<Compound>,
    /// Distinct requested identifiers present in `records`, in input order.
    pub found: Vec<String>,
    /// Distinct requested identifiers absent from `records`, in input order.
    pub missing: Vec<String>,
}

impl BatchReport {
    /// Number of distinct identifiers requested.
    pub fn unique_requested(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    /// Input lines that repeated an earlier identifier.
    pub fn duplicate_count(&self) -> usize {
        self.requested.len() - self.unique_requested()
    }

    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }

    /// "N/M matched", counted over distinct identifiers.
    pub fn summary(&self) -> String {
        format!("{}/{} matched", self.found.len(), self.unique_requested())
    }
}

/// Partition `requested` against the identifiers present in `records`.
///
/// Membership is exact string equality against the set of returned
/// identifiers, not positional.
pub fn reconcile(requested: Vec<String>, records: Vec<Compound>) -> BatchReport {
    let (found, missing) = {
        let returned: HashSet<&str> = records.iter().map(|c| c.cas_number.as_str()).collect();
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for id in &requested {
            if !seen.insert(id.as_str()) {
                continue;
            }
            if returned.contains(id.as_str()) {
                found.push(id.clone());
            } else {
                missing.push(id.clone());
            }
        }
        (found, missing)
    };

    BatchReport {
        requested,
        records,
        found,
        missing,
    }
}

/// Look up a batch of identifiers with one query and reconcile the result.
///
/// An empty list returns [`BatchOutcome::Empty`] without touching the store.
pub fn run_batch<S: CompoundStore + ?Sized>(
    store: &S,
    ids: Vec<String>,
) -> Result<BatchOutcome, QueryError> {
    if ids.is_empty() {
        return Ok(BatchOutcome::Empty);
    }
    let records = store.find_by_cas(&ids)?;
    log::debug!("batch: {} rows for {} identifiers", records.len(), ids.len());
    Ok(BatchOutcome::Completed(reconcile(ids, records)))
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
