//! The datastore seam used by the lookup operations.

use compound_lookup_catalog::{Compound, CompoundFilter};
use compound_lookup_db::{Connection, QueryError};

/// Read access to compound records.
pub trait CompoundStore {
    /// Rows matching every present field of `filter`.
    fn search(&self, filter: &CompoundFilter) -> Result<Vec<Compound>, QueryError>;

    /// Rows whose identifier exactly equals one of `ids`, in one query.
    fn find_by_cas(&self, ids: &[String]) -> Result<Vec<Compound>, QueryError>;

    /// The row with exactly this identifier, if any.
    fn get(&self, cas: &str) -> Result<Option<Compound>, QueryError>;
}

impl CompoundStore for Connection {
    fn search(&self, filter: &CompoundFilter) -> Result<Vec<Compound>, QueryError> {
        compound_lookup_db::search_compounds(self, filter)
    }

    fn find_by_cas(&self, ids: &[String]) -> Result<Vec<Compound>, QueryError> {
        compound_lookup_db::find_compounds_by_cas(self, ids)
    }

    fn get(&self, cas: &str) -> Result<Option<Compound>, QueryError> {
        compound_lookup_db::get_compound_by_cas(self, cas)
    }
}
