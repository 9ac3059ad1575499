use compound_lookup_lib::{CompoundStore, ResolvedSettings};

use crate::CliError;
use crate::cli_types::SearchArgs;

use super::{open_store, print_details, print_records};

/// Entry point for `search`.
pub(crate) fn run_search(settings: &ResolvedSettings, args: &SearchArgs) -> Result<(), CliError> {
    let filter = args.to_filter();
    if filter.is_unconstrained() {
        log::debug!("No filters given; listing every compound");
    }

    let records = {
        let conn = open_store(settings)?;
        conn.search(&filter)
            .map_err(|e| CliError::database(format!("Search failed: {}", e)))?
    };

    if records.is_empty() {
        log::info!("No matching records.");
        return Ok(());
    }

    print_records(&records, &args.output)?;
    if args.output.detail {
        print_details(&records, settings);
    }
    Ok(())
}
