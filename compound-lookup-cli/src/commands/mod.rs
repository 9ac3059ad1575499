pub(crate) mod batch;
pub(crate) mod config;
pub(crate) mod detail;
pub(crate) mod search;
pub(crate) mod stats;

use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compound_lookup_catalog::{COLUMNS, Compound};
use compound_lookup_db::Connection;
use compound_lookup_lib::display::{
    DEFAULT_COLUMNS, THRESHOLD_NOTE, render_table, resolve_columns, shows_thresholds, write_csv,
    write_json,
};
use compound_lookup_lib::{CompoundDetail, OutputFormat, ResolvedSettings};

use crate::CliError;
use crate::cli_types::OutputArgs;

/// Open the configured database for one request.
pub(crate) fn open_store(settings: &ResolvedSettings) -> Result<Connection, CliError> {
    let path = &settings.database.value;
    compound_lookup_db::open_database(path).map_err(|e| {
        CliError::database(format!(
            "Failed to open compound database {}: {}",
            path.display(),
            e
        ))
    })
}

/// Print result rows in the requested format.
pub(crate) fn print_records(records: &[Compound], output: &OutputArgs) -> Result<(), CliError> {
    match output.output_format() {
        OutputFormat::Json => {
            let stdout = io::stdout();
            write_json(records, stdout.lock()).map_err(|e| CliError::other(e.to_string()))?;
        }
        OutputFormat::Csv => {
            let stdout = io::stdout();
            write_csv(records, stdout.lock()).map_err(|e| CliError::other(e.to_string()))?;
        }
        OutputFormat::Table => {
            let columns: Vec<&str> = if output.all_columns {
                COLUMNS.to_vec()
            } else if let Some(requested) = &output.columns {
                resolve_columns(requested).map_err(|e| CliError::input(e.to_string()))?
            } else {
                DEFAULT_COLUMNS.to_vec()
            };

            log::info!(
                "{}",
                format!("Results ({} records)", records.len())
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            for line in render_table(records, &columns, output.width.max(4)) {
                log::info!("  {}", line);
            }
            if shows_thresholds(&columns) {
                log::info!("  {}", THRESHOLD_NOTE.if_supports_color(Stdout, |t| t.dimmed()));
            }
        }
    }
    io::stdout().flush()?;
    Ok(())
}

/// Print the detail view for every record.
pub(crate) fn print_details(records: &[Compound], settings: &ResolvedSettings) {
    let images = settings.image_settings();
    for record in records {
        crate::log_blank();
        detail::print_detail(&CompoundDetail::for_compound(record.clone(), &images));
    }
}
