use std::io::{self, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compound_lookup_lib::batch::BatchInputError;
use compound_lookup_lib::{
    BatchOutcome, BatchReport, ResolvedSettings, read_identifier_file, read_identifier_stream,
};

use crate::CliError;
use crate::cli_types::OutputArgs;

use super::{open_store, print_details, print_records};

/// Entry point for `batch`.
pub(crate) fn run_batch(
    settings: &ResolvedSettings,
    file: &Path,
    missing_only: bool,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let ids = match read_ids(file) {
        Ok(ids) => ids,
        Err(BatchInputError::Io(e)) => {
            return Err(CliError::input(format!(
                "Cannot read batch file {}: {}",
                file.display(),
                e
            )));
        }
        Err(e @ BatchInputError::NotText(_)) => return Err(CliError::input(e.to_string())),
        Err(e @ BatchInputError::NotUtf8 { .. }) => {
            log::warn!("{}; treating it as empty", e);
            Vec::new()
        }
    };

    let outcome = {
        let conn = open_store(settings)?;
        compound_lookup_lib::run_batch(&conn, ids)
            .map_err(|e| CliError::database(format!("Batch lookup failed: {}", e)))?
    };

    let report = match outcome {
        BatchOutcome::Empty => {
            log::warn!("Batch input is empty");
            return Ok(());
        }
        BatchOutcome::Completed(report) => report,
    };

    if missing_only {
        return print_missing(&report);
    }

    report_summary(&report);
    if report.records.is_empty() {
        log::info!("No matching records.");
        return Ok(());
    }

    crate::log_blank();
    print_records(&report.records, output)?;
    if output.detail {
        print_details(&report.records, settings);
    }
    Ok(())
}

fn read_ids(file: &Path) -> Result<Vec<String>, BatchInputError> {
    if file == Path::new("-") {
        read_identifier_stream(io::stdin().lock())
    } else {
        read_identifier_file(file)
    }
}

fn report_summary(report: &BatchReport) {
    log::info!(
        "Batch lookup complete: {}",
        report
            .summary()
            .if_supports_color(Stdout, |t| if report.all_found() {
                t.green().to_string()
            } else {
                t.yellow().to_string()
            }),
    );
    if report.duplicate_count() > 0 {
        log::info!(
            "  {} duplicate line(s) ignored",
            report.duplicate_count()
        );
    }
    if !report.missing.is_empty() {
        log::warn!("Not found: {}", report.missing.join(", "));
    }
}

/// Print missing identifiers one per line on stdout, for piping.
fn print_missing(report: &BatchReport) -> Result<(), CliError> {
    log::info!("{}", report.summary());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for id in &report.missing {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}
