use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compound_lookup_lib::display::THRESHOLD_NOTE;
use compound_lookup_lib::{CompoundDetail, ResolvedSettings, StructureImage, detail_fields, resolve_detail};

use crate::CliError;

use super::open_store;

/// Entry point for `detail`.
pub(crate) fn run_detail(settings: &ResolvedSettings, cas: &str) -> Result<(), CliError> {
    let images = settings.image_settings();
    let detail = {
        let conn = open_store(settings)?;
        resolve_detail(&conn, cas, &images)
            .map_err(|e| CliError::database(format!("Lookup failed: {}", e)))?
    };

    match detail {
        Some(d) => print_detail(&d),
        None => log::info!("No compound found with CAS \"{}\".", cas.trim()),
    }
    Ok(())
}

/// Print labelled fields, then the structure image status.
///
/// Image problems are reported here and never fail the command.
pub(crate) fn print_detail(detail: &CompoundDetail) {
    let c = &detail.compound;
    let title = match c.compound_name_en.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => format!("{} ({})", c.cas_number, name),
        None => c.cas_number.clone(),
    };
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));

    for (label, value) in detail_fields(c) {
        log::info!("  {:<22} {}", format!("{label}:"), value);
    }
    log::info!("  {}", THRESHOLD_NOTE.if_supports_color(Stdout, |t| t.dimmed()));

    match &detail.image {
        StructureImage::Found {
            path,
            width,
            height,
        } => {
            log::info!(
                "  {:<22} {} ({}x{})",
                "Structure image:",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                width,
                height,
            );
        }
        StructureImage::NotFound { file_name } => {
            log::info!(
                "  {:<22} {}",
                "Structure image:",
                format!("not available ({file_name})").if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        StructureImage::Unreadable { path, reason } => {
            log::error!(
                "Failed to load structure image {}: {}",
                path.display(),
                reason
            );
        }
    }
}
