use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compound_lookup_lib::ResolvedSettings;

use crate::CliError;

use super::open_store;

/// Entry point for `stats`.
pub(crate) fn run_stats(settings: &ResolvedSettings, categories: bool) -> Result<(), CliError> {
    let (stats, category_counts) = {
        let conn = open_store(settings)?;
        let stats = compound_lookup_db::catalog_stats(&conn)
            .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;
        let category_counts = if categories {
            compound_lookup_db::list_categories(&conn)
                .map_err(|e| CliError::database(format!("Failed to list categories: {}", e)))?
        } else {
            Vec::new()
        };
        (stats, category_counts)
    };

    log::info!(
        "{}",
        "Compound Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", settings.database.value.display());
    crate::log_blank();
    log::info!("  Compounds:      {:>8}", stats.compounds);
    log::info!("  Aromatic:       {:>8}", stats.aromatic);
    log::info!("  Not aromatic:   {:>8}", stats.not_aromatic);
    log::info!("  Categories:     {:>8}", stats.categories);

    if categories {
        crate::log_blank();
        for (name, count) in &category_counts {
            log::info!("  {:<30} {:>6}", name, count);
        }
    }

    Ok(())
}
