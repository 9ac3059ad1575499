//! compound-lookup CLI
//!
//! Command-line front end for searching a compound database and
//! reconciling batches of CAS numbers against it.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use compound_lookup_lib::{Overrides, resolve_settings};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(
        cli.quiet,
        cli.verbose,
        cli.logfile.as_deref(),
        cli.command.machine_output(),
    ) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let overrides = Overrides {
        database: cli.db,
        image_dir: cli.images,
    };
    let settings = resolve_settings(&overrides);
    log::debug!(
        "database: {} ({})",
        settings.database.value.display(),
        settings.database.source
    );
    log::debug!(
        "images: {} ({})",
        settings.image_dir.value.display(),
        settings.image_dir.source
    );

    let result = match cli.command {
        Commands::Search(args) => commands::search::run_search(&settings, &args),
        Commands::Batch {
            file,
            missing_only,
            output,
        } => commands::batch::run_batch(&settings, &file, missing_only, &output),
        Commands::Detail { cas } => commands::detail::run_detail(&settings, &cas),
        Commands::Stats { categories } => commands::stats::run_stats(&settings, categories),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDb { path } => commands::config::run_config_set_db(&path),
            ConfigAction::SetImages { dir } => commands::config::run_config_set_images(&dir),
            ConfigAction::Clear => commands::config::run_config_clear(),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
