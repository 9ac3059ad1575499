use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use compound_lookup_lib::ResolvedSettings;
use compound_lookup_lib::settings::{load_settings_string, save_setting, settings_path};

use crate::CliError;

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(settings: &ResolvedSettings) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "compound-lookup Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let rows = [
        (
            "database",
            settings.database.value.display().to_string(),
            settings.database.source.to_string(),
        ),
        (
            "images",
            settings.image_dir.value.display().to_string(),
            settings.image_dir.source.to_string(),
        ),
        (
            "extension",
            settings.image_extension.value.clone(),
            settings.image_extension.source.to_string(),
        ),
    ];
    for (name, value, source) in rows {
        log::info!(
            "  {:<10} {} {}",
            name,
            value,
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if !settings.database.value.is_file() {
        crate::log_blank();
        log::warn!(
            "Database file {} does not exist",
            settings.database.value.display()
        );
    }

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_db(path: &Path) -> Result<(), CliError> {
    let path = absolute(path)?;
    if !path.is_file() {
        log::warn!("{} does not exist yet", path.display());
    }
    save_value("database", "path", Some(&path.to_string_lossy()))
}

pub(crate) fn run_config_set_images(dir: &Path) -> Result<(), CliError> {
    let dir = absolute(dir)?;
    if !dir.is_dir() {
        log::warn!("{} is not a directory", dir.display());
    }
    save_value("images", "dir", Some(&dir.to_string_lossy()))
}

/// Remove saved paths, leaving any other settings in place.
pub(crate) fn run_config_clear() -> Result<(), CliError> {
    save_value("database", "path", None)?;
    save_value("images", "dir", None)
}

fn save_value(section: &str, key: &str, value: Option<&str>) -> Result<(), CliError> {
    let saved = save_setting(section, key, value)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    match value {
        Some(v) => log::info!("Saved {section}.{key} = {v} to {}", saved.display()),
        None => log::info!("Cleared {section}.{key} in {}", saved.display()),
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<std::path::PathBuf, CliError> {
    std::path::absolute(path)
        .map_err(|e| CliError::config(format!("Cannot resolve {}: {}", path.display(), e)))
}
