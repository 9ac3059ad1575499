//! Settings resolution (database path, structure image directory).
//!
//! The settings file lives at `~/.config/compound-lookup/settings.toml`.
//! Each value is resolved through a priority chain:
//!
//! 1. Command-line flag
//! 2. Environment variable
//! 3. Settings file
//! 4. Built-in default, relative to the current directory

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::structure::{ImageSettings, STRUCTURE_IMAGE_EXTENSION};

pub const DB_ENV: &str = "COMPOUND_LOOKUP_DB";
pub const IMAGES_ENV: &str = "COMPOUND_LOOKUP_IMAGES";
pub const DEFAULT_DB_PATH: &str = "compounds.db";
pub const DEFAULT_IMAGE_DIR: &str = "img";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Malformed(String),
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("compound-lookup").join("settings.toml")
}

/// On-disk settings layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub database: Option<DatabaseSection>,
    #[serde(default)]
    pub images: Option<ImagesSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesSection {
    pub dir: Option<String>,
    pub extension: Option<String>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    CommandLine,
    EnvVar(&'static str),
    SettingsFile,
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: SettingSource,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub database: Resolved<PathBuf>,
    pub image_dir: Resolved<PathBuf>,
    pub image_extension: Resolved<String>,
}

impl ResolvedSettings {
    pub fn image_settings(&self) -> ImageSettings {
        ImageSettings {
            dir: self.image_dir.value.clone(),
            extension: self.image_extension.value.clone(),
        }
    }
}

/// Resolve settings from flags, the process environment, and the settings file.
pub fn resolve_settings(overrides: &Overrides) -> ResolvedSettings {
    let file = load_settings_file(&settings_path());
    resolve_with(overrides, |var| std::env::var(var).ok(), file.as_ref())
}

/// Resolve settings from explicit sources.
pub fn resolve_with<E>(
    overrides: &Overrides,
    env: E,
    file: Option<&SettingsFile>,
) -> ResolvedSettings
where
    E: Fn(&str) -> Option<String>,
{
    let env_value = |var: &str| env(var).filter(|v| !v.trim().is_empty());
    let file_db = file
        .and_then(|f| f.database.as_ref())
        .and_then(|d| d.path.clone())
        .filter(|p| !p.trim().is_empty());
    let file_images = file.and_then(|f| f.images.as_ref());
    let file_dir = file_images
        .and_then(|i| i.dir.clone())
        .filter(|d| !d.trim().is_empty());
    let file_ext = file_images
        .and_then(|i| i.extension.clone())
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty());

    let database = resolve_path(
        overrides.database.clone(),
        DB_ENV,
        env_value(DB_ENV),
        file_db,
        DEFAULT_DB_PATH,
    );
    let image_dir = resolve_path(
        overrides.image_dir.clone(),
        IMAGES_ENV,
        env_value(IMAGES_ENV),
        file_dir,
        DEFAULT_IMAGE_DIR,
    );
    let image_extension = match file_ext {
        Some(value) => Resolved {
            value,
            source: SettingSource::SettingsFile,
        },
        None => Resolved {
            value: STRUCTURE_IMAGE_EXTENSION.to_string(),
            source: SettingSource::Default,
        },
    };

    ResolvedSettings {
        database,
        image_dir,
        image_extension,
    }
}

fn resolve_path(
    flag: Option<PathBuf>,
    var: &'static str,
    env: Option<String>,
    file: Option<String>,
    default: &str,
) -> Resolved<PathBuf> {
    if let Some(value) = flag {
        return Resolved {
            value,
            source: SettingSource::CommandLine,
        };
    }
    if let Some(value) = env {
        return Resolved {
            value: PathBuf::from(value),
            source: SettingSource::EnvVar(var),
        };
    }
    if let Some(value) = file {
        return Resolved {
            value: PathBuf::from(value),
            source: SettingSource::SettingsFile,
        };
    }
    Resolved {
        value: PathBuf::from(default),
        source: SettingSource::Default,
    }
}

/// Parse the settings file. A missing file is `None`; a malformed one is
/// logged and ignored.
pub fn load_settings_file(path: &Path) -> Option<SettingsFile> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&contents) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
            None
        }
    }
}

/// Set (or with `None`, clear) one `[section] key` in the settings file.
pub fn save_setting(section: &str, key: &str, value: Option<&str>) -> Result<PathBuf, SettingsError> {
    let path = settings_path();
    save_setting_at(&path, section, key, value)?;
    Ok(path)
}

/// Like [`save_setting`], against an explicit file.
///
/// Uses `toml::Value` for a surgical update so unrelated keys survive.
pub fn save_setting_at(
    path: &Path,
    section: &str,
    key: &str,
    value: Option<&str>,
) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse().map_err(|e: toml::de::Error| {
            SettingsError::Malformed(format!("{}: {}", path.display(), e.message()))
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e.into()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::Malformed("settings root is not a table".to_string()))?;
    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = entry
        .as_table_mut()
        .ok_or_else(|| SettingsError::Malformed(format!("[{section}] is not a table")))?;

    match value {
        Some(v) => {
            section_table.insert(key.to_string(), toml::Value::String(v.to_string()));
        }
        None => {
            section_table.remove(key);
        }
    }

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// The settings file pretty-printed for display, if it exists and parses.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
