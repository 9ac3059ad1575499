//! Structure image lookup.
//!
//! Images live in one directory and are named after the identifier:
//! `<image dir>/<cas_number>.<extension>`. There is no index; a missing
//! file is an ordinary outcome.

use std::path::{Path, PathBuf};

/// Default structure image extension.
pub const STRUCTURE_IMAGE_EXTENSION: &str = "png";

/// Where structure images are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSettings {
    pub dir: PathBuf,
    pub extension: String,
}

impl ImageSettings {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: STRUCTURE_IMAGE_EXTENSION.to_string(),
        }
    }

    pub fn resolve(&self, cas: &str) -> StructureImage {
        resolve_structure_image(&self.dir, cas, &self.extension)
    }
}

/// Outcome of resolving a compound's structure image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureImage {
    /// The file exists and decoded.
    Found {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// No file for this identifier.
    NotFound { file_name: String },
    /// The file exists but could not be opened or decoded.
    Unreadable { path: PathBuf, reason: String },
}

/// File name for an identifier's structure image.
///
/// Returns `None` when the identifier can't be used as a plain file name
/// (empty, a path separator, NUL, `.` or `..`).
pub fn structure_image_name(cas: &str, extension: &str) -> Option<String> {
    let cas = cas.trim();
    if cas.is_empty() || cas == "." || cas == ".." || cas.contains(['/', '\\', '\0']) {
        return None;
    }
    let extension = extension.trim_start_matches('.');
    Some(format!("{cas}.{extension}"))
}

/// Locate and decode an identifier's structure image. Never fails.
pub fn resolve_structure_image(dir: &Path, cas: &str, extension: &str) -> StructureImage {
    let Some(file_name) = structure_image_name(cas, extension) else {
        log::debug!("Identifier {cas:?} does not map to an image file name");
        return StructureImage::NotFound {
            file_name: format!("{}.{}", cas.trim(), extension.trim_start_matches('.')),
        };
    };

    let path = dir.join(&file_name);
    if !path.is_file() {
        log::debug!("No structure image at {}", path.display());
        return StructureImage::NotFound { file_name };
    }

    match image::open(&path) {
        Ok(img) => StructureImage::Found {
            width: img.width(),
            height: img.height(),
            path,
        },
        Err(e) => StructureImage::Unreadable {
            path,
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "tests/structure_tests.rs"]
mod tests;
