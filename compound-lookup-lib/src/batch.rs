//! Batch input parsing.
//!
//! A batch file is plain UTF-8 text with one identifier per line. Lines are
//! trimmed and blank lines dropped; order and duplicates are kept for the
//! reconciler.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchInputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Batch input is not valid UTF-8 (line {line})")]
    NotUtf8 { line: usize },

    #[error("Batch file must be a .txt file: {}", .0.display())]
    NotText(PathBuf),
}

/// Split text into identifiers: one per line, trimmed, blanks discarded.
pub fn parse_identifier_list(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode raw bytes as UTF-8 and parse them.
pub fn decode_identifier_list(bytes: &[u8]) -> Result<Vec<String>, BatchInputError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(parse_identifier_list(text)),
        Err(e) => {
            let line = bytes[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1;
            Err(BatchInputError::NotUtf8 { line })
        }
    }
}

/// Read identifiers from any reader (e.g. stdin).
pub fn read_identifier_stream<R: Read>(mut reader: R) -> Result<Vec<String>, BatchInputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_identifier_list(&bytes)
}

/// Read identifiers from a `.txt` batch file. Other extensions are refused
/// before the file is opened.
pub fn read_identifier_file(path: &Path) -> Result<Vec<String>, BatchInputError> {
    let is_txt = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(BatchInputError::NotText(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    decode_identifier_list(&bytes)
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
