//! Logger setup.
//!
//! All user-facing text goes through the `log` macros. Info lines print
//! bare, warnings and errors get a colored prefix, and `--verbose` adds
//! timestamps and debug output. With `--logfile` every line is also
//! appended to a file with ANSI codes stripped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream;

use crate::CliError;

/// Console stream plus an optional plain-text copy.
struct LogSink {
    to_stderr: bool,
    file: Option<File>,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.to_stderr {
            io::stderr().write_all(buf)?;
        } else {
            io::stdout().write_all(buf)?;
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.to_stderr {
            io::stderr().flush()?;
        } else {
            io::stdout().flush()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger.
///
/// `to_stderr` keeps stdout clean when a command writes JSON/CSV there.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
    to_stderr: bool,
) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::config(format!("Cannot open log file {}: {}", path.display(), e))
                })?,
        ),
        None => None,
    };

    let stream = if to_stderr { Stream::Stderr } else { Stream::Stdout };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                let ts = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
                write!(buf, "{} ", ts.if_supports_color(stream, |t| t.dimmed()))?;
            }
            match record.level() {
                Level::Error => write!(buf, "{} ", "error:".if_supports_color(stream, |t| t.red()))?,
                Level::Warn => {
                    write!(buf, "{} ", "warning:".if_supports_color(stream, |t| t.yellow()))?
                }
                Level::Debug | Level::Trace => {
                    write!(buf, "{} ", "debug:".if_supports_color(stream, |t| t.dimmed()))?
                }
                Level::Info => {}
            }
            writeln!(buf, "{}", record.args())
        })
        .target(env_logger::Target::Pipe(Box::new(LogSink { to_stderr, file })));

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Failed to initialize logging: {e}")))
}
