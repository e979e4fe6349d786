//! Tracing subscriber setup.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Used when the terminal is not taken over by the UI.
    Stderr,
    /// Appends to a file; parent directories are created.
    File(PathBuf),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. If the log file
/// cannot be opened, logging is disabled and the error is returned so
/// the caller can report it. Calling this twice keeps the first
/// subscriber.
pub fn init_tracing(default_level: &str, target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, ansi, result) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true, Ok(())),
        LogTarget::File(path) => match open_append(&path) {
            Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), false, Ok(())),
            Err(err) => (BoxMakeWriter::new(io::sink), false, Err(err)),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();

    result
}

/// Opens `path` for appending, creating it and any missing parent
/// directories.
pub(crate) fn open_append(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_append_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("enthusiasm.log");
        open_append(&path).unwrap();
        assert!(path.exists());
    }
}
