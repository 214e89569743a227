//! Tracing subscriber setup.
//!
//! Filtering comes from `LOOKAHEAD_LOG` (same syntax as `RUST_LOG`) and
//! defaults to warnings only. Command-line invocations write to stderr. The
//! terminal UI owns the screen, so it writes to `lookahead.log` in the data
//! directory instead.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{LookaheadError, Result};

pub const LOG_ENV: &str = "LOOKAHEAD_LOG";

const LOG_FILE: &str = "lookahead.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr. Safe to call more than once.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Path of the log file used while the terminal UI is running
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "lookahead").ok_or_else(|| {
        LookaheadError::Config("cannot determine data directory".to_string())
    })?;
    Ok(dirs.data_dir().join(LOG_FILE))
}

/// Log to a file, returning its path.
pub fn init_file() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_data_dir() {
        if let Ok(path) = log_file_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE));
        }
    }
}
