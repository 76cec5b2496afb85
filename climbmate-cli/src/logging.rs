// ============================================================================
// climbmate-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console or file logging for the CLI
//
// Console logging goes through `env_logger` on stderr so stdout stays clean
// for command output. RUST_LOG overrides the level picked from --verbose.
// With --log-file, climbmate-core's log4rs file appender is used instead.

use climbmate_core::CoreError;
use climbmate_core::file_logging::setup_file_logging;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::error::CliResult;

/// Level used when no RUST_LOG override is present.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. Call once, before any command runs.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> CliResult<()> {
    let level = default_level(verbose);

    match log_file {
        Some(path) => {
            let path = resolve_log_path(path);
            setup_file_logging(&path, level).map_err(|e| {
                CoreError::OperationFailed(format!(
                    "Failed to set up log file {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        None => {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(level.as_str()),
            )
            .format_timestamp(None)
            .init();
            Ok(())
        }
    }
}

/// An existing directory gets a fresh timestamped log file inside it.
pub fn resolve_log_path(log_file: &Path) -> PathBuf {
    if log_file.is_dir() {
        log_file.join(format!("climbmate_{}.log", get_timestamp()))
    } else {
        log_file.to_path_buf()
    }
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
