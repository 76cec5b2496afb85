//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. All of
//! them read the record store named by the [`CatalogConfig`] they are given.

use climbmate_core::{CatalogConfig, VideoRecord, load_records};

use crate::error::{CliErrorContext, CliResult};

pub mod add_marker;
pub mod filter;
pub mod init_sample;
pub mod list;
pub mod play;

/// Loads the records of the configured store, naming the store on failure.
pub(crate) fn load_store(config: &CatalogConfig) -> CliResult<Vec<VideoRecord>> {
    load_records(&config.store_path)
        .cli_with_context(|| format!("Failed to load {}", config.store_path.display()))
}
