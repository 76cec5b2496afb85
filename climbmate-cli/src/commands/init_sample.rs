use chrono::Utc;
use climbmate_core::{CatalogConfig, save_records};
use log::info;

use crate::error::CliResult;
use crate::output::{print_info, print_success};

/// Execute the init-sample command: overwrite the store with the demo videos.
pub fn run_init_sample(config: &CatalogConfig) -> CliResult<()> {
    let records = config.service().sample_records(Utc::now());
    save_records(&records, &config.store_path)?;
    info!("Initialised store with {} sample videos", records.len());

    print_success(&format!("Wrote {} sample videos", records.len()));
    print_info("Store", config.store_path.display());
    Ok(())
}
