use climbmate_core::CatalogConfig;

use super::load_store;
use crate::error::CliResult;
use crate::output::format_video_row;

/// Execute the list command.
pub fn run_list(config: &CatalogConfig) -> CliResult<()> {
    let records = load_store(config)?;
    let assets = config.service().list_assets(&records)?;

    if assets.is_empty() {
        println!("No videos found.");
        return Ok(());
    }
    for asset in &assets {
        println!("{}", format_video_row(asset));
    }
    Ok(())
}
