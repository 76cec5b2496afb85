use climbmate_core::{CatalogConfig, parse_day_end, parse_day_start};
use log::debug;

use super::load_store;
use crate::cli::FilterArgs;
use crate::error::CliResult;

/// Execute the filter command.
///
/// `--from` and `--to` name whole UTC days, so a video created at any time on
/// the `--to` day still matches.
pub fn run_filter(config: &CatalogConfig, args: FilterArgs) -> CliResult<()> {
    let start = args.from.as_deref().map(parse_day_start).transpose()?;
    let end = args.to.as_deref().map(parse_day_end).transpose()?;
    let route_grade = args.route.zip(args.grade.as_deref());
    debug!(
        "Filtering on tag {:?} between {:?} and {:?}",
        route_grade, start, end
    );

    let records = load_store(config)?;
    let matched = config
        .service()
        .filter_assets(&records, route_grade, start, end)?;

    if matched.is_empty() {
        println!("No matched videos.");
        return Ok(());
    }
    for asset in &matched {
        println!("{}", asset.id);
    }
    Ok(())
}
