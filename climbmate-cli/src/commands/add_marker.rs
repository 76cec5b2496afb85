use climbmate_core::{CatalogConfig, NoteMarker, save_records};

use super::load_store;
use crate::cli::AddMarkerArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::print_success;

/// Execute the add-marker command and persist the result.
pub fn run_add_marker(config: &CatalogConfig, args: AddMarkerArgs) -> CliResult<()> {
    let service = config.service();
    let records = load_store(config)?;

    let marker_id = match args.marker_id {
        Some(id) => id,
        None => service.next_marker_id(&records, &args.id)?,
    };
    let marker = NoteMarker::new(marker_id, args.at, args.text, args.image);
    let message = format!(
        "Added marker {} at {}s to {}",
        marker.id(),
        marker.at_second(),
        args.id
    );

    let records = service.add_marker(records, &args.id, marker)?;
    save_records(&records, &config.store_path)
        .cli_with_context(|| format!("Failed to save {}", config.store_path.display()))?;

    print_success(&message);
    Ok(())
}
