use climbmate_core::CatalogConfig;
use log::debug;

use super::load_store;
use crate::cli::PlayArgs;
use crate::error::CliResult;
use crate::output::{format_tick, print_heading};

/// Execute the play command.
///
/// Drives the controller the way a player would: seek to `start`, then move
/// the cursor one `step` at a time. Each movement covers the seconds not yet
/// checked, so a window never re-checks the second the previous one ended on.
/// A pause is printed, resumed in place, and playback continues from the
/// second after the marker.
pub fn run_play(config: &CatalogConfig, args: PlayArgs) -> CliResult<()> {
    let records = load_store(config)?;
    let mut controller = config
        .service()
        .playback_controller(&records, &args.id, args.mode)?;

    let timeline = controller.timeline().clone();
    let until = args.until.unwrap_or_else(|| {
        timeline
            .markers()
            .last()
            .map_or(args.start, |marker| marker.at_second())
            .saturating_add(args.step)
    });

    print_heading(&format!("Playing {} ({})", args.id, controller.mode()));

    let tick = controller.seek(args.start);
    println!("{}", format_tick(&tick, &timeline));

    let mut position = tick.current_second;
    let mut unchecked = position;
    while unchecked <= until {
        let target = position.saturating_add(args.step).min(until).max(unchecked);
        let tick = controller.advance(unchecked, target);
        println!("{}", format_tick(&tick, &timeline));

        position = match (tick.is_paused(), tick.marker_id.as_deref()) {
            (true, Some(marker_id)) => {
                let resumed =
                    controller.resume(marker_id, tick.current_second, tick.current_second);
                debug!("Resumed after {} at {}s", marker_id, resumed.current_second);
                println!("{}", format_tick(&resumed, &timeline));
                tick.current_second
            }
            _ => target,
        };
        if position >= until {
            break;
        }
        unchecked = position + 1;
    }

    Ok(())
}
