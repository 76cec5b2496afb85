//! Terminal output helpers shared by the commands.
//!
//! Command results go to stdout; errors go to stderr. Styling is dropped
//! automatically when the stream is not a terminal.

use std::fmt::Display;

use climbmate_core::{NoteTimeline, PlaybackState, PlaybackTick, VideoAsset};
use console::style;

/// Print a heading with a separator line underneath
pub fn print_heading(text: &str) {
    println!("{}", style(text).bold());
    println!("{}", style("=".repeat(text.len().max(10))).blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan(), value);
}

pub fn print_success(message: &str) {
    println!("{}", style(message).green());
}

pub fn print_error(message: &str) {
    eprintln!("{}", style(format!("Error: {}", message)).red().bold().for_stderr());
}

/// One listing row: `id | format | route | grade`.
///
/// Records hold exactly one tag; an untagged asset shows `-` for both columns.
pub fn format_video_row(asset: &VideoAsset) -> String {
    let (route, grade) = asset
        .tags
        .iter()
        .next()
        .map(|tag| (tag.route_type().as_str(), tag.grade()))
        .unwrap_or(("-", "-"));
    format!("{} | {} | {} | {}", asset.id, asset.container_format, route, grade)
}

/// One playback line, e.g. `  15s paused  [m1] crux clip`.
pub fn format_tick(tick: &PlaybackTick, timeline: &NoteTimeline) -> String {
    match (&tick.state, tick.marker_id.as_deref()) {
        (PlaybackState::PausedAtMarker, Some(id)) => {
            let text = timeline
                .markers()
                .iter()
                .find(|marker| marker.id() == id)
                .map(|marker| marker.text())
                .unwrap_or_default();
            format!("{:>4}s paused  [{}] {}", tick.current_second, id, text)
        }
        _ => format!("{:>4}s {}", tick.current_second, tick.state),
    }
}
