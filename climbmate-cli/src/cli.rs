// climbmate-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use climbmate_core::{Platform, PlaybackMode, RouteType};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ClimbMate: climbing video catalog",
    long_about = "Tags climbing videos with route type and grade, filters them by tag and date, \
                  and steps through note markers the way the player would."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON store holding the video records (defaults to CLIMBMATE_STORE or data/videos.json)
    #[arg(long, global = true, value_name = "STORE_PATH")]
    pub file: Option<PathBuf>,

    /// Platform profile used for compatibility checks: ios or windows
    #[arg(long, global = true, value_name = "PLATFORM")]
    pub platform: Option<Platform>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable detailed logging output")]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes two sample videos to the store
    InitSample,

    /// Lists every stored video
    List,

    /// Prints the ids of videos matching a tag and/or date range
    Filter(FilterArgs),

    /// Appends a note marker to a video
    AddMarker(AddMarkerArgs),

    /// Simulates playback of a video, printing every tick
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Route type of the tag to match (sport or bouldering)
    #[arg(long, requires = "grade", value_name = "ROUTE_TYPE")]
    pub route: Option<RouteType>,

    /// Grade of the tag to match, e.g. 5.10a or V4
    #[arg(long, requires = "route", value_name = "GRADE")]
    pub grade: Option<String>,

    /// Earliest creation day, YYYY-MM-DD (UTC, inclusive)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Latest creation day, YYYY-MM-DD (UTC, inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AddMarkerArgs {
    /// Video to annotate
    #[arg(long, value_name = "VIDEO_ID")]
    pub id: String,

    /// Position of the marker in seconds (negative values clamp to 0)
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub at: i64,

    /// Note text
    #[arg(long)]
    pub text: String,

    /// Marker id (defaults to m<N+1> for a video with N markers)
    #[arg(long, value_name = "MARKER_ID")]
    pub marker_id: Option<String>,

    /// Optional image attached to the note
    #[arg(long, value_name = "PATH")]
    pub image: Option<String>,
}

#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Video to play
    #[arg(long, value_name = "VIDEO_ID")]
    pub id: String,

    /// linear or pause-on-marker
    #[arg(long, default_value_t = PlaybackMode::PauseOnMarker)]
    pub mode: PlaybackMode,

    /// Second to seek to before playing
    #[arg(long, default_value_t = 0, value_name = "SECONDS", allow_negative_numbers = true)]
    pub start: i64,

    /// Seconds covered by each cursor movement
    #[arg(long, default_value_t = 5, value_name = "SECONDS", value_parser = clap::value_parser!(i64).range(1..))]
    pub step: i64,

    /// Stop at this second (defaults to the last marker plus one step)
    #[arg(long, value_name = "SECONDS")]
    pub until: Option<i64>,
}
