// climbmate-cli/src/lib.rs
//
// Library portion of the ClimbMate CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{AddMarkerArgs, Cli, Commands, FilterArgs, PlayArgs};
pub use commands::add_marker::run_add_marker;
pub use commands::filter::run_filter;
pub use commands::init_sample::run_init_sample;
pub use commands::list::run_list;
pub use commands::play::run_play;
pub use error::{CliErrorContext, CliResult};
