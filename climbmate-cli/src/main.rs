// climbmate-cli/src/main.rs
//
// Entry point for the ClimbMate command-line interface.
//
// Responsibilities:
// - Parsing user-provided arguments.
// - Setting up logging to stderr or a log file.
// - Building the catalog configuration from flags, environment and defaults.
// - Dispatching to the command implementations.
// - Printing errors and managing the process exit code.

use clap::Parser;
use climbmate::output::print_error;
use climbmate::{
    Cli, CliResult, Commands, logging, run_add_marker, run_filter, run_init_sample, run_list,
    run_play,
};
use climbmate_core::CatalogConfig;
use log::debug;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut config = CatalogConfig::default();
    if let Some(path) = cli.file {
        config = config.with_store_path(path);
    }
    if let Some(platform) = cli.platform {
        config = config.with_platform(platform);
    }
    debug!(
        "Using store {} with platform {}",
        config.store_path.display(),
        config.platform
    );

    match cli.command {
        Commands::InitSample => run_init_sample(&config),
        Commands::List => run_list(&config),
        Commands::Filter(args) => run_filter(&config, args),
        Commands::AddMarker(args) => run_add_marker(&config, args),
        Commands::Play(args) => run_play(&config, args),
    }
}
