//! Optional file sink for the `log` facade.

pub mod setup;

pub use setup::setup_file_logging;
