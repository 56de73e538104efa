//! Logger setup for the CLI and tests.

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

fn builder(verbose: bool) -> Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));
    builder.format_timestamp_millis();
    builder
}

/// Initializes the global logger.
///
/// `verbose` lowers the default level from info to debug; `RUST_LOG`
/// overrides both. Per-step velocity traces are logged at trace level.
pub fn init(verbose: bool) {
    // `try_init` only fails when a logger is already installed, which lets
    // tests and embedding apps call this more than once.
    if builder(verbose).try_init().is_err() {
        debug!("logger already installed");
    }
}

/// Initializes a debug logger that writes through the test harness capture.
pub fn init_for_tests() {
    if builder(true).is_test(true).try_init().is_err() {
        debug!("logger already installed");
    }
}
