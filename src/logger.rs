//! Logger initialization.

use log::LevelFilter;

/// Initializes the global logger. Verbose mode raises the filter to `Debug`
/// so per-file progress shows up; otherwise only summary and warning lines
/// are printed.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .format_target(false)
        .init();
}
