// resection - replace a marker-delimited section of a text file

pub mod config;
pub mod diff;
pub mod error;
pub mod file;
pub mod utils;

use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

pub use config::{JobLoader, ReplaceJob};
pub use error::{ResectionError, ResectionResult};
pub use file::{replace_section, run_job, JobReport, RunOptions, SectionMarkers, SpliceOutcome};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging on stderr, keeping stdout for status lines
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` when `verbose`
/// and `warn` when not.
pub fn init_with_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resection={default_level}")));

    let result = fmt::Subscriber::builder()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Logger initialization failed: {}", e);
        return;
    }

    debug!("Initializing resection v{}", version());
}
