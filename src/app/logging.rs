//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only carries the run summary.

use crate::app::config::AppConfig;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber; call once, before the run starts
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::new(config.log_level());
    let detailed = config.verbose >= 3;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2)
        .with_thread_ids(detailed)
        .with_line_number(detailed)
        .init();

    debug!(verbose = config.verbose, working_dir = %config.working_dir.display(), "skupair starting");
    trace!(args = ?std::env::args().collect::<Vec<_>>(), "command line");
}
