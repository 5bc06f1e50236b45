//! Process-level setup for the `skupair` binary
//!
//! Holds what sits outside a single run: the working directory, verbosity,
//! the tracing subscriber and the mapping from errors to exit codes.

pub mod config;
pub mod error_handling;
pub mod logging;

pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
