//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `SkuPairError`: shows the user message always, the code and source
///   chain in verbose mode
/// - For other errors: shows the error message, and the chain in verbose mode
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    let (message, exit_code) = describe_fatal_error(&error, verbose);
    error!("Fatal error: {}", error);
    eprintln!("{message}");
    std::process::exit(exit_code)
}

/// Message and exit code for a fatal error
pub fn describe_fatal_error(error: &anyhow::Error, verbose: u8) -> (String, i32) {
    use crate::error::SkuPairError;

    if let Some(err) = error.downcast_ref::<SkuPairError>() {
        let mut message = format!("Error: {}", err.user_message());
        if verbose >= 1 {
            message.push_str(&format!("\n\nContext Chain:\n{}", err.developer_message()));
        }
        return (message, err.exit_code());
    }

    let mut message = format!("Error: {error}");
    if verbose >= 1 {
        message.push_str("\n\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            message.push_str(&format!("\n  {}: {}", i, cause));
        }
    }
    (message, 1)
}
