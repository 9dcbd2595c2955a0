//! Error handling utilities

use crate::error::Error;
use crate::workflow::SaveError;
use tracing::error;

const GENERAL_ERROR: i32 = 1;
const CONFIG_ERROR: i32 = 2;
const SAVE_REJECTED: i32 = 3;

/// Exit code for a fatal error
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Config(_) | Error::Toml(_) | Error::Url(_)) => CONFIG_ERROR,
        Some(Error::Save(SaveError::Rejected { .. })) => SAVE_REJECTED,
        _ => GENERAL_ERROR,
    }
}

/// Report a fatal error and exit
///
/// - `verbose = 0`: the error message only
/// - `verbose >= 1`: the full error chain as well
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}
