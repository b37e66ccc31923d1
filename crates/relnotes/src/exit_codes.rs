//! Exit codes for the CLI

use clap::error::ErrorKind;
use relnotes_core::{ChangelogError, ConfigError, RelnotesError};

use crate::cli::UsageError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error (unreadable changelog, I/O failures)
pub const ERROR: u8 = 1;

/// Missing or malformed command-line arguments
pub const USAGE_ERROR: u8 = 1;

/// The changelog has no section for the requested version
pub const VERSION_NOT_FOUND: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Map a command failure to the process exit code
pub fn from_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if cause.downcast_ref::<UsageError>().is_some() {
            return USAGE_ERROR;
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return CONFIG_ERROR;
        }
        match cause.downcast_ref::<RelnotesError>() {
            Some(RelnotesError::Config(_)) => return CONFIG_ERROR,
            Some(RelnotesError::Changelog(e)) => return changelog_code(e),
            _ => {}
        }
        if let Some(e) = cause.downcast_ref::<ChangelogError>() {
            return changelog_code(e);
        }
    }
    ERROR
}

/// Map a command-line parse failure to the process exit code.
///
/// Help and version requests succeed; every other parse error is a usage error.
pub fn from_parse_error(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => SUCCESS,
        _ => USAGE_ERROR,
    }
}

fn changelog_code(err: &ChangelogError) -> u8 {
    if err.is_not_found() {
        VERSION_NOT_FOUND
    } else {
        ERROR
    }
}
