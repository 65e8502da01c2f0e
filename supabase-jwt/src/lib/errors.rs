use std::io;
use std::io::Write;

use auth::JwtError;
use auth::RoleTypeError;
use config::ConfigError;
use thiserror::Error;

/// Exit status for a completed run or for `--help`/`--version`.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for every failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that end a CLI invocation.
///
/// Every variant is terminal: nothing is written to the output stream and the
/// process exits non-zero (except `--help`/`--version`, see `is_informational`).
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing flag, missing value, or `--help`/`--version` output.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Invalid --type: must be 'anon' or 'service'")]
    InvalidType(#[from] RoleTypeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Failed to write token: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// True for `--help` and `--version`, which are requested output rather than failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, CliError::Usage(e) if !e.use_stderr())
    }

    /// Print the error and return the process exit status.
    ///
    /// Help and version text go to `stdout`, everything else to `stderr`.
    /// A failed write is itself a failure, even for help output.
    pub fn report<O: Write, E: Write>(&self, stdout: &mut O, stderr: &mut E) -> u8 {
        let written = match self {
            CliError::Usage(e) if !e.use_stderr() => write!(stdout, "{}", e),
            CliError::Usage(e) => write!(stderr, "{}", e),
            other => writeln!(stderr, "{}", other),
        };

        match written {
            Ok(()) if self.is_informational() => EXIT_SUCCESS,
            Ok(()) => EXIT_FAILURE,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to report error");
                EXIT_FAILURE
            }
        }
    }
}
