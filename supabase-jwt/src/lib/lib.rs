//! Command line front end for the `auth` key signer.
//!
//! `run` is the whole program minus process setup, so tests can drive it with
//! an argument list, a fixed clock, and an in-memory output buffer.

pub mod cli;
pub mod config;
pub mod errors;

use std::ffi::OsString;
use std::io::Write;

use auth::Clock;
use auth::TokenIssuer;

pub use crate::cli::ParsedArgs;
pub use crate::config::Config;
pub use crate::errors::CliError;

/// Parse `args`, issue one token, and write it as a single line to `out`.
///
/// Nothing is written to `out` unless a complete token was produced.
///
/// # Errors
/// See `CliError`; each variant maps to a distinct message on stderr.
pub fn run<I, T, C, W>(args: I, clock: C, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: Clock,
    W: Write,
{
    let args = ParsedArgs::try_parse_from(args)?;
    tracing::debug!(role_type = %args.role_type, "Arguments parsed");

    let config = Config::load(args.config.as_deref())?;
    tracing::debug!(
        issuer = %config.token.issuer,
        ttl_seconds = config.token.ttl_seconds,
        "Configuration loaded"
    );

    let issuer = TokenIssuer::new(args.secret.as_bytes(), clock)?
        .with_issuer(&config.token.issuer)
        .with_ttl(config.token.ttl_seconds);
    let token = issuer.issue(args.role_type)?;

    writeln!(out, "{}", token)?;
    out.flush()?;

    Ok(())
}
