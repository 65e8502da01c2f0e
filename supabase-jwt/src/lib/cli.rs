use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use auth::RoleType;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use crate::errors::CliError;

#[derive(Parser)]
#[command(
    name = "supabase-jwt",
    version,
    about = "Generate Supabase anon and service_role API keys"
)]
struct Args {
    /// JWT secret of the Supabase project
    #[arg(
        long,
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    secret: String,

    /// Key to generate
    #[arg(
        long = "type",
        value_name = "anon|service",
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    role_type: String,

    /// TOML file overriding the token issuer and lifetime
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Validated command line arguments.
#[derive(Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub secret: String,
    pub role_type: RoleType,
    pub config: Option<PathBuf>,
}

impl ParsedArgs {
    /// Parse an argument list, program name first.
    ///
    /// # Errors
    /// * `Usage` - A required flag or its value is missing, or help/version was requested
    /// * `InvalidType` - `--type` is neither `anon` nor `service`
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        let role_type = args.role_type.parse::<RoleType>()?;

        Ok(Self {
            secret: args.secret,
            role_type,
            config: args.config,
        })
    }
}

impl fmt::Debug for ParsedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedArgs")
            .field("secret", &"<redacted>")
            .field("role_type", &self.role_type)
            .field("config", &self.config)
            .finish()
    }
}
