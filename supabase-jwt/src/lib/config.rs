use std::path::Path;

use auth::jwt::claims::DEFAULT_ISSUER;
use auth::jwt::claims::TEN_YEARS_SECONDS;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub issuer: String,
    pub ttl_seconds: i64,
}

impl Config {
    /// Load configuration from built-in defaults and an optional TOML file.
    ///
    /// Priority (highest to lowest):
    /// 1. The file passed with `--config`, if any
    /// 2. Defaults (`token.issuer = "supabase"`, `token.ttl_seconds = 315360000`)
    ///
    /// No file is read unless one is named, and the environment is not consulted.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("token.issuer", DEFAULT_ISSUER)?
            .set_default("token.ttl_seconds", TEN_YEARS_SECONDS)?;

        if let Some(path) = path {
            builder = builder
                .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true));
        }

        let config: Config = builder.build()?.try_deserialize()?;

        if config.token.ttl_seconds <= 0 {
            return Err(ConfigError::Message(format!(
                "token.ttl_seconds must be positive, got {}",
                config.token.ttl_seconds
            )));
        }
        if config.token.issuer.is_empty() {
            return Err(ConfigError::Message(
                "token.issuer must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: TokenConfig {
                issuer: DEFAULT_ISSUER.to_string(),
                ttl_seconds: TEN_YEARS_SECONDS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_defaults_without_file() {
        let config = Config::load(None).expect("Failed to load config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = config_file("[token]\nissuer = \"local\"\nttl_seconds = 3600\n");
        let config = Config::load(Some(file.path())).expect("Failed to load config");

        assert_eq!(config.token.issuer, "local");
        assert_eq!(config.token.ttl_seconds, 3600);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = config_file("[token]\nttl_seconds = 60\n");
        let config = Config::load(Some(file.path())).expect("Failed to load config");

        assert_eq!(config.token.issuer, "supabase");
        assert_eq!(config.token.ttl_seconds, 60);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/supabase-jwt.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_ttl_is_error() {
        let file = config_file("[token]\nttl_seconds = 0\n");
        assert!(Config::load(Some(file.path())).is_err());
    }
}
