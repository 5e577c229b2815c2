use std::env;
use thiserror::Error;

/// Errors raised while reading the database configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable not set")]
    MissingUrl,
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Storage engines the CLI can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Engine selected by the URL scheme
    pub backend: Backend,
}

impl DatabaseConfig {
    /// Load database configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingUrl)?;
        Self::from_url(url)
    }

    pub fn from_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();

        let backend = match scheme.as_str() {
            "postgres" | "postgresql" => Backend::Postgres,
            "sqlite" => Backend::Sqlite,
            _ => return Err(ConfigError::UnsupportedScheme(scheme)),
        };

        Ok(Self { url, backend })
    }

    /// URL with any password replaced, safe to log
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let Some((credentials, host)) = rest.rsplit_once('@') else {
            return self.url.clone();
        };

        match credentials.split_once(':') {
            Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
            None => self.url.clone(),
        }
    }
}
