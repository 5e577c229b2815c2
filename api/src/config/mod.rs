// Configuration management from environment variables

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

/// Configuration settings for the hashlots API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // Server configuration
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,

    // Database configuration
    pub database_url: String,
    pub db_pool_max: u32,
    pub db_pool_min: u32,
    pub run_migrations: bool,
}

impl ApiConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 8001);
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30);
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://crypto_finance.db?mode=rwc".to_string());
        let db_pool_max = parse_var("DB_POOL_MAX", 10);
        let db_pool_min = parse_var("DB_POOL_MIN", 1);
        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            host,
            port,
            request_timeout_secs,
            cors_allowed_origins,
            database_url,
            db_pool_max,
            db_pool_min,
            run_migrations,
        }
    }

    /// Configuration for tests and tooling pointed at an explicit database
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            cors_allowed_origins: vec!["*".to_string()],
            database_url: database_url.into(),
            db_pool_max: 1,
            db_pool_min: 1,
            run_migrations: true,
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
