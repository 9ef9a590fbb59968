use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PREFERENCES_PATH: &str = ".compass/preferences.json";

/// Application configuration loaded from environment variables.
///
/// The generation-service credential is optional: its absence is detected here,
/// at startup, and disables recommendations instead of failing the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub redis_url: Option<String>,
    pub preferences_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            redis_url: optional_env("REDIS_URL"),
            preferences_path: optional_env("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_PATH)),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn recommendations_enabled(&self) -> bool {
        self.google_api_key.is_some()
    }
}

/// Reads an environment variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
