use std::path::PathBuf;

use anyhow::{Context, Result};

/// CLI configuration loaded from environment variables (and `.env` if
/// present). Nothing is required at startup; the Gemini key is checked only
/// by the commands that call the API.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub locale: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            locale: std::env::var("VAGAJA_LOCALE").ok(),
            data_dir: std::env::var("VAGAJA_DATA_DIR").ok().map(PathBuf::from),
            profile_path: std::env::var("VAGAJA_PROFILE_PATH").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .context("Required environment variable 'GEMINI_API_KEY' is not set")
    }
}
