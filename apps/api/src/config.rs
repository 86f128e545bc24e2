use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if the Gemini API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub llm_timeout: Duration,
    /// Overrides the built-in scholarship dataset when set.
    pub scholarships_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_any_env(&["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"])?,
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_endpoint: optional_env("GEMINI_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            llm_timeout: Duration::from_secs(
                optional_env("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "15".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            scholarships_path: optional_env("SCHOLARSHIPS_PATH").map(PathBuf::from),
            port: optional_env("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// First non-empty value among `keys`, in order.
fn require_any_env(keys: &[&str]) -> Result<String> {
    keys.iter()
        .find_map(|key| optional_env(key))
        .with_context(|| {
            format!(
                "Required environment variable '{}' is not set",
                keys.join("' or '")
            )
        })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
