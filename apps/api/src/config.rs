use anyhow::{Context, Result};

use crate::llm_client::GROQ_API_URL;

/// Application configuration loaded from environment variables.
///
/// `groq_api_key` is optional: a missing key keeps the server up but every
/// parse request is answered with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = std::env::var("MAX_UPLOAD_MB").unwrap_or_else(|_| "20".to_string());

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_api_url: optional_env("GROQ_API_URL").unwrap_or_else(|| GROQ_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: parse_upload_limit(&max_upload_mb)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Converts a `MAX_UPLOAD_MB` value to bytes, rejecting values that overflow.
fn parse_upload_limit(megabytes: &str) -> Result<usize> {
    megabytes
        .trim()
        .parse::<usize>()
        .context("MAX_UPLOAD_MB must be a whole number of megabytes")?
        .checked_mul(1024 * 1024)
        .context("MAX_UPLOAD_MB is too large")
}
