//! Environment configuration
//!
//! All credentials and tunables are read once at startup into an
//! `AppConfig` value that is passed into the services explicitly.
//! Nothing mutates it afterwards; concurrent requests share it read-only.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Together AI model used for post extraction when the request does not
/// override it.
pub const DEFAULT_LLM_MODEL: &str = "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo";

/// Process-wide configuration, built from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the crawl provider's LLM extraction step.
    pub together_api_key: Option<String>,
    /// Credential for the semantic search provider.
    pub exa_api_key: Option<String>,
    /// Default extraction model for the crawl provider.
    pub default_llm_model: String,
    /// Directory for debug HTML artifacts.
    pub debug_dir: PathBuf,
    /// Upper bound on each outbound page fetch.
    pub fetch_timeout: Duration,
    /// Cap on hits requested from each provider.
    pub max_results: usize,
    /// HTTP listen port.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let fetch_timeout_secs: u64 = parse_var("POSTSCOUT_FETCH_TIMEOUT_SECS", 20)?;
        Ok(Self {
            together_api_key: non_empty_var("TOGETHER_API_KEY"),
            exa_api_key: non_empty_var("EXA_API_KEY"),
            default_llm_model: non_empty_var("POSTSCOUT_LLM_MODEL")
                .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            debug_dir: non_empty_var("POSTSCOUT_DEBUG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("debug_html")),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            max_results: parse_var("POSTSCOUT_MAX_RESULTS", 15)?,
            port: parse_var("PORT", 8000)?,
        })
    }
}

/// Read an env var, treating unset and empty identically.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty_var(name) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {}: {}", name, raw)),
        None => Ok(default),
    }
}
