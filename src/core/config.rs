//! Runtime configuration, read once from the environment at startup.

use std::env;

/// Production search host, used when `OLLAMA_BASE_URL` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "https://ollama.com";

/// Non-empty value enables debug logging for this crate.
pub const DEBUG_VAR: &str = "OLLAMASEARCHDEBUG";

/// Overrides the search host (e.g. a local mirror or a test server).
pub const BASE_URL_VAR: &str = "OLLAMA_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub debug: bool,
}

impl Config {
    /// Build a config from raw variable values, applying defaults.
    pub fn from_vars(debug: Option<&str>, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        Self {
            base_url,
            debug: debug.is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Load configuration from the process environment.
pub fn load() -> Config {
    let debug = env::var(DEBUG_VAR).ok();
    let base_url = env::var(BASE_URL_VAR).ok();
    Config::from_vars(debug.as_deref(), base_url.as_deref())
}
