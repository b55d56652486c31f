//! Build-time Configuration
//!
//! A WASM bundle has no process environment, so settings are baked in at
//! compile time with `option_env!`.

use log::LevelFilter;

/// Fallback API address for local development
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Menu API settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read `MENU_API_URL`, falling back to [`DEFAULT_API_URL`]
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("MENU_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

/// Console log level from `MENU_LOG_LEVEL` (default `info`)
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("MENU_LOG_LEVEL").unwrap_or("info"))
}

fn parse_level(s: &str) -> LevelFilter {
    s.trim().parse().unwrap_or(LevelFilter::Info)
}
