//! Client configuration.
//!
//! Values come from the build environment (`option_env!`) rather than the
//! process environment because the web build has no environment at runtime.

use dioxus_logger::tracing::Level;

use crate::client::error::config::ConfigError;

pub static API_URL_VAR: &str = "COFFEEBOOK_API_URL";
pub static LOG_LEVEL_VAR: &str = "COFFEEBOOK_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the REST API, empty for same-origin requests
    pub api_url: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Builds the configuration from variables captured at compile time.
    ///
    /// # Returns
    /// - `Ok(Config)` - Unset variables fall back to their defaults
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("COFFEEBOOK_API_URL"), option_env!("COFFEEBOOK_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = match api_url {
            Some(url) => parse_api_url(url)?,
            None => String::new(),
        };

        let log_level = match log_level {
            Some(level) => level
                .trim()
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: LOG_LEVEL_VAR.to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self { api_url, log_level })
    }

    /// Resolves an API path such as `/notes/3` against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn parse_api_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim().trim_end_matches('/');

    if url.is_empty() {
        return Ok(String::new());
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: API_URL_VAR.to_string(),
            reason: format!("'{}' must start with http:// or https://", url),
        });
    }

    Ok(url.to_string())
}
