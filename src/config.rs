//! Client configuration fixed at build time.
//!
//! The browser bundle has no process environment, so the API origin is baked
//! in from `PARKING_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://192.168.215.2:5000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,
    #[error("API base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin every API path is joined onto, without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `PARKING_API_BASE_URL`: default `http://192.168.215.2:5000`
    ///
    /// An unusable value falls back to the default.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("PARKING_API_BASE_URL")).unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring PARKING_API_BASE_URL: {e}");
            Self::default()
        })
    }

    /// Build config from an optional raw base URL; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is blank or not http(s).
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            None => Ok(Self::default()),
            Some(raw) => Ok(Self { api_base_url: parse_base_url(raw)? }),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}
