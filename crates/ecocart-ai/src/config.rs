//! Client configuration.
//!
//! The credential is injected once at startup instead of being read
//! from ambient storage by every caller.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AiError, AiResult};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default analysis model (vision + text).
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the Gemini credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for the Gemini client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Gemini API key; `None` leaves the analysis surface disabled.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AiConfig {
    /// Read configuration from the environment only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load from a TOML file, then let the environment override the
    /// credential.
    pub fn load(path: &Path) -> AiResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AiError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let mut config: Self = toml::from_str(&raw)
            .map_err(|e| AiError::Config(format!("invalid config {}: {}", path.display(), e)))?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                self.api_key = Some(key.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AiConfig::default();

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: AiConfig = toml::from_str("api_key = \"test-key\"").unwrap();

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_full_toml() {
        let config: AiConfig = toml::from_str(
            "api_key = \"k\"\nbase_url = \"http://localhost:8080\"\nmodel = \"gemini-pro\"",
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.model, "gemini-pro");
    }
}
