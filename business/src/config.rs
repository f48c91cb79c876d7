use audit_states::{SnapshotClone, State, state_assign_impl};
use serde::Deserialize;
use std::any::Any;
use thiserror::Error;
use ustr::Ustr;

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
}

/// Environment variables understood by [`BusinessConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Reads `API_BASE_URL`, falling back to the default base URL when unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let config = match raw.api_base_url {
            Some(url) if !url.trim().is_empty() => {
                log::info!("Using API_BASE_URL={url}");
                Self::new(url.trim())
            }
            _ => {
                log::info!("API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                Self::default()
            }
        };
        Ok(config)
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl SnapshotClone for BusinessConfig {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn api_url_appends_api_segment() {
        let config = BusinessConfig::new("https://audit.example.com/");
        assert_eq!(config.api_base_url, "https://audit.example.com");
        assert_eq!(config.api_url(), Ustr::from("https://audit.example.com/api"));
    }

    #[test]
    fn empty_base_url_is_relative() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }

    #[test]
    fn from_vars_reads_api_base_url() {
        let config = BusinessConfig::from_vars(vars(&[("API_BASE_URL", "http://10.0.0.2:8080")]))
            .expect("config should deserialize");
        assert_eq!(config.api_base_url, "http://10.0.0.2:8080");
    }

    #[test]
    fn from_vars_defaults_when_missing_or_blank() {
        let missing = BusinessConfig::from_vars(vars(&[("HOME", "/root")]))
            .expect("config should deserialize");
        let blank = BusinessConfig::from_vars(vars(&[("API_BASE_URL", "  ")]))
            .expect("config should deserialize");

        assert_eq!(missing, BusinessConfig::default());
        assert_eq!(blank, BusinessConfig::default());
    }
}
