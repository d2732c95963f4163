//! Notifier configuration

use crate::error::{NotifyError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Loopback receiver that applies updates to the backing database
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/update_mysql";

/// Main notifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout; the HTTP client's default applies when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub sheets: HashMap<String, SheetConfig>,
}

/// Sheet-specific overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl NotifierConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| NotifyError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NotifyError::Config(e.to_string()))
    }

    /// Endpoint for a sheet with fallback chain: sheet -> global
    pub fn endpoint_for(&self, sheet_name: &str) -> Result<Url> {
        let endpoint = self
            .sheets
            .get(sheet_name)
            .and_then(|sheet| sheet.endpoint.as_deref())
            .unwrap_or(self.endpoint.as_str());
        parse_endpoint(endpoint)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Check every endpoint parses and the timeout is usable
    pub fn validate(&self) -> Result<()> {
        parse_endpoint(&self.endpoint)?;

        for (sheet_name, sheet_config) in &self.sheets {
            if let Some(endpoint) = &sheet_config.endpoint {
                parse_endpoint(endpoint).map_err(|e| {
                    NotifyError::Config(format!("sheet '{}': {}", sheet_name, e))
                })?;
            }
        }

        if self.timeout_seconds == Some(0) {
            return Err(NotifyError::Config(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
            sheets: HashMap::new(),
        }
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| NotifyError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}
