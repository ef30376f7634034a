//! Runtime configuration.
//!
//! `AppConfig` is an ordinary value built once at startup and handed to whatever
//! needs it. There is no process-wide slot to read it back from.

use crate::error::{OrderError, Result};
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_key: String,
    timeout: Duration,
}

impl AppConfig {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OrderError::InvalidArgument(
                "api key must not be empty".to_string(),
            ));
        }
        if timeout.is_zero() {
            return Err(OrderError::InvalidArgument(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self { api_key, timeout })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Partial configuration as found on disk; missing fields fall back to
/// whatever the caller layers underneath.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl ConfigFile {
    /// Reads a JSON document with optional `api_key` and `timeout_ms` fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Resolves the final configuration. Explicit overrides win over file values,
    /// which win over the defaults.
    pub fn resolve(
        self,
        api_key: Option<String>,
        timeout_ms: Option<u64>,
        default_api_key: &str,
    ) -> Result<AppConfig> {
        let api_key = api_key
            .or(self.api_key)
            .unwrap_or_else(|| default_api_key.to_string());
        let timeout_ms = timeout_ms.or(self.timeout_ms).unwrap_or(DEFAULT_TIMEOUT_MS);
        AppConfig::new(api_key, Duration::from_millis(timeout_ms))
    }
}
