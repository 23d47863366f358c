//! Client configuration, resolved once before the client is built.

use crate::error::{ClientError, ClientResult};
use std::time::Duration;

/// Base URL used when `MEDQUERY_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
    suggest_debounce: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig`. A trailing `/` on `api_base` is dropped.
    pub fn new(api_base: impl Into<String>, suggest_debounce: Duration) -> ClientResult<Self> {
        let api_base = api_base.into().trim().trim_end_matches('/').to_string();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ClientError::InvalidInput(format!(
                "API base must be an http(s) URL, got {api_base:?}"
            )));
        }

        Ok(Self {
            api_base,
            suggest_debounce,
        })
    }

    /// Build the configuration from optional raw values, as read from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the base URL is not http(s) or the debounce
    /// is not a whole number of milliseconds.
    pub fn from_env_values(
        api_base: Option<String>,
        debounce_ms: Option<String>,
    ) -> ClientResult<Self> {
        let api_base = api_base
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.into());

        let debounce = match debounce_ms.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ClientError::InvalidInput(format!("invalid debounce {raw:?}: {e}"))
            })?,
            None => 0,
        };

        Self::new(api_base, Duration::from_millis(debounce))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn suggest_debounce(&self) -> Duration {
        self.suggest_debounce
    }
}
