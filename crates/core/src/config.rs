//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the server. Request
//! handlers never read environment variables.

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{MedicineError, MedicineResult};
use std::path::{Path, PathBuf};

/// Server configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    host: String,
    port: u16,
    data_path: PathBuf,
}

impl ServerConfig {
    /// Create a new `ServerConfig`.
    pub fn new(host: String, port: u16, data_path: PathBuf) -> MedicineResult<Self> {
        if host.trim().is_empty() {
            return Err(MedicineError::InvalidInput("host cannot be empty".into()));
        }

        Ok(Self {
            host,
            port,
            data_path,
        })
    }

    /// Build the configuration from optional raw values, as read from the environment.
    ///
    /// Missing or blank values fall back to the defaults in [`crate::constants`].
    ///
    /// # Errors
    ///
    /// Returns [`MedicineError::InvalidInput`] if `port` is not a valid TCP port.
    pub fn from_env_values(
        host: Option<String>,
        port: Option<String>,
        data_path: Option<String>,
    ) -> MedicineResult<Self> {
        fn present(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let host = present(host).unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match present(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| MedicineError::InvalidInput(format!("invalid PORT {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let data_path = present(data_path)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Self::new(host, port, data_path)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
