//! Submission settings.
//!
//! Defaults target the public Sepolia deployment. A JSON file may override
//! any subset of fields; command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of the deployed actions contract exposing `register_map`.
pub const DEFAULT_CONTRACT: &str =
    "0x05050094858a637c2c315b408377f7ce7d0481c4e60fd5bc732aad0ac7ab2862";

/// Sepolia RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.cartridge.gg/x/starknet/sepolia";

/// Executable used to send transactions.
pub const DEFAULT_CONTROLLER: &str = "controller";

/// Seconds to wait for one submission before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where and how maps are submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmitConfig {
    pub contract: String,
    pub rpc_url: String,
    pub controller: String,
    pub timeout_secs: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        SubmitConfig {
            contract: DEFAULT_CONTRACT.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            controller: DEFAULT_CONTROLLER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SubmitConfig {
    /// Parses a JSON configuration; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Loads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = SubmitConfig::default();
        assert_eq!(config.contract, DEFAULT_CONTRACT);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SubmitConfig::from_json(r#"{ "rpc_url": "http://localhost:5050" }"#).unwrap();
        assert_eq!(config.rpc_url, "http://localhost:5050");
        assert_eq!(config.contract, DEFAULT_CONTRACT);
        assert_eq!(config.controller, DEFAULT_CONTROLLER);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SubmitConfig::from_json(r#"{ "rpc": "x" }"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "contract": "0x1", "timeout_secs": 5 }}"#).unwrap();
        let config = SubmitConfig::load(file.path()).unwrap();
        assert_eq!(config.contract, "0x1");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SubmitConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
