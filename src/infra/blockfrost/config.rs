//! Client configuration: target network, credentials and transport settings.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::domain::ConfigError;

pub const PROJECT_ID_ENV: &str = "BLOCKFROST_PROJECT_ID";
pub const NETWORK_ENV: &str = "BLOCKFROST_NETWORK";
pub const API_URL_ENV: &str = "BLOCKFROST_API_URL";
pub const TIMEOUT_ENV: &str = "BLOCKFROST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Cardano networks served by Blockfrost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardanoNetwork {
    #[default]
    Mainnet,
    Preprod,
    Preview,
    Testnet,
}

impl CardanoNetwork {
    pub fn base_url(&self) -> &'static str {
        match self {
            CardanoNetwork::Mainnet => "https://cardano-mainnet.blockfrost.io/api/v0",
            CardanoNetwork::Preprod => "https://cardano-preprod.blockfrost.io/api/v0",
            CardanoNetwork::Preview => "https://cardano-preview.blockfrost.io/api/v0",
            CardanoNetwork::Testnet => "https://cardano-testnet.blockfrost.io/api/v0",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardanoNetwork::Mainnet => "mainnet",
            CardanoNetwork::Preprod => "preprod",
            CardanoNetwork::Preview => "preview",
            CardanoNetwork::Testnet => "testnet",
        }
    }
}

impl fmt::Display for CardanoNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardanoNetwork {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(CardanoNetwork::Mainnet),
            "preprod" => Ok(CardanoNetwork::Preprod),
            "preview" => Ok(CardanoNetwork::Preview),
            "testnet" => Ok(CardanoNetwork::Testnet),
            other => Err(ConfigError::InvalidValue {
                key: NETWORK_ENV.to_string(),
                message: format!("unknown network '{other}'"),
            }),
        }
    }
}

/// Configuration for [`BlockfrostClient`](super::BlockfrostClient).
#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub project_id: SecretString,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(network: CardanoNetwork, project_id: impl Into<String>) -> Self {
        Self {
            base_url: network.base_url().to_string(),
            project_id: SecretString::from(project_id.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    /// Points the client at a custom deployment (self-hosted backend, proxy, mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = lookup(PROJECT_ID_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(PROJECT_ID_ENV.to_string()))?;

        let network = match lookup(NETWORK_ENV) {
            Some(value) => value.parse()?,
            None => CardanoNetwork::default(),
        };

        let timeout_secs = match lookup(TIMEOUT_ENV) {
            Some(value) => value.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: TIMEOUT_ENV.to_string(),
                message: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(network, project_id.trim())
            .with_timeout(Duration::from_secs(timeout_secs));
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
