//! Configuration for the coin plugins
//!
//! Every environment read happens here. Client factories call
//! [`ZoraConfig::from_env`] or [`PinataConfig::from_env`] once per client
//! construction and get back either a typed value or a single error naming
//! what is missing.

pub mod network;

use alloy::signers::local::PrivateKeySigner;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

pub use network::{Network, NetworkDescriptor, EVM_PROTOCOL_FAMILY};

/// Pinata JWT used for IPFS uploads
pub const PINATA_JWT_ENV: &str = "PINATA_JWT";
/// RPC endpoint for the Base network the Zora plugin signs against
pub const ZORA_RPC_URL_ENV: &str = "ZORA_RPC_URL";
/// Hex-encoded private key of the Zora plugin wallet
pub const ZORA_PRIVATE_KEY_ENV: &str = "ZORA_PRIVATE_KEY";
/// Optional network override (`base-mainnet` or `base-sepolia`)
pub const ZORA_NETWORK_ENV: &str = "ZORA_NETWORK";

/// Configuration failures, surfaced before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Missing required PINATA_JWT. Please set PINATA_JWT environment variable for IPFS uploads."
    )]
    MissingPinataJwt,

    #[error("Missing required Zora credentials. Please set ZORA_RPC_URL and ZORA_PRIVATE_KEY environment variables.")]
    MissingZoraCredentials { missing: Vec<&'static str> },

    #[error("Invalid ZORA_RPC_URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid ZORA_PRIVATE_KEY: {0}")]
    InvalidPrivateKey(String),

    #[error("Unsupported ZORA_NETWORK: {0}")]
    UnsupportedNetwork(String),

    #[error("Invalid settings file: {0}")]
    InvalidSettings(String),
}

/// Look up a variable, treating empty values as absent
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Credentials for the Zora coins plugin
#[derive(Debug, Clone)]
pub struct ZoraConfig {
    pub rpc_url: Url,
    pub private_key: SecretString,
    pub network: Network,
}

impl ZoraConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = non_empty(&lookup, ZORA_RPC_URL_ENV);
        let private_key = non_empty(&lookup, ZORA_PRIVATE_KEY_ENV);

        let (rpc_url, private_key) = match (rpc_url, private_key) {
            (Some(url), Some(key)) => (url, key),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(ZORA_RPC_URL_ENV);
                }
                if key.is_none() {
                    missing.push(ZORA_PRIVATE_KEY_ENV);
                }
                return Err(ConfigError::MissingZoraCredentials { missing });
            }
        };

        let rpc_url =
            Url::parse(&rpc_url).map_err(|e| ConfigError::InvalidRpcUrl(e.to_string()))?;

        // parsed only to validate; the signer itself is built by the wallet module
        private_key
            .strip_prefix("0x")
            .unwrap_or(&private_key)
            .parse::<PrivateKeySigner>()
            .map_err(|e| ConfigError::InvalidPrivateKey(e.to_string()))?;

        let network = match non_empty(&lookup, ZORA_NETWORK_ENV) {
            Some(name) => name
                .parse::<Network>()
                .map_err(ConfigError::UnsupportedNetwork)?,
            None => Network::default(),
        };

        Ok(Self {
            rpc_url,
            private_key: SecretString::from(private_key),
            network,
        })
    }
}

/// Credentials for the AgentKit plugin's IPFS uploads
#[derive(Debug, Clone)]
pub struct PinataConfig {
    pub jwt: SecretString,
}

impl PinataConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt = non_empty(&lookup, PINATA_JWT_ENV).ok_or(ConfigError::MissingPinataJwt)?;
        Ok(Self {
            jwt: SecretString::from(jwt),
        })
    }
}

/// Tunables that are not credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Gas limit applied to coin deployments, as a percentage of the estimate
    #[serde(default = "default_gas_multiplier")]
    pub gas_multiplier_percent: u64,
    /// How long to wait for a transaction receipt
    #[serde(default = "default_receipt_timeout")]
    pub receipt_timeout_secs: u64,
    /// Delay between receipt polls (milliseconds)
    #[serde(default = "default_receipt_poll_interval")]
    pub receipt_poll_interval_ms: u64,
    /// Pinata API base URL
    #[serde(default = "default_pinata_api_url")]
    pub pinata_api_url: String,
}

fn default_gas_multiplier() -> u64 {
    120
}

fn default_receipt_timeout() -> u64 {
    120
}

fn default_receipt_poll_interval() -> u64 {
    2_000
}

fn default_pinata_api_url() -> String {
    "https://api.pinata.cloud".to_string()
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            gas_multiplier_percent: default_gas_multiplier(),
            receipt_timeout_secs: default_receipt_timeout(),
            receipt_poll_interval_ms: default_receipt_poll_interval(),
            pinata_api_url: default_pinata_api_url(),
        }
    }
}

impl PluginSettings {
    /// Parse settings from a JSON document, filling in defaults
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))?;
        if !value.is_object() {
            return Err(ConfigError::InvalidSettings(
                "expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }
}
