//! Error types for the coin plugins

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialize Zora Action Provider: {0}")]
    ClientInit(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter extraction failed: {0}")]
    Extraction(String),

    /// Coin SDK failures keep the SDK's own message
    #[error("{0}")]
    Sdk(String),

    #[error("Response generation failed: {0}")]
    Generation(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("IPFS upload failed: {0}")]
    Ipfs(String),

    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
