//! Local signing account
//!
//! SECURITY: the private key lives only inside alloy's `PrivateKeySigner`.
//! - Keys are never serialized
//! - Keys are never logged (Debug is redacted)

use crate::{Error, Result};
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use secrecy::{ExposeSecret, SecretString};

/// Signing account built from a hex-encoded private key
#[derive(Clone)]
pub struct WalletAccount {
    address: Address,
    wallet: EthereumWallet,
}

impl WalletAccount {
    /// Create an account from a hex-encoded private key (with or without `0x`)
    pub fn from_hex(key_hex: &str) -> Result<Self> {
        let key_hex = key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| Error::Wallet(format!("Invalid private key: {}", e)))?;

        let address = signer.address();
        Ok(Self {
            address,
            wallet: EthereumWallet::from(signer),
        })
    }

    pub fn from_secret(key: &SecretString) -> Result<Self> {
        Self::from_hex(key.expose_secret())
    }

    /// Public address (safe to share)
    pub fn address(&self) -> Address {
        self.address
    }

    /// EIP-55 checksummed address
    pub fn address_string(&self) -> String {
        self.address.to_checksum(None)
    }

    /// Signing wallet for alloy providers
    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }
}

impl std::fmt::Debug for WalletAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletAccount")
            .field("address", &self.address)
            .field("signer", &"[REDACTED]")
            .finish()
    }
}
