//! Wallet management
//!
//! Private keys stay inside this module; callers only see addresses and
//! alloy wallets that expose signing, never key material.

mod provider;
mod signer;

pub use provider::{EvmWalletProvider, LocalEvmWallet, WalletReceipt, WalletTransaction};
pub use signer::WalletAccount;
