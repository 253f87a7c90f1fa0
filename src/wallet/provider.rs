//! EVM wallet provider seam
//!
//! The AgentKit plugin deploys coins through whatever wallet the host hands
//! it. [`LocalEvmWallet`] is the default: a local key plus an HTTP RPC.

use crate::config::{Network, NetworkDescriptor, PluginSettings};
use crate::wallet::WalletAccount;
use crate::{Error, Result};
use alloy::primitives::{Address, Bytes, Log, B256, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Transaction a wallet provider is asked to sign and submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletTransaction {
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

/// Mined transaction as seen by the wallet provider
#[derive(Debug, Clone)]
pub struct WalletReceipt {
    pub transaction_hash: B256,
    pub success: bool,
    pub block_number: Option<u64>,
    pub logs: Vec<Log>,
}

#[async_trait]
pub trait EvmWalletProvider: Send + Sync {
    fn address(&self) -> Address;

    fn network(&self) -> NetworkDescriptor;

    /// Sign and submit, returning the transaction hash
    async fn send_transaction(&self, tx: WalletTransaction) -> Result<B256>;

    async fn wait_for_transaction_receipt(&self, hash: B256) -> Result<WalletReceipt>;
}

/// Wallet provider backed by a local key and an HTTP RPC endpoint
pub struct LocalEvmWallet {
    account: WalletAccount,
    network: Network,
    provider: DynProvider,
    timeout: Duration,
}

impl LocalEvmWallet {
    pub fn new(
        account: WalletAccount,
        rpc_url: Url,
        network: Network,
        settings: &PluginSettings,
    ) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(account.wallet().clone())
            .connect_http(rpc_url)
            .erased();
        provider
            .client()
            .set_poll_interval(Duration::from_millis(settings.receipt_poll_interval_ms));

        Self {
            account,
            network,
            provider,
            timeout: Duration::from_secs(settings.receipt_timeout_secs),
        }
    }
}

#[async_trait]
impl EvmWalletProvider for LocalEvmWallet {
    fn address(&self) -> Address {
        self.account.address()
    }

    fn network(&self) -> NetworkDescriptor {
        self.network.into()
    }

    async fn send_transaction(&self, tx: WalletTransaction) -> Result<B256> {
        let request = TransactionRequest::default()
            .from(self.account.address())
            .to(tx.to)
            .input(tx.data.into())
            .value(tx.value);

        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(|e| Error::Wallet(format!("Failed to send transaction: {}", e)))?;

        let hash = *pending.tx_hash();
        tracing::info!(tx_hash = %hash, network = %self.network, "Transaction submitted");
        Ok(hash)
    }

    async fn wait_for_transaction_receipt(&self, hash: B256) -> Result<WalletReceipt> {
        tracing::debug!(tx_hash = %hash, "Waiting for receipt");
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), hash)
            .with_timeout(Some(self.timeout))
            .get_receipt()
            .await
            .map_err(|e| Error::Wallet(format!("Failed to confirm {}: {}", hash, e)))?;

        Ok(WalletReceipt {
            transaction_hash: receipt.transaction_hash,
            success: receipt.status(),
            block_number: receipt.block_number,
            logs: receipt
                .inner
                .logs()
                .iter()
                .map(|log| log.inner.clone())
                .collect(),
        })
    }
}

impl std::fmt::Debug for LocalEvmWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalEvmWallet")
            .field("account", &self.account)
            .field("network", &self.network)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_network_and_address() {
        let account = WalletAccount::from_hex(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .unwrap();
        let expected = account.address();
        let wallet = LocalEvmWallet::new(
            account,
            "http://localhost:8545".parse().unwrap(),
            Network::BaseSepolia,
            &PluginSettings::default(),
        );

        assert_eq!(wallet.address(), expected);
        let network = wallet.network();
        assert_eq!(network.protocol_family, "evm");
        assert_eq!(network.network_id.as_deref(), Some("base-sepolia"));
        assert_eq!(network.chain_id, Some(84532));
    }

    #[test]
    fn receipt_polling_follows_settings() {
        let account = WalletAccount::from_hex(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .unwrap();
        let settings = PluginSettings {
            receipt_poll_interval_ms: 500,
            receipt_timeout_secs: 30,
            ..PluginSettings::default()
        };
        let wallet = LocalEvmWallet::new(
            account,
            "https://sepolia.base.org".parse().unwrap(),
            Network::BaseSepolia,
            &settings,
        );

        assert_eq!(
            wallet.provider.client().poll_interval(),
            Duration::from_millis(500)
        );
        assert_eq!(wallet.timeout, Duration::from_secs(30));
    }
}
