//! RPC clients bound to the plugin account

use crate::config::{Network, ZoraConfig};
use crate::wallet::WalletAccount;
use crate::Result;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use url::Url;

/// Account plus wallet and public RPC clients for one network
#[derive(Clone)]
pub struct ZoraClients {
    pub account: Address,
    pub network: Network,
    /// Signs and submits transactions as `account`
    pub wallet_client: DynProvider,
    /// Read-only calls and receipts
    pub public_client: DynProvider,
}

impl ZoraClients {
    /// Build both clients. No RPC request is made here.
    pub fn new(account: &WalletAccount, rpc_url: Url, network: Network) -> Self {
        let wallet_client = ProviderBuilder::new()
            .wallet(account.wallet().clone())
            .connect_http(rpc_url.clone())
            .erased();
        let public_client = ProviderBuilder::new().connect_http(rpc_url).erased();

        Self {
            account: account.address(),
            network,
            wallet_client,
            public_client,
        }
    }

    pub fn from_config(config: &ZoraConfig) -> Result<Self> {
        let account = WalletAccount::from_secret(&config.private_key)?;
        Ok(Self::new(&account, config.rpc_url.clone(), config.network))
    }
}

impl std::fmt::Debug for ZoraClients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoraClients")
            .field("account", &self.account)
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}
