use crate::config::ZoraConfig;
use crate::plugin::Provider;
use crate::runtime::AgentRuntime;
use crate::sdk::ZoraClients;
use crate::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tracing::error;

/// Produces fresh clients for each action invocation
pub type ZoraClientFactory = Arc<dyn Fn() -> BoxFuture<'static, Result<ZoraClients>> + Send + Sync>;

/// Build clients for the configured Zora wallet
///
/// Configuration is read again on every call.
pub async fn get_zora_clients() -> Result<ZoraClients> {
    let config = ZoraConfig::from_env()?;
    ZoraClients::from_config(&config)
}

/// Factory backed by [`get_zora_clients`]
pub fn env_client_factory() -> ZoraClientFactory {
    Arc::new(|| get_zora_clients().boxed())
}

/// Reports the Zora wallet address, or why it could not be loaded
#[derive(Clone)]
pub struct ZoraStatusProvider {
    get_clients: ZoraClientFactory,
}

impl ZoraStatusProvider {
    pub fn new(get_clients: ZoraClientFactory) -> Self {
        Self { get_clients }
    }

    pub async fn status(&self) -> String {
        match (self.get_clients)().await {
            Ok(clients) => format!(
                "Zora Wallet Address: {}",
                clients.account.to_checksum(None)
            ),
            Err(e) => {
                error!(error = %e, "Error in Zora wallet provider");
                format!("Error initializing Zora wallet: {}", e)
            }
        }
    }
}

impl Default for ZoraStatusProvider {
    fn default() -> Self {
        Self::new(env_client_factory())
    }
}

impl std::fmt::Debug for ZoraStatusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoraStatusProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for ZoraStatusProvider {
    fn name(&self) -> &'static str {
        "zoraWallet"
    }

    async fn get(&self, _runtime: &dyn AgentRuntime) -> String {
        self.status().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ZORA_PRIVATE_KEY_ENV, ZORA_RPC_URL_ENV};
    use std::collections::HashMap;

    fn factory_from(vars: &[(&'static str, &'static str)]) -> ZoraClientFactory {
        let vars: HashMap<&'static str, &'static str> = vars.iter().copied().collect();
        Arc::new(move || {
            let vars = vars.clone();
            async move {
                let config =
                    ZoraConfig::from_lookup(|key: &str| vars.get(key).map(|v| v.to_string()))?;
                ZoraClients::from_config(&config)
            }
            .boxed()
        })
    }

    #[tokio::test]
    async fn reports_missing_credentials() {
        let provider = ZoraStatusProvider::new(factory_from(&[(ZORA_RPC_URL_ENV, "https://mainnet.base.org")]));
        assert_eq!(
            provider.status().await,
            "Error initializing Zora wallet: Missing required Zora credentials. Please set ZORA_RPC_URL and ZORA_PRIVATE_KEY environment variables."
        );
    }

    #[tokio::test]
    async fn reports_checksummed_address() {
        let provider = ZoraStatusProvider::new(factory_from(&[
            (ZORA_RPC_URL_ENV, "https://mainnet.base.org"),
            (
                ZORA_PRIVATE_KEY_ENV,
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            ),
        ]));
        assert_eq!(
            provider.status().await,
            "Zora Wallet Address: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[tokio::test]
    async fn reports_bad_private_key() {
        let provider = ZoraStatusProvider::new(factory_from(&[
            (ZORA_RPC_URL_ENV, "https://mainnet.base.org"),
            (ZORA_PRIVATE_KEY_ENV, "0x1234"),
        ]));
        assert!(provider
            .status()
            .await
            .starts_with("Error initializing Zora wallet: Invalid ZORA_PRIVATE_KEY:"));
    }
}
