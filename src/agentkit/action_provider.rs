//! Zora action provider: IPFS metadata plus deployment through a wallet

use crate::agentkit::schema::CreateCoinSchema;
use crate::config::{NetworkDescriptor, PinataConfig, PluginSettings};
use crate::ipfs::{CoinMetadata, CoinProperties, PinataClient};
use crate::plugin::{ActionDescriptor, ActionProvider};
use crate::schema::ActionParameters;
use crate::sdk::contracts::coin_created_from_logs;
use crate::sdk::{
    deploy_request, ensure_mined, pool_pairing, CreateCoinArgs, DeployCurrency, DeploymentDetails,
};
use crate::tokens::ZoraContracts;
use crate::wallet::{EvmWalletProvider, WalletTransaction};
use crate::{Error, Result};
use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const COIN_IT: &str = "coinIt";

/// Outcome of a coin creation through the action provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinItResult {
    pub success: bool,
    pub transaction_hash: B256,
    pub coin_address: Option<Address>,
    pub uri: String,
    pub currency: DeployCurrency,
    pub name: String,
    pub symbol: String,
    pub payout_recipient: Address,
    pub network_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentDetails>,
}

pub struct ZoraActionProvider {
    pinata: PinataClient,
}

impl ZoraActionProvider {
    pub fn new(config: &PinataConfig, settings: &PluginSettings) -> Result<Self> {
        Ok(Self {
            pinata: PinataClient::new(config, settings)?,
        })
    }

    pub fn with_pinata(pinata: PinataClient) -> Self {
        Self { pinata }
    }

    /// Only Base mainnet and Base Sepolia on EVM
    pub fn supports_network(&self, network: &NetworkDescriptor) -> bool {
        network.base_network().is_some()
    }

    /// Pin metadata, deploy the coin through `wallet` and wait for it to land
    pub async fn create_coin(
        &self,
        wallet: &dyn EvmWalletProvider,
        args: CreateCoinSchema,
    ) -> Result<CoinItResult> {
        let descriptor = wallet.network();
        let network = descriptor.base_network().ok_or_else(|| {
            Error::UnsupportedNetwork(
                descriptor
                    .network_id
                    .clone()
                    .unwrap_or_else(|| descriptor.protocol_family.clone()),
            )
        })?;
        // fail on an unsupported pairing before anything is pinned
        pool_pairing(network, args.currency)?;

        let uri = self
            .pinata
            .pin_coin_metadata(CoinMetadata {
                name: args.name.clone(),
                symbol: args.symbol.clone(),
                description: args.description.clone(),
                image: args.image.clone(),
                properties: CoinProperties {
                    category: args.category.clone(),
                },
            })
            .await?;

        let payout_recipient = args
            .payout_recipient
            .map(|a| a.address())
            .unwrap_or_else(|| wallet.address());

        let request = deploy_request(
            &CreateCoinArgs {
                name: args.name.clone(),
                symbol: args.symbol.clone(),
                uri: uri.clone(),
                payout_recipient,
                platform_referrer: args.platform_referrer.map(|a| a.address()),
                owners: Vec::new(),
                currency: args.currency,
                initial_purchase_wei: U256::ZERO,
            },
            network,
        )?;

        let hash = wallet
            .send_transaction(WalletTransaction {
                to: ZoraContracts::for_network(network).factory,
                data: request.abi_encode().into(),
                value: U256::ZERO,
            })
            .await?;
        let receipt = wallet.wait_for_transaction_receipt(hash).await?;
        ensure_mined("Coin deployment", receipt.success, hash)?;

        let deployment = coin_created_from_logs(&receipt.logs).map(DeploymentDetails::from);
        let coin_address = deployment.as_ref().map(|d| d.coin);
        info!(tx_hash = %hash, coin = ?coin_address, %uri, "Zora coin created");

        Ok(CoinItResult {
            success: true,
            transaction_hash: hash,
            coin_address,
            uri,
            currency: args.currency,
            name: args.name,
            symbol: args.symbol,
            payout_recipient,
            network_id: descriptor.network_id,
            deployment,
        })
    }
}

impl ActionProvider for ZoraActionProvider {
    fn name(&self) -> &'static str {
        "zora"
    }

    fn actions(&self) -> Vec<ActionDescriptor> {
        vec![ActionDescriptor {
            name: COIN_IT,
            description: "Create a new Zora coin. Uploads the image and metadata to IPFS, then deploys the coin on Base through the connected wallet.",
            schema: CreateCoinSchema::extraction_schema(),
        }]
    }
}

impl std::fmt::Debug for ZoraActionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoraActionProvider")
            .field("pinata", &self.pinata)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use crate::sdk::contracts::test_support::coin_created_log;
    use crate::sdk::contracts::IZoraFactory;
    use crate::wallet::WalletReceipt;
    use async_trait::async_trait;
    use secrecy::SecretString;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingWallet {
        address: Address,
        network: Network,
        coin: Address,
        sent: Mutex<Vec<WalletTransaction>>,
    }

    impl RecordingWallet {
        fn new(network: Network) -> Self {
            Self {
                address: Address::repeat_byte(0x11),
                network,
                coin: Address::repeat_byte(0x42),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EvmWalletProvider for RecordingWallet {
        fn address(&self) -> Address {
            self.address
        }

        fn network(&self) -> NetworkDescriptor {
            self.network.into()
        }

        async fn send_transaction(&self, tx: WalletTransaction) -> Result<B256> {
            self.sent.lock().unwrap().push(tx);
            Ok(B256::repeat_byte(0xab))
        }

        async fn wait_for_transaction_receipt(&self, hash: B256) -> Result<WalletReceipt> {
            Ok(WalletReceipt {
                transaction_hash: hash,
                success: true,
                block_number: Some(1),
                logs: vec![coin_created_log(self.coin, self.address)],
            })
        }
    }

    fn provider(base_url: &str) -> ZoraActionProvider {
        let config = PinataConfig {
            jwt: SecretString::from("test-jwt".to_string()),
        };
        ZoraActionProvider::with_pinata(PinataClient::with_base_url(&config, base_url).unwrap())
    }

    fn args(currency: DeployCurrency) -> CreateCoinSchema {
        CreateCoinSchema::from_value(json!({
            "name": "Test Coin",
            "symbol": "TEST",
            "description": "A test coin",
            "image": "https://example.com/image.png",
            "currency": currency.as_str()
        }))
        .unwrap()
    }

    #[test]
    fn supports_base_networks_only() {
        let provider = provider("http://127.0.0.1:9");
        let descriptor = |id: &str| NetworkDescriptor {
            protocol_family: "evm".to_string(),
            network_id: Some(id.to_string()),
            chain_id: None,
        };

        assert!(provider.supports_network(&descriptor("base-mainnet")));
        assert!(provider.supports_network(&descriptor("base-sepolia")));
        assert!(!provider.supports_network(&descriptor("ethereum")));
    }

    #[test]
    fn publishes_coin_it_descriptor() {
        let provider = provider("http://127.0.0.1:9");
        assert_eq!(provider.name(), "zora");
        let actions = provider.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "coinIt");
        assert!(actions[0].schema.to_string().contains("payoutRecipient"));
    }

    #[tokio::test]
    async fn creates_coin_through_wallet() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/pinning/pinJSONToIPFS")
            .with_status(200)
            .with_body(r#"{"IpfsHash":"bafymeta","PinSize":1,"Timestamp":"2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let wallet = RecordingWallet::new(Network::BaseMainnet);
        let result = provider(&server.url())
            .create_coin(&wallet, args(DeployCurrency::Eth))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.uri, "ipfs://bafymeta");
        assert_eq!(result.coin_address, Some(wallet.coin));
        assert_eq!(result.payout_recipient, wallet.address);
        assert_eq!(result.network_id.as_deref(), Some("base-mainnet"));

        let sent = wallet.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, crate::tokens::addresses::ZORA_FACTORY);
        let call = IZoraFactory::deployCall::abi_decode(&sent[0].data).unwrap();
        assert_eq!(call.uri, "ipfs://bafymeta");
        assert_eq!(call.currency, crate::tokens::addresses::WETH_BASE);
        assert_eq!(call.owners, vec![wallet.address]);
    }

    #[tokio::test]
    async fn rejects_zora_currency_on_sepolia_before_uploading() {
        let wallet = RecordingWallet::new(Network::BaseSepolia);
        let err = provider("http://127.0.0.1:9")
            .create_coin(&wallet, args(DeployCurrency::Zora))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("ZORA is not supported on base-sepolia"));
        assert!(wallet.sent.lock().unwrap().is_empty());
    }
}
