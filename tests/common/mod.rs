#![allow(dead_code)]

use alloy::primitives::{Address, Log, B256, U256};
use alloy::sol_types::SolEvent;
use async_trait::async_trait;
use futures::FutureExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use zora_coin_plugins::config::{Network, NetworkDescriptor};
use zora_coin_plugins::plugin::{ActionResponse, HandlerCallback};
use zora_coin_plugins::runtime::{AgentRuntime, Content, Memory, ModelClass, State};
use zora_coin_plugins::sdk::contracts::IZoraFactory;
use zora_coin_plugins::sdk::{
    CoinSdk, CreateCoinArgs, CreateCoinOptions, CreateCoinResult, TradeDirection, TradeParameters,
    TradeResult, ZoraClients,
};
use zora_coin_plugins::wallet::{EvmWalletProvider, WalletAccount, WalletReceipt, WalletTransaction};
use zora_coin_plugins::zora::ZoraClientFactory;
use zora_coin_plugins::{Error, Result};

// Well-known anvil development key
pub const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const COIN_ADDRESS: &str = "0x4e93a01c90f812284f71291a8d1415a904957156";

pub fn message(text: &str) -> Memory {
    Memory::new(Uuid::new_v4(), Uuid::new_v4(), Content::text(text))
}

/// Runtime that answers extraction with a fixed object
pub struct MockRuntime {
    object: Value,
    extraction_error: Option<String>,
    generation_error: Option<String>,
    pub composed: Mutex<usize>,
    pub extraction_contexts: Mutex<Vec<String>>,
    pub schemas: Mutex<Vec<Value>>,
    pub response_contexts: Mutex<Vec<String>>,
}

impl MockRuntime {
    pub fn new(object: Value) -> Self {
        Self {
            object,
            extraction_error: None,
            generation_error: None,
            composed: Mutex::new(0),
            extraction_contexts: Mutex::new(Vec::new()),
            schemas: Mutex::new(Vec::new()),
            response_contexts: Mutex::new(Vec::new()),
        }
    }

    /// Model call for structured output fails
    pub fn failing_extraction(message: &str) -> Self {
        Self {
            extraction_error: Some(message.to_string()),
            ..Self::new(Value::Null)
        }
    }

    /// Extraction works but phrasing the result fails
    pub fn failing_generation(object: Value, message: &str) -> Self {
        Self {
            generation_error: Some(message.to_string()),
            ..Self::new(object)
        }
    }
}

#[async_trait]
impl AgentRuntime for MockRuntime {
    async fn compose_state(&self, message: &Memory) -> Result<State> {
        *self.composed.lock().unwrap() += 1;
        Ok(State::default()
            .with("agentName", "Zed")
            .with("recentMessages", format!("user: {}", message.content.text)))
    }

    async fn update_recent_message_state(&self, state: State) -> Result<State> {
        Ok(state)
    }

    async fn generate_object(
        &self,
        context: &str,
        schema: &Value,
        model: ModelClass,
    ) -> Result<Value> {
        assert_eq!(model, ModelClass::Large);
        self.extraction_contexts
            .lock()
            .unwrap()
            .push(context.to_string());
        self.schemas.lock().unwrap().push(schema.clone());
        if let Some(message) = &self.extraction_error {
            return Err(Error::Extraction(message.clone()));
        }
        Ok(self.object.clone())
    }

    async fn generate_text(&self, context: &str, model: ModelClass) -> Result<String> {
        assert_eq!(model, ModelClass::Large);
        self.response_contexts
            .lock()
            .unwrap()
            .push(context.to_string());
        if let Some(message) = &self.generation_error {
            return Err(Error::Generation(message.clone()));
        }
        Ok("All done!".to_string())
    }
}

/// Coin SDK that succeeds with canned results or rejects every call
pub struct MockSdk {
    reject_with: Option<String>,
    pub created: Mutex<Vec<(CreateCoinArgs, CreateCoinOptions)>>,
    pub traded: Mutex<Vec<TradeParameters>>,
}

impl MockSdk {
    pub fn succeeding() -> Self {
        Self {
            reject_with: None,
            created: Mutex::new(Vec::new()),
            traded: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::succeeding()
        }
    }

    pub fn create_hash() -> B256 {
        B256::repeat_byte(0xc1)
    }

    pub fn trade_hash() -> B256 {
        B256::repeat_byte(0x7d)
    }
}

#[async_trait]
impl CoinSdk for MockSdk {
    async fn create_coin(
        &self,
        args: CreateCoinArgs,
        _clients: &ZoraClients,
        options: CreateCoinOptions,
    ) -> Result<CreateCoinResult> {
        self.created.lock().unwrap().push((args, options));
        if let Some(message) = &self.reject_with {
            return Err(Error::Sdk(message.clone()));
        }
        Ok(CreateCoinResult {
            hash: Self::create_hash(),
            address: Some(COIN_ADDRESS.parse().unwrap()),
            deployment: None,
        })
    }

    async fn trade_coin(
        &self,
        params: TradeParameters,
        _clients: &ZoraClients,
    ) -> Result<TradeResult> {
        self.traded.lock().unwrap().push(params.clone());
        if let Some(message) = &self.reject_with {
            return Err(Error::Sdk(message.clone()));
        }
        Ok(TradeResult {
            hash: Self::trade_hash(),
            direction: TradeDirection::Buy,
            coin: COIN_ADDRESS.parse().unwrap(),
            amount_in: params.amount_in,
            min_amount_out: U256::from(950u64),
            block_number: Some(42),
        })
    }
}

/// Client factory that always hands out clients for the test key
pub fn test_clients() -> ZoraClientFactory {
    Arc::new(|| {
        async {
            let account = WalletAccount::from_hex(TEST_KEY)?;
            Ok::<_, Error>(ZoraClients::new(
                &account,
                "http://localhost:8545".parse().unwrap(),
                Network::BaseMainnet,
            ))
        }
        .boxed()
    })
}

/// Client factory that fails like a missing environment would
pub fn failing_clients(err: fn() -> Error) -> ZoraClientFactory {
    Arc::new(move || async move { Err::<ZoraClients, Error>(err()) }.boxed())
}

/// Callback that records every response it receives
#[derive(Default, Clone)]
pub struct Recorder {
    responses: Arc<Mutex<Vec<ActionResponse>>>,
}

impl Recorder {
    pub fn callback(&self) -> Box<HandlerCallback> {
        let responses = self.responses.clone();
        Box::new(move |response: ActionResponse| responses.lock().unwrap().push(response))
    }

    pub fn responses(&self) -> Vec<ActionResponse> {
        self.responses.lock().unwrap().clone()
    }
}

/// Wallet that accepts every transaction and reports a coin deployment
pub struct MockWallet {
    pub address: Address,
    pub coin: Address,
    pub sent: Mutex<Vec<WalletTransaction>>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self {
            address: TEST_ADDRESS.parse().unwrap(),
            coin: COIN_ADDRESS.parse().unwrap(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EvmWalletProvider for MockWallet {
    fn address(&self) -> Address {
        self.address
    }

    fn network(&self) -> NetworkDescriptor {
        Network::BaseMainnet.into()
    }

    async fn send_transaction(&self, tx: WalletTransaction) -> Result<B256> {
        self.sent.lock().unwrap().push(tx);
        Ok(B256::repeat_byte(0xde))
    }

    async fn wait_for_transaction_receipt(&self, hash: B256) -> Result<WalletReceipt> {
        let event = IZoraFactory::CoinCreated {
            caller: self.address,
            payoutRecipient: self.address,
            platformReferrer: Address::ZERO,
            currency: Address::ZERO,
            uri: "ipfs://bafymeta".to_string(),
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            coin: self.coin,
            pool: Address::repeat_byte(0x99),
            version: "1".to_string(),
        };
        Ok(WalletReceipt {
            transaction_hash: hash,
            success: true,
            block_number: Some(7),
            logs: vec![Log {
                address: Address::ZERO,
                data: event.encode_log_data(),
            }],
        })
    }
}

pub fn create_coin_object() -> Value {
    json!({
        "name": "My Awesome Coin",
        "symbol": "MAC",
        "uri": "ipfs://bafymeta",
        "payoutRecipient": TEST_ADDRESS
    })
}

pub fn trade_coin_object() -> Value {
    json!({
        "sellType": "eth",
        "buyType": "erc20",
        "coinAddress": COIN_ADDRESS,
        "amountIn": "0.001",
        "slippage": 0.05
    })
}
