//! `CREATE_COIN` and `TRADE_COIN`

use crate::pipeline::{
    compose_parameter_context, compose_response_context, deliver, deliver_error,
    generate_parameters, generate_response, prepare_state,
};
use crate::plugin::{Action, ActionHandler, HandlerCallback};
use crate::runtime::{ActionExample, AgentRuntime, Content, Memory, State};
use crate::sdk::{CoinSdk, CreateCoinOptions};
use crate::zora::provider::ZoraClientFactory;
use crate::zora::schema::{CreateCoinParameters, TradeCoinParameters};
use crate::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

pub const CREATE_COIN: &str = "CREATE_COIN";
pub const TRADE_COIN: &str = "TRADE_COIN";

/// Collaborators shared by the Zora actions
#[derive(Clone)]
pub struct GetZoraActionsParams {
    pub get_clients: ZoraClientFactory,
    pub sdk: Arc<dyn CoinSdk>,
    /// Gas limit for deployments, as a percentage of the estimate
    pub gas_multiplier_percent: u64,
}

pub fn get_zora_actions(params: GetZoraActionsParams) -> Vec<Action> {
    vec![create_coin_action(&params), trade_coin_action(&params)]
}

fn extraction_request(action: &str, description: &str) -> String {
    format!(
        "extract the following information for the action \"{}\":\n{}\n\nPlease provide the parameters in the correct format.",
        action, description
    )
}

fn outcome(action: &str) -> String {
    format!("The Zora action \"{}\" was executed successfully.", action)
}

fn exchange(request: &str, reply: &str, action: &str) -> Vec<ActionExample> {
    vec![
        ActionExample::new("{{user1}}", Content::text(request)),
        ActionExample::new("{{user2}}", Content::with_action(reply, action)),
    ]
}

fn create_coin_action(params: &GetZoraActionsParams) -> Action {
    Action {
        name: CREATE_COIN,
        description: "Create a new coin on Zora using the Zora Coins SDK. This action allows you to deploy a new creator coin with specified parameters including name, symbol, metadata URI, and payout recipient.",
        similes: vec!["deploy coin", "create token", "mint coin", "launch coin"],
        examples: vec![
            exchange(
                "Create a coin named 'My Awesome Coin' with symbol 'MAC'",
                "I'll create that coin for you",
                CREATE_COIN,
            ),
            exchange(
                "Deploy a new creator coin with metadata URI and payout address",
                "Creating your creator coin now",
                CREATE_COIN,
            ),
            exchange(
                "Launch a new token on Zora platform",
                "Launching your token on Zora",
                CREATE_COIN,
            ),
        ],
        handler: Arc::new(CreateCoinHandler {
            get_clients: params.get_clients.clone(),
            sdk: params.sdk.clone(),
            gas_multiplier_percent: params.gas_multiplier_percent,
        }),
    }
}

fn trade_coin_action(params: &GetZoraActionsParams) -> Action {
    Action {
        name: TRADE_COIN,
        description: "Trade coins on Zora using the Zora Coins SDK. This action allows you to buy or sell coins with specified amounts, slippage tolerance, and trade parameters.",
        similes: vec!["buy coin", "sell coin", "swap coin", "trade token"],
        examples: vec![
            exchange(
                "Buy 0.001 ETH worth of coin at address 0x4e93a01c90f812284f71291a8d1415a904957156",
                "I'll execute that trade for you",
                TRADE_COIN,
            ),
            exchange(
                "Trade ETH for a creator coin with 5% slippage tolerance",
                "Executing the trade with 5% slippage",
                TRADE_COIN,
            ),
            exchange(
                "Swap ETH for a specific coin token",
                "Swapping ETH for your coin",
                TRADE_COIN,
            ),
        ],
        handler: Arc::new(TradeCoinHandler {
            get_clients: params.get_clients.clone(),
            sdk: params.sdk.clone(),
        }),
    }
}

struct CreateCoinHandler {
    get_clients: ZoraClientFactory,
    sdk: Arc<dyn CoinSdk>,
    gas_multiplier_percent: u64,
}

impl CreateCoinHandler {
    async fn run(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
    ) -> Result<(String, Value)> {
        let clients = (self.get_clients)().await?;
        let state = prepare_state(runtime, message, state).await?;

        let context = compose_parameter_context(
            &state,
            &extraction_request(
                CREATE_COIN,
                "Extract coin creation parameters including name, symbol, metadata URI, and payout recipient address.",
            ),
        );
        let params: CreateCoinParameters = generate_parameters(runtime, &context).await?;
        info!(name = %params.name, symbol = %params.symbol, currency = params.currency.as_str(), "Creating coin");

        let result = self
            .sdk
            .create_coin(
                params.to_create_args(),
                &clients,
                CreateCoinOptions {
                    gas_multiplier_percent: Some(self.gas_multiplier_percent),
                },
            )
            .await?;

        let response_context = compose_response_context(&outcome(CREATE_COIN), &result, &state)?;
        let text = generate_response(runtime, &response_context).await?;

        Ok((
            text,
            json!({
                "transactionHash": result.hash,
                "coinAddress": result.address,
                "deploymentDetails": result.deployment,
            }),
        ))
    }
}

#[async_trait]
impl ActionHandler for CreateCoinHandler {
    async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
        _options: &Map<String, Value>,
        callback: Option<&HandlerCallback>,
    ) -> bool {
        match self.run(runtime, message, state).await {
            Ok((text, content)) => deliver(callback, text, content),
            Err(e) => deliver_error(callback, CREATE_COIN, "Error creating coin", &e),
        }
    }
}

struct TradeCoinHandler {
    get_clients: ZoraClientFactory,
    sdk: Arc<dyn CoinSdk>,
}

impl TradeCoinHandler {
    async fn run(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
    ) -> Result<(String, Value)> {
        let clients = (self.get_clients)().await?;
        let state = prepare_state(runtime, message, state).await?;

        let context = compose_parameter_context(
            &state,
            &extraction_request(
                TRADE_COIN,
                "Extract trade parameters including sell type (eth), buy type (erc20), coin address, amount in ETH, and slippage tolerance.",
            ),
        );
        let params: TradeCoinParameters = generate_parameters(runtime, &context).await?;
        let trade = params.to_trade_parameters(clients.account)?;
        info!(
            coin = %params.coin_address.address(),
            amount_in = %params.amount_in,
            slippage = params.slippage,
            "Trading coin"
        );

        let result = self.sdk.trade_coin(trade, &clients).await?;

        let response_context = compose_response_context(&outcome(TRADE_COIN), &result, &state)?;
        let text = generate_response(runtime, &response_context).await?;

        Ok((
            text,
            json!({
                "transactionHash": result.hash,
                "tradeDetails": result,
            }),
        ))
    }
}

#[async_trait]
impl ActionHandler for TradeCoinHandler {
    async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
        _options: &Map<String, Value>,
        callback: Option<&HandlerCallback>,
    ) -> bool {
        match self.run(runtime, message, state).await {
            Ok((text, content)) => deliver(callback, text, content),
            Err(e) => deliver_error(callback, TRADE_COIN, "Error trading coin", &e),
        }
    }
}
