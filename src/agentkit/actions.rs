//! `COINIT`: create a Zora coin through the action provider

use crate::agentkit::provider::AgentKitClientFactory;
use crate::agentkit::schema::CreateCoinSchema;
use crate::pipeline::{
    compose_parameter_context, compose_response_context, deliver, deliver_error,
    generate_parameters, generate_response, prepare_state,
};
use crate::plugin::{Action, ActionHandler, HandlerCallback};
use crate::runtime::{ActionExample, AgentRuntime, Content, Memory, State};
use crate::wallet::EvmWalletProvider;
use crate::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

pub const COINIT: &str = "COINIT";

const EXTRACTION_REQUEST: &str = "extract the following information for creating a Zora coin:
- name: The name of the coin to create
- symbol: The symbol of the coin to create
- description: The description of the coin
- image: Local image file path or URI (ipfs:// or https://)
- category: The category of the coin (optional, defaults to 'social')
- payoutRecipient: The address that will receive creator earnings (optional)
- platformReferrer: The address that will receive platform referrer fees (optional)
- currency: The currency for deployment, can be 'ZORA' or 'ETH' (optional, defaults to 'ZORA')";

#[derive(Clone)]
pub struct GetAgentKitActionsParams {
    pub get_client: AgentKitClientFactory,
    /// Wallet that signs deployments
    pub wallet: Arc<dyn EvmWalletProvider>,
}

pub fn get_agentkit_actions(params: GetAgentKitActionsParams) -> Vec<Action> {
    vec![coin_it_action(params)]
}

fn coin_it_action(params: GetAgentKitActionsParams) -> Action {
    let examples = [
        "Create a coin called 'MyToken' with symbol 'MTK'",
        "Deploy a new Zora coin with name 'CommunityCoin' and symbol 'CC'",
        "Mint a coin called 'GameToken' with symbol 'GTK'",
    ]
    .into_iter()
    .map(|text| vec![ActionExample::new("{{user1}}", Content::text(text))])
    .collect();

    Action {
        name: COINIT,
        description: "Create a new Zora coin on the Base blockchain",
        similes: vec!["create coin", "mint coin", "deploy coin", "create token"],
        examples,
        handler: Arc::new(CoinItHandler {
            get_client: params.get_client,
            wallet: params.wallet,
        }),
    }
}

struct CoinItHandler {
    get_client: AgentKitClientFactory,
    wallet: Arc<dyn EvmWalletProvider>,
}

impl CoinItHandler {
    async fn run(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
    ) -> Result<(String, Value)> {
        let client = (self.get_client)().await?;
        let state = prepare_state(runtime, message, state).await?;

        let context = compose_parameter_context(&state, EXTRACTION_REQUEST);
        let params: CreateCoinSchema = generate_parameters(runtime, &context).await?;
        info!(name = %params.name, symbol = %params.symbol, image = %params.image, "Creating Zora coin");

        let result = client.create_coin(self.wallet.as_ref(), params).await?;

        let response_context = compose_response_context(
            "The Zora coin creation action was executed successfully.",
            &result,
            &state,
        )?;
        let text = generate_response(runtime, &response_context).await?;

        Ok((text, serde_json::to_value(&result)?))
    }
}

#[async_trait]
impl ActionHandler for CoinItHandler {
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
            Err(e) => deliver_error(callback, COINIT, "Error executing Zora action", &e),
        }
    }
}
