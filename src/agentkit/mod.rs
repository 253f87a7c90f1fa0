//! AgentKit Zora plugin: `COINIT` with IPFS metadata and an injected wallet

mod action_provider;
mod actions;
mod provider;
pub mod schema;

pub use action_provider::{CoinItResult, ZoraActionProvider, COIN_IT};
pub use actions::{get_agentkit_actions, GetAgentKitActionsParams, COINIT};
pub use provider::{
    client_from_config, env_client_factory, get_client, get_client_with, AgentKitClientFactory,
    AgentKitStatusProvider,
};
pub use schema::CreateCoinSchema;

use crate::config::{PinataConfig, PluginSettings};
use crate::plugin::Plugin;
use crate::wallet::EvmWalletProvider;
use std::sync::Arc;
use tracing::{info, warn};

pub const PLUGIN_NAME: &str = "[Zora] Integration";
pub const PLUGIN_DESCRIPTION: &str =
    "Zora protocol integration plugin for creating coins on Base blockchain";

/// Assemble the plugin. Without Pinata credentials no actions are registered.
pub fn agentkit_plugin(
    get_client: AgentKitClientFactory,
    wallet: Arc<dyn EvmWalletProvider>,
    pinata_configured: bool,
) -> Plugin {
    let actions = if pinata_configured {
        let actions = get_agentkit_actions(GetAgentKitActionsParams {
            get_client: get_client.clone(),
            wallet,
        });
        let names: Vec<_> = actions.iter().map(|a| a.name).collect();
        info!(actions = ?names, "Zora actions initialized");
        actions
    } else {
        warn!("Missing PINATA_JWT - Zora actions will not be available");
        Vec::new()
    };

    Plugin {
        name: PLUGIN_NAME,
        description: PLUGIN_DESCRIPTION,
        providers: vec![Arc::new(AgentKitStatusProvider::new(get_client))],
        actions,
    }
}

/// Plugin wired to the process environment
pub fn init_agentkit_plugin(
    wallet: Arc<dyn EvmWalletProvider>,
    settings: &PluginSettings,
) -> Plugin {
    info!(
        plugin = PLUGIN_NAME,
        version = env!("CARGO_PKG_VERSION"),
        "Initializing Zora plugin"
    );
    agentkit_plugin(
        env_client_factory(settings.clone()),
        wallet,
        PinataConfig::from_env().is_ok(),
    )
}
