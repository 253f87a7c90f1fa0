//! Zora coins plugin: `CREATE_COIN` and `TRADE_COIN` signed by a local key

mod actions;
mod provider;
pub mod schema;

pub use actions::{get_zora_actions, GetZoraActionsParams, CREATE_COIN, TRADE_COIN};
pub use provider::{env_client_factory, get_zora_clients, ZoraClientFactory, ZoraStatusProvider};
pub use schema::{CreateCoinParameters, TradeCoinParameters};

use crate::config::PluginSettings;
use crate::plugin::Plugin;
use crate::sdk::{CoinSdk, ZoraCoinsSdk};
use std::sync::Arc;
use tracing::info;

pub const PLUGIN_NAME: &str = "[Zora] Integration";
pub const PLUGIN_DESCRIPTION: &str =
    "Zora Coins integration plugin for creating and trading coins on Base blockchain";

/// Assemble the plugin from explicit collaborators
pub fn zora_plugin(
    get_clients: ZoraClientFactory,
    sdk: Arc<dyn CoinSdk>,
    settings: &PluginSettings,
) -> Plugin {
    let actions = get_zora_actions(GetZoraActionsParams {
        get_clients: get_clients.clone(),
        sdk,
        gas_multiplier_percent: settings.gas_multiplier_percent,
    });

    Plugin {
        name: PLUGIN_NAME,
        description: PLUGIN_DESCRIPTION,
        providers: vec![Arc::new(ZoraStatusProvider::new(get_clients))],
        actions,
    }
}

/// Plugin wired to the process environment and the Zora contracts
///
/// Credentials are not checked here; each action invocation loads them.
pub fn init_zora_plugin(settings: &PluginSettings) -> Plugin {
    info!(
        plugin = PLUGIN_NAME,
        version = env!("CARGO_PKG_VERSION"),
        "Initializing Zora coins plugin"
    );
    let plugin = zora_plugin(
        env_client_factory(),
        Arc::new(ZoraCoinsSdk::new(settings.clone())),
        settings,
    );
    info!(actions = ?plugin.action_names(), "Zora actions initialized");
    plugin
}
