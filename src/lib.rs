//! Zora coin plugins for a conversational agent runtime
//!
//! Two plugins let an agent create and trade Zora coins on Base:
//! - [`zora`]: `CREATE_COIN` and `TRADE_COIN`, signed by a locally configured key
//! - [`agentkit`]: `COINIT`, pinning metadata to IPFS and deploying through a
//!   wallet provider supplied by the host
//!
//! Each action asks the host's model to extract structured parameters, runs
//! the coin SDK call, then asks the model to phrase the result.
//!
//! # Security Model
//!
//! - Private keys and the Pinata JWT are held as secrets and never logged
//! - Keys never leave the [`wallet`] module; callers see addresses only
//! - All configuration is read through [`config`]

pub mod agentkit;
pub mod config;
pub mod ipfs;
pub mod pipeline;
pub mod plugin;
pub mod runtime;
pub mod schema;
pub mod sdk;
pub mod tokens;
pub mod wallet;
pub mod zora;

mod error;

// Re-export commonly used types
pub use agentkit::{init_agentkit_plugin, ZoraActionProvider};
pub use config::{ConfigError, Network, PinataConfig, PluginSettings, ZoraConfig};
pub use error::{Error, Result};
pub use plugin::{Action, ActionDescriptor, ActionProvider, ActionResponse, Plugin, Provider};
pub use runtime::AgentRuntime;
pub use sdk::{CoinSdk, ZoraClients, ZoraCoinsSdk};
pub use zora::init_zora_plugin;
