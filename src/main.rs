//! Zora coin plugins CLI
//!
//! Developer tool for checking configuration and inspecting what the plugins
//! expose to a host runtime.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zora_coin_plugins::agentkit::{self, AgentKitStatusProvider, CreateCoinSchema};
use zora_coin_plugins::config::{PinataConfig, PluginSettings, ZoraConfig};
use zora_coin_plugins::ipfs::{CoinMetadata, CoinProperties, PinataClient};
use zora_coin_plugins::schema::ActionParameters;
use zora_coin_plugins::wallet::{LocalEvmWallet, WalletAccount};
use zora_coin_plugins::zora::{self, CreateCoinParameters, TradeCoinParameters, ZoraStatusProvider};
use zora_coin_plugins::{Error, Plugin, Result};

#[derive(Parser)]
#[command(name = "zora-plugins")]
#[command(about = "Inspect the Zora coin plugins")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report what both status providers see
    Status,

    /// List registered actions and their similes
    Actions,

    /// Print the extraction schema of an action
    Schema {
        /// CREATE_COIN, TRADE_COIN or COINIT
        action: String,
    },

    /// Show effective settings
    Settings,

    /// Pin coin metadata to IPFS and print its URI
    PinMetadata {
        #[arg(long)]
        name: String,

        #[arg(long)]
        symbol: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Local image path or URI
        #[arg(long)]
        image: String,

        #[arg(long, default_value = "social")]
        category: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let settings = if let Some(config_path) = cli.config {
        let content = std::fs::read_to_string(&config_path)?;
        PluginSettings::from_json(&content)?
    } else {
        PluginSettings::default()
    };

    match cli.command {
        Commands::Status => {
            println!("zora:     {}", ZoraStatusProvider::default().status().await);
            let agentkit_status =
                AgentKitStatusProvider::new(agentkit::env_client_factory(settings.clone()));
            println!("agentkit: {}", agentkit_status.status().await);
        }
        Commands::Actions => {
            print_plugin("zora", &zora::init_zora_plugin(&settings));
            match local_wallet(&settings) {
                Ok(wallet) => {
                    print_plugin("agentkit", &agentkit::init_agentkit_plugin(wallet, &settings))
                }
                Err(e) => println!("agentkit: no wallet available ({})", e),
            }
        }
        Commands::Schema { action } => {
            let schema = match action.to_uppercase().as_str() {
                zora::CREATE_COIN => CreateCoinParameters::extraction_schema(),
                zora::TRADE_COIN => TradeCoinParameters::extraction_schema(),
                agentkit::COINIT => CreateCoinSchema::extraction_schema(),
                other => {
                    return Err(Error::InvalidParameters(format!(
                        "Unknown action: {}",
                        other
                    )))
                }
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Settings => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Commands::PinMetadata {
            name,
            symbol,
            description,
            image,
            category,
        } => {
            let pinata = PinataClient::new(&PinataConfig::from_env()?, &settings)?;
            let uri = pinata
                .pin_coin_metadata(CoinMetadata {
                    name,
                    symbol,
                    description,
                    image,
                    properties: CoinProperties { category },
                })
                .await?;
            println!("{}", uri);
        }
    }

    Ok(())
}

/// Wallet for the AgentKit plugin, built from the Zora credentials
fn local_wallet(settings: &PluginSettings) -> Result<Arc<LocalEvmWallet>> {
    let config = ZoraConfig::from_env()?;
    let account = WalletAccount::from_secret(&config.private_key)?;
    tracing::info!(address = %account.address(), network = %config.network, "Loaded local wallet");
    Ok(Arc::new(LocalEvmWallet::new(
        account,
        config.rpc_url,
        config.network,
        settings,
    )))
}

fn print_plugin(label: &str, plugin: &Plugin) {
    println!("{} ({}): {}", label, plugin.name, plugin.description);
    if plugin.actions.is_empty() {
        println!("  (no actions registered)");
    }
    for action in &plugin.actions {
        println!("  {}: {}", action.name, action.similes.join(", "));
    }
}
