//! Call shapes of the coin SDK

use crate::sdk::contracts::IZoraFactory;
use alloy::primitives::{Address, B256, U256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Currency a new coin is paired with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema, TS,
)]
#[ts(export)]
pub enum DeployCurrency {
    #[default]
    #[serde(rename = "ZORA")]
    Zora,
    #[serde(rename = "ETH")]
    Eth,
}

impl DeployCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployCurrency::Zora => "ZORA",
            DeployCurrency::Eth => "ETH",
        }
    }
}

/// Arguments for deploying a coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub payout_recipient: Address,
    pub platform_referrer: Option<Address>,
    /// Defaults to the payout recipient when empty
    pub owners: Vec<Address>,
    pub currency: DeployCurrency,
    /// ETH spent buying the coin in the deployment transaction
    pub initial_purchase_wei: U256,
}

impl CreateCoinArgs {
    pub fn owners_or_default(&self) -> Vec<Address> {
        if self.owners.is_empty() {
            vec![self.payout_recipient]
        } else {
            self.owners.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreateCoinOptions {
    /// Gas limit as a percentage of the estimate (120 = +20%)
    pub gas_multiplier_percent: Option<u64>,
}

/// Details of a deployment, read from the factory's `CoinCreated` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDetails {
    pub caller: Address,
    pub payout_recipient: Address,
    pub platform_referrer: Address,
    pub currency: Address,
    pub uri: String,
    pub name: String,
    pub symbol: String,
    pub coin: Address,
    pub pool: Address,
    pub version: String,
}

impl From<IZoraFactory::CoinCreated> for DeploymentDetails {
    fn from(event: IZoraFactory::CoinCreated) -> Self {
        Self {
            caller: event.caller,
            payout_recipient: event.payoutRecipient,
            platform_referrer: event.platformReferrer,
            currency: event.currency,
            uri: event.uri,
            name: event.name,
            symbol: event.symbol,
            coin: event.coin,
            pool: event.pool,
            version: event.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinResult {
    pub hash: B256,
    pub address: Option<Address>,
    pub deployment: Option<DeploymentDetails>,
}

/// Asset kind on one side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TradeAssetType {
    Eth,
    Erc20,
}

/// One side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAsset {
    #[serde(rename = "type")]
    pub kind: TradeAssetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl TradeAsset {
    pub fn eth() -> Self {
        Self {
            kind: TradeAssetType::Eth,
            address: None,
        }
    }

    pub fn erc20(address: Address) -> Self {
        Self {
            kind: TradeAssetType::Erc20,
            address: Some(address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParameters {
    pub sell: TradeAsset,
    pub buy: TradeAsset,
    /// Amount of the sell asset, in base units
    pub amount_in: U256,
    /// Tolerated slippage as a fraction (0.05 = 5%)
    pub slippage: f64,
    pub sender: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResult {
    pub hash: B256,
    pub direction: TradeDirection,
    pub coin: Address,
    pub amount_in: U256,
    pub min_amount_out: U256,
    pub block_number: Option<u64>,
}
