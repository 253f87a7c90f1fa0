//! Parameters the model extracts for the Zora coin actions

use crate::schema::{default_category, ActionParameters, HexAddress};
use crate::sdk::{CreateCoinArgs, DeployCurrency, TradeAsset, TradeAssetType, TradeParameters};
use crate::{Error, Result};
use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, U256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Accepted metadata URI schemes
pub const METADATA_URI_PREFIXES: [&str; 4] = ["ipfs://", "ar://", "https://", "data:"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinParameters {
    /// Name of the coin
    pub name: String,
    /// Ticker symbol of the coin
    pub symbol: String,
    /// Metadata URI (ipfs://, ar://, https:// or data:)
    pub uri: String,
    /// Address receiving creator earnings
    pub payout_recipient: HexAddress,
    /// Address receiving platform referrer fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_referrer: Option<HexAddress>,
    /// Currency the coin is paired with
    #[serde(default)]
    pub currency: DeployCurrency,
    #[serde(default = "default_category")]
    pub category: String,
}

impl ActionParameters for CreateCoinParameters {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidParameters("name must not be empty".to_string()));
        }
        if self.symbol.trim().is_empty() {
            return Err(Error::InvalidParameters("symbol must not be empty".to_string()));
        }
        if !METADATA_URI_PREFIXES
            .iter()
            .any(|prefix| self.uri.starts_with(prefix))
        {
            return Err(Error::InvalidParameters(format!(
                "uri must start with one of {}, got \"{}\"",
                METADATA_URI_PREFIXES.join(", "),
                self.uri
            )));
        }
        Ok(())
    }
}

impl CreateCoinParameters {
    pub fn to_create_args(&self) -> CreateCoinArgs {
        CreateCoinArgs {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            payout_recipient: self.payout_recipient.address(),
            platform_referrer: self.platform_referrer.map(|a| a.address()),
            owners: Vec::new(),
            currency: self.currency,
            initial_purchase_wei: U256::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TradeCoinParameters {
    /// What is sold: "eth" or "erc20"
    pub sell_type: TradeAssetType,
    /// What is bought: "eth" or "erc20"
    pub buy_type: TradeAssetType,
    /// Coin being bought or sold
    pub coin_address: HexAddress,
    /// Amount sold, as a decimal in whole units (e.g. "0.001")
    pub amount_in: String,
    /// Slippage tolerance as a fraction between 0 and 1
    pub slippage: f64,
}

impl ActionParameters for TradeCoinParameters {
    fn validate(&self) -> Result<()> {
        let coin_sides = [self.sell_type, self.buy_type]
            .iter()
            .filter(|kind| **kind == TradeAssetType::Erc20)
            .count();
        if coin_sides != 1 {
            return Err(Error::InvalidParameters(
                "exactly one of sellType and buyType must be erc20".to_string(),
            ));
        }
        if !self.slippage.is_finite() || !(0.0..=1.0).contains(&self.slippage) {
            return Err(Error::InvalidParameters(format!(
                "slippage must be between 0 and 1, got {}",
                self.slippage
            )));
        }
        self.amount_in_wei()?;
        Ok(())
    }
}

impl TradeCoinParameters {
    pub fn amount_in_wei(&self) -> Result<U256> {
        let amount = parse_ether(self.amount_in.trim()).map_err(|e| {
            Error::InvalidParameters(format!("amountIn \"{}\": {}", self.amount_in, e))
        })?;
        if amount.is_zero() {
            return Err(Error::InvalidParameters(
                "amountIn must be greater than zero".to_string(),
            ));
        }
        Ok(amount)
    }

    fn side(&self, kind: TradeAssetType) -> TradeAsset {
        match kind {
            TradeAssetType::Eth => TradeAsset::eth(),
            TradeAssetType::Erc20 => TradeAsset::erc20(self.coin_address.address()),
        }
    }

    pub fn to_trade_parameters(&self, sender: Address) -> Result<TradeParameters> {
        Ok(TradeParameters {
            sell: self.side(self.sell_type),
            buy: self.side(self.buy_type),
            amount_in: self.amount_in_wei()?,
            slippage: self.slippage,
            sender,
        })
    }
}
