use crate::schema::{default_category, ActionParameters, HexAddress};
use crate::sdk::DeployCurrency;
use crate::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Arguments for `COINIT`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinSchema {
    /// The name of the coin to create
    pub name: String,
    /// The symbol of the coin to create
    pub symbol: String,
    /// The description of the coin
    pub description: String,
    /// Local image file path or URI (ipfs:// or https://)
    pub image: String,
    /// The category of the coin, defaults to 'social'
    #[serde(default = "default_category")]
    pub category: String,
    /// The address that will receive creator earnings, defaults to the wallet address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_recipient: Option<HexAddress>,
    /// The address that will receive platform referrer fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_referrer: Option<HexAddress>,
    /// The currency for deployment, 'ZORA' or 'ETH'
    #[serde(default)]
    pub currency: DeployCurrency,
}

impl ActionParameters for CreateCoinSchema {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("symbol", &self.symbol),
            ("image", &self.image),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidParameters(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validates_correct_input() {
        let parsed = CreateCoinSchema::from_value(json!({
            "name": "Test Coin",
            "symbol": "TEST",
            "description": "A test coin",
            "image": "https://example.com/image.png",
            "category": "social",
            "currency": "ZORA"
        }))
        .unwrap();
        assert_eq!(parsed.symbol, "TEST");
        assert!(parsed.payout_recipient.is_none());
    }

    #[test]
    fn rejects_invalid_payout_recipient() {
        let err = CreateCoinSchema::from_value(json!({
            "name": "Test Coin",
            "symbol": "TEST",
            "description": "A test coin",
            "image": "https://example.com/image.png",
            "category": "social",
            "currency": "ZORA",
            "payoutRecipient": "invalid-address"
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn sets_defaults() {
        let parsed = CreateCoinSchema::from_value(json!({
            "name": "Test Coin",
            "symbol": "TEST",
            "description": "A test coin",
            "image": "https://example.com/image.png"
        }))
        .unwrap();
        assert_eq!(parsed.category, "social");
        assert_eq!(parsed.currency, DeployCurrency::Zora);
    }

    #[test]
    fn rejects_missing_description_and_blank_image() {
        assert!(CreateCoinSchema::from_value(json!({
            "name": "Test Coin",
            "symbol": "TEST",
            "image": "https://example.com/image.png"
        }))
        .is_err());

        let err = CreateCoinSchema::from_value(json!({
            "name": "Test Coin",
            "symbol": "TEST",
            "description": "A test coin",
            "image": " "
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameters: image must not be empty");
    }
}
