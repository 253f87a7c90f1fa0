//! Shared pieces of the action parameter schemas

use crate::{Error, Result};
use alloy::primitives::Address;
use schemars::{json_schema, schema_for, JsonSchema, Schema, SchemaGenerator};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Pattern every address parameter must match
pub const ADDRESS_PATTERN: &str = "^0x[a-fA-F0-9]{40}$";

fn hex_address_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "pattern": ADDRESS_PATTERN,
        "description": "0x-prefixed 20-byte hex address"
    })
}

fn is_hex_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// An address that arrived as text and matched [`ADDRESS_PATTERN`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, TS)]
#[serde(try_from = "String", into = "String")]
#[schemars(schema_with = "hex_address_schema")]
#[ts(type = "string")]
pub struct HexAddress(pub Address);

impl HexAddress {
    pub fn address(&self) -> Address {
        self.0
    }
}

impl TryFrom<String> for HexAddress {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        if !is_hex_address(&value) {
            return Err(format!(
                "Invalid address \"{}\": expected 0x followed by 40 hex characters",
                value
            ));
        }
        value
            .parse::<Address>()
            .map(HexAddress)
            .map_err(|e| format!("Invalid address \"{}\": {}", value, e))
    }
}

impl From<HexAddress> for String {
    fn from(value: HexAddress) -> Self {
        value.0.to_checksum(None)
    }
}

impl From<Address> for HexAddress {
    fn from(value: Address) -> Self {
        Self(value)
    }
}

pub fn default_category() -> String {
    "social".to_string()
}

/// Structured parameters the model extracts for an action
pub trait ActionParameters: DeserializeOwned + JsonSchema {
    /// Checks serde cannot express
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// JSON schema handed to the model
    fn extraction_schema() -> Value {
        schema_for!(Self).into()
    }

    /// Deserialize and validate a model-produced object
    fn from_value(value: Value) -> Result<Self> {
        let params: Self =
            serde_json::from_value(value).map_err(|e| Error::InvalidParameters(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}
