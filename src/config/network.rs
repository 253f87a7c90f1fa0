//! Networks the coin plugins can be bound to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Protocol family reported by wallet providers
pub const EVM_PROTOCOL_FAMILY: &str = "evm";

/// Supported Base networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    BaseMainnet,
    BaseSepolia,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::BaseMainnet => 8453,
            Network::BaseSepolia => 84532,
        }
    }

    /// Network identifier as used by wallet providers (`base-mainnet`)
    pub fn network_id(&self) -> &'static str {
        match self {
            Network::BaseMainnet => "base-mainnet",
            Network::BaseSepolia => "base-sepolia",
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            8453 => Some(Network::BaseMainnet),
            84532 => Some(Network::BaseSepolia),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.network_id())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" | "base-mainnet" | "8453" => Ok(Network::BaseMainnet),
            "base-sepolia" | "84532" => Ok(Network::BaseSepolia),
            other => Err(other.to_string()),
        }
    }
}

/// Network descriptor a wallet provider reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub protocol_family: String,
    pub network_id: Option<String>,
    pub chain_id: Option<u64>,
}

impl From<Network> for NetworkDescriptor {
    fn from(network: Network) -> Self {
        Self {
            protocol_family: EVM_PROTOCOL_FAMILY.to_string(),
            network_id: Some(network.network_id().to_string()),
            chain_id: Some(network.chain_id()),
        }
    }
}

impl NetworkDescriptor {
    /// The Base network this descriptor names, if any
    ///
    /// Only EVM descriptors resolve. The network id wins over the chain id.
    pub fn base_network(&self) -> Option<Network> {
        if self.protocol_family != EVM_PROTOCOL_FAMILY {
            return None;
        }
        match (&self.network_id, self.chain_id) {
            (Some(id), _) => match id.as_str() {
                "base-mainnet" => Some(Network::BaseMainnet),
                "base-sepolia" => Some(Network::BaseSepolia),
                _ => None,
            },
            (None, Some(chain_id)) => Network::from_chain_id(chain_id),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("base".parse::<Network>(), Ok(Network::BaseMainnet));
        assert_eq!("Base-Sepolia".parse::<Network>(), Ok(Network::BaseSepolia));
        assert_eq!("84532".parse::<Network>(), Ok(Network::BaseSepolia));
        assert!("ethereum".parse::<Network>().is_err());
    }

    #[test]
    fn chain_ids_round_trip() {
        for network in [Network::BaseMainnet, Network::BaseSepolia] {
            assert_eq!(Network::from_chain_id(network.chain_id()), Some(network));
        }
        assert_eq!(Network::from_chain_id(1), None);
    }

    #[test]
    fn descriptors_resolve_only_base_evm() {
        let descriptor = |family: &str, id: Option<&str>, chain: Option<u64>| NetworkDescriptor {
            protocol_family: family.to_string(),
            network_id: id.map(str::to_string),
            chain_id: chain,
        };

        assert_eq!(
            descriptor("evm", Some("base-mainnet"), None).base_network(),
            Some(Network::BaseMainnet)
        );
        assert_eq!(
            descriptor("evm", None, Some(84532)).base_network(),
            Some(Network::BaseSepolia)
        );
        assert_eq!(descriptor("evm", Some("ethereum"), Some(8453)).base_network(), None);
        assert_eq!(descriptor("svm", Some("base-mainnet"), None).base_network(), None);
        assert_eq!(
            NetworkDescriptor::from(Network::BaseSepolia).base_network(),
            Some(Network::BaseSepolia)
        );
    }
}
