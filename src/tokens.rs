//! Contract and token registry for the Base networks
//!
//! Single source of truth for the Zora coin factory and the currencies a
//! coin can be paired with at deployment.

use crate::config::Network;
use alloy::primitives::{address, Address};

/// Well-known addresses
pub mod addresses {
    use super::*;

    /// Zora coin factory (same deterministic address on Base and Base Sepolia)
    pub const ZORA_FACTORY: Address = address!("777777751622c0d3258f214f9df38e35bf45baf3");

    /// ZORA token on Base mainnet
    pub const ZORA_TOKEN_BASE: Address = address!("1111111111166b7fe7bd91427724b487980afc69");

    /// Wrapped ether (OP-stack predeploy, identical on both networks)
    pub const WETH_BASE: Address = address!("4200000000000000000000000000000000000006");
}

/// Contracts the coin SDK talks to on a given network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoraContracts {
    pub factory: Address,
    pub weth: Address,
    /// `None` where the ZORA token is not deployed
    pub zora_token: Option<Address>,
}

impl ZoraContracts {
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::BaseMainnet => Self {
                factory: addresses::ZORA_FACTORY,
                weth: addresses::WETH_BASE,
                zora_token: Some(addresses::ZORA_TOKEN_BASE),
            },
            Network::BaseSepolia => Self {
                factory: addresses::ZORA_FACTORY,
                weth: addresses::WETH_BASE,
                zora_token: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zora_token_only_on_mainnet() {
        let mainnet = ZoraContracts::for_network(Network::BaseMainnet);
        assert_eq!(mainnet.zora_token, Some(addresses::ZORA_TOKEN_BASE));

        let sepolia = ZoraContracts::for_network(Network::BaseSepolia);
        assert!(sepolia.zora_token.is_none());
        assert_eq!(sepolia.factory, mainnet.factory);
    }
}
