//! Coin SDK
//!
//! Actions depend on [`CoinSdk`] rather than on contract calls directly so a
//! host (or a test) can swap the implementation. [`ZoraCoinsSdk`] is the
//! default and talks to the Zora contracts on Base.

mod clients;
pub mod contracts;
pub mod revert;
pub mod types;
mod zora;

pub use clients::ZoraClients;
pub use types::{
    CreateCoinArgs, CreateCoinOptions, CreateCoinResult, DeployCurrency, DeploymentDetails,
    TradeAsset, TradeAssetType, TradeDirection, TradeParameters, TradeResult,
};
pub use zora::{
    apply_slippage, deploy_request, ensure_mined, pool_pairing, trade_direction, ZoraCoinsSdk,
};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CoinSdk: Send + Sync {
    /// Deploy a new coin and report where it landed
    async fn create_coin(
        &self,
        args: CreateCoinArgs,
        clients: &ZoraClients,
        options: CreateCoinOptions,
    ) -> Result<CreateCoinResult>;

    /// Buy or sell a coin against ETH
    async fn trade_coin(&self, params: TradeParameters, clients: &ZoraClients)
        -> Result<TradeResult>;
}
