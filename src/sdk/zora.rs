//! Coin SDK backed by the Zora factory and coin contracts

use crate::config::{Network, PluginSettings};
use crate::sdk::contracts::{coin_created_from_logs, ICoin, IZoraFactory};
use crate::sdk::revert::revert_reason;
use crate::sdk::types::{
    CreateCoinArgs, CreateCoinOptions, CreateCoinResult, DeployCurrency, DeploymentDetails,
    TradeAsset, TradeAssetType, TradeDirection, TradeParameters, TradeResult,
};
use crate::sdk::{CoinSdk, ZoraClients};
use crate::tokens::ZoraContracts;
use crate::{Error, Result};
use alloy::primitives::aliases::{I24, U160};
use alloy::primitives::{Address, B256, U256};
use alloy::rpc::types::TransactionReceipt;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Lower pool tick for coins paired with ETH
const ETH_PAIR_LOWER_TICK: i32 = -208_200;
/// Lower pool tick for coins paired with ZORA
const ZORA_PAIR_LOWER_TICK: i32 = -138_000;

const BPS_DENOMINATOR: u64 = 10_000;

fn sdk_error(action: &str, err: impl std::fmt::Display) -> Error {
    Error::Sdk(format!("{}: {}", action, revert_reason(&err.to_string())))
}

/// Minimum acceptable output for a quoted amount under a slippage fraction
pub fn apply_slippage(quoted: U256, slippage: f64) -> Result<U256> {
    if !slippage.is_finite() || !(0.0..=1.0).contains(&slippage) {
        return Err(Error::Sdk(format!(
            "Slippage must be between 0 and 1, got {}",
            slippage
        )));
    }
    let bps = (slippage * BPS_DENOMINATOR as f64).round() as u64;
    Ok(quoted * U256::from(BPS_DENOMINATOR - bps) / U256::from(BPS_DENOMINATOR))
}

/// Work out whether a trade buys or sells a coin, and which coin
pub fn trade_direction(sell: &TradeAsset, buy: &TradeAsset) -> Result<(TradeDirection, Address)> {
    match (sell.kind, buy.kind) {
        (TradeAssetType::Eth, TradeAssetType::Erc20) => buy
            .address
            .map(|coin| (TradeDirection::Buy, coin))
            .ok_or_else(|| Error::Sdk("Buy side is missing the coin address".to_string())),
        (TradeAssetType::Erc20, TradeAssetType::Eth) => sell
            .address
            .map(|coin| (TradeDirection::Sell, coin))
            .ok_or_else(|| Error::Sdk("Sell side is missing the coin address".to_string())),
        (sell_kind, buy_kind) => Err(Error::Sdk(format!(
            "Unsupported trade pair: {:?} -> {:?}. Exactly one side must be a coin",
            sell_kind, buy_kind
        ))),
    }
}

/// Pool currency and lower tick for a coin deployed on `network`
pub fn pool_pairing(network: Network, currency: DeployCurrency) -> Result<(Address, I24)> {
    let contracts = ZoraContracts::for_network(network);
    let (address, tick) = match currency {
        DeployCurrency::Zora => {
            let token = contracts.zora_token.ok_or_else(|| {
                Error::Sdk(format!(
                    "ZORA is not supported on {}. Use ETH as the currency",
                    network
                ))
            })?;
            (token, ZORA_PAIR_LOWER_TICK)
        }
        DeployCurrency::Eth => (contracts.weth, ETH_PAIR_LOWER_TICK),
    };
    let tick = I24::try_from(tick).map_err(|e| Error::Sdk(format!("Invalid tick: {}", e)))?;
    Ok((address, tick))
}

/// Factory `deploy` call for `args` on `network`
pub fn deploy_request(
    args: &CreateCoinArgs,
    network: Network,
) -> Result<IZoraFactory::deployCall> {
    let (currency, tick_lower) = pool_pairing(network, args.currency)?;
    Ok(IZoraFactory::deployCall {
        payoutRecipient: args.payout_recipient,
        owners: args.owners_or_default(),
        uri: args.uri.clone(),
        name: args.name.clone(),
        symbol: args.symbol.clone(),
        platformReferrer: args.platform_referrer.unwrap_or(Address::ZERO),
        currency,
        tickLower: tick_lower,
        orderSize: args.initial_purchase_wei,
    })
}

/// Fail when a mined transaction did not succeed
pub fn ensure_mined(what: &str, success: bool, hash: B256) -> Result<()> {
    if success {
        Ok(())
    } else {
        Err(Error::Sdk(format!("{} reverted in transaction {}", what, hash)))
    }
}

/// Coin SDK speaking directly to the Zora contracts through alloy
#[derive(Debug, Clone, Default)]
pub struct ZoraCoinsSdk {
    settings: PluginSettings,
}

impl ZoraCoinsSdk {
    pub fn new(settings: PluginSettings) -> Self {
        Self { settings }
    }

    fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.receipt_timeout_secs)
    }

    /// Simulate the trade with `eth_call` on the public client and return the
    /// quoted output amount
    pub async fn quote_trade(
        &self,
        direction: TradeDirection,
        coin_address: Address,
        params: &TradeParameters,
        clients: &ZoraClients,
    ) -> Result<U256> {
        let quoter = ICoin::new(coin_address, clients.public_client.clone());
        let recipient = params.sender;
        let amount_out = match direction {
            TradeDirection::Buy => quoter
                .buy(recipient, params.amount_in, U256::ZERO, U160::ZERO, Address::ZERO)
                .value(params.amount_in)
                .from(params.sender)
                .call()
                .await
                .map(|quote| quote.amountOut),
            TradeDirection::Sell => quoter
                .sell(recipient, params.amount_in, U256::ZERO, U160::ZERO, Address::ZERO)
                .from(params.sender)
                .call()
                .await
                .map(|quote| quote.amountOut),
        };
        amount_out.map_err(|e| sdk_error("Trade simulation failed", e))
    }
}

fn receipt_logs(receipt: &TransactionReceipt) -> Vec<alloy::primitives::Log> {
    receipt
        .inner
        .logs()
        .iter()
        .map(|log| log.inner.clone())
        .collect()
}

#[async_trait]
impl CoinSdk for ZoraCoinsSdk {
    async fn create_coin(
        &self,
        args: CreateCoinArgs,
        clients: &ZoraClients,
        options: CreateCoinOptions,
    ) -> Result<CreateCoinResult> {
        let request = deploy_request(&args, clients.network)?;
        let factory_address = ZoraContracts::for_network(clients.network).factory;
        let factory = IZoraFactory::new(factory_address, clients.wallet_client.clone());

        let call = factory
            .call_builder(&request)
            .value(args.initial_purchase_wei)
            .from(clients.account);

        let estimate = call
            .estimate_gas()
            .await
            .map_err(|e| sdk_error("Failed to estimate deployment gas", e))?;
        let multiplier = options
            .gas_multiplier_percent
            .unwrap_or(self.settings.gas_multiplier_percent);
        let gas_limit = estimate.saturating_mul(multiplier) / 100;
        debug!(estimate, gas_limit, currency = args.currency.as_str(), "Deploying coin");

        let receipt = call
            .gas(gas_limit)
            .send()
            .await
            .map_err(|e| sdk_error("Failed to submit deployment", e))?
            .with_timeout(Some(self.receipt_timeout()))
            .get_receipt()
            .await
            .map_err(|e| sdk_error("Failed to confirm deployment", e))?;

        ensure_mined("Coin deployment", receipt.status(), receipt.transaction_hash)?;

        let deployment = coin_created_from_logs(&receipt_logs(&receipt)).map(DeploymentDetails::from);
        let address = deployment.as_ref().map(|d| d.coin);
        info!(
            tx_hash = %receipt.transaction_hash,
            coin = ?address,
            symbol = %args.symbol,
            "Coin deployed"
        );

        Ok(CreateCoinResult {
            hash: receipt.transaction_hash,
            address,
            deployment,
        })
    }

    async fn trade_coin(
        &self,
        params: TradeParameters,
        clients: &ZoraClients,
    ) -> Result<TradeResult> {
        let (direction, coin_address) = trade_direction(&params.sell, &params.buy)?;
        if params.amount_in.is_zero() {
            return Err(Error::Sdk("Trade amount must be greater than zero".to_string()));
        }

        let quoted = self
            .quote_trade(direction, coin_address, &params, clients)
            .await?;
        let min_amount_out = apply_slippage(quoted, params.slippage)?;
        debug!(%quoted, %min_amount_out, ?direction, "Trade quote");

        let coin = ICoin::new(coin_address, clients.wallet_client.clone());
        let recipient = params.sender;
        let pending = match direction {
            TradeDirection::Buy => {
                coin.buy(recipient, params.amount_in, min_amount_out, U160::ZERO, Address::ZERO)
                    .value(params.amount_in)
                    .from(params.sender)
                    .send()
                    .await
            }
            TradeDirection::Sell => {
                coin.sell(recipient, params.amount_in, min_amount_out, U160::ZERO, Address::ZERO)
                    .from(params.sender)
                    .send()
                    .await
            }
        }
        .map_err(|e| sdk_error("Failed to submit trade", e))?;

        let receipt = pending
            .with_timeout(Some(self.receipt_timeout()))
            .get_receipt()
            .await
            .map_err(|e| sdk_error("Failed to confirm trade", e))?;

        ensure_mined("Trade", receipt.status(), receipt.transaction_hash)?;
        info!(
            tx_hash = %receipt.transaction_hash,
            coin = %coin_address,
            ?direction,
            "Trade executed"
        );

        Ok(TradeResult {
            hash: receipt.transaction_hash,
            direction,
            coin: coin_address,
            amount_in: params.amount_in,
            min_amount_out,
            block_number: receipt.block_number,
        })
    }
}
