//! Solidity bindings for the Zora coin factory and coin contracts

use alloy::primitives::Log;
use alloy::sol;
use alloy::sol_types::SolEvent;

sol! {
    #[sol(rpc)]
    interface IZoraFactory {
        event CoinCreated(
            address indexed caller,
            address indexed payoutRecipient,
            address indexed platformReferrer,
            address currency,
            string uri,
            string name,
            string symbol,
            address coin,
            address pool,
            string version
        );

        function deploy(
            address payoutRecipient,
            address[] owners,
            string uri,
            string name,
            string symbol,
            address platformReferrer,
            address currency,
            int24 tickLower,
            uint256 orderSize
        ) external payable returns (address coin, uint256 coinsPurchased);
    }

    #[sol(rpc)]
    interface ICoin {
        function buy(
            address recipient,
            uint256 orderSize,
            uint256 minAmountOut,
            uint160 sqrtPriceLimitX96,
            address tradeReferrer
        ) external payable returns (uint256 amountIn, uint256 amountOut);

        function sell(
            address recipient,
            uint256 orderSize,
            uint256 minAmountOut,
            uint160 sqrtPriceLimitX96,
            address tradeReferrer
        ) external returns (uint256 amountIn, uint256 amountOut);
    }
}

/// First `CoinCreated` event among the receipt logs
pub fn coin_created_from_logs(logs: &[Log]) -> Option<IZoraFactory::CoinCreated> {
    logs.iter().find_map(|log| {
        if log.topics().first() != Some(&IZoraFactory::CoinCreated::SIGNATURE_HASH) {
            return None;
        }
        IZoraFactory::CoinCreated::decode_log_data(&log.data).ok()
    })
}
