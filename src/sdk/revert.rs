//! Readable messages from RPC and contract failures

use alloy::hex;
use alloy::sol_types::{Revert, SolError};

const REASON_MARKER: &str = "revert: ";

/// Longest `0x`-prefixed hex run in `text`, without the prefix
fn revert_data(text: &str) -> Option<&str> {
    text.match_indices("0x")
        .map(|(start, _)| {
            let body = &text[start + 2..];
            let len = body
                .find(|c: char| !c.is_ascii_hexdigit())
                .unwrap_or(body.len());
            &body[..len]
        })
        .filter(|data| !data.is_empty() && data.len() % 2 == 0)
        .max_by_key(|data| data.len())
}

/// Extract a revert reason from an RPC error message
///
/// Anything that is not a revert comes back unchanged. Custom errors that
/// cannot be decoded are reported with their raw data.
pub fn revert_reason(error: &str) -> String {
    if !error.contains("execution reverted") {
        return error.to_string();
    }

    if let Some((_, reason)) = error.split_once(REASON_MARKER) {
        return reason.split('"').next().unwrap_or(reason).to_string();
    }

    let Some(data) = revert_data(error) else {
        return "execution reverted".to_string();
    };

    hex::decode(data)
        .ok()
        .and_then(|bytes| Revert::abi_decode(&bytes).ok())
        .map(|revert| revert.reason)
        .unwrap_or_else(|| format!("Reverted with data: 0x{}", data))
}
