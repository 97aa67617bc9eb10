// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Human amount <-> base unit conversion and balance lookup.

use alloy::primitives::{Address, U256};

use super::account::Account;
use super::rpc::ChainRpc;
use super::tokens::TokenRegistry;
use super::types::{TokenBalance, NATIVE_DECIMALS, NATIVE_SYMBOL};
use crate::error::TokenOpsError;

fn is_native(symbol: &str) -> bool {
    symbol.eq_ignore_ascii_case(NATIVE_SYMBOL)
}

/// `10^decimals`, or `None` when it does not fit in a `U256` (`decimals > 77`).
fn decimal_scale(decimals: u8) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(decimals))
}

/// Parse a human-readable amount to base units.
///
/// # Arguments
/// * `amount` - Amount as a string (e.g., "1.5")
/// * `decimals` - Number of decimals (18 for ETH, 6 for USDC)
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, TokenOpsError> {
    let amount = amount.trim();
    let invalid = |reason: &str| TokenOpsError::InvalidAmount(format!("{amount:?}: {reason}"));

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("empty amount"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected digits with an optional decimal point"));
    }
    let multiplier = decimal_scale(decimals)
        .ok_or_else(|| invalid(&format!("unsupported token decimals {decimals}")))?;
    if fraction.len() > decimals as usize {
        return Err(invalid(&format!("too many decimal places (max {decimals})")));
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        whole.parse::<U256>().map_err(|_| invalid("amount overflow"))?
    };

    // Pad with zeros to match decimals
    let padded = format!("{:0<width$}", fraction, width = decimals as usize);
    let fraction = if padded.is_empty() {
        U256::ZERO
    } else {
        padded.parse::<U256>().map_err(|_| invalid("amount overflow"))?
    };

    whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(|| invalid("amount overflow"))
}

/// Format base units to a human-readable amount.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    // A scale beyond U256 is larger than any amount, so everything is fractional.
    let (whole, remainder) = match decimal_scale(decimals) {
        Some(divisor) => (amount / divisor, amount % divisor),
        None => (U256::ZERO, amount),
    };

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        format!("{}.{}", whole, trimmed)
    }
}

/// Convert a human amount of `symbol` to base units.
///
/// `ETH` uses the fixed native scale; any other symbol is scaled by the
/// `decimals()` its contract reports.
pub async fn amount_to_base_units<R: ChainRpc + ?Sized>(
    rpc: &R,
    registry: &TokenRegistry,
    symbol: &str,
    amount: &str,
) -> Result<U256, TokenOpsError> {
    if is_native(symbol) {
        return parse_amount(amount, NATIVE_DECIMALS);
    }

    let token = registry.address_of(symbol)?;
    let decimals = rpc.token_decimals(token).await?;
    tracing::debug!(symbol, %token, decimals, "Resolved token decimals");
    parse_amount(amount, decimals)
}

/// Balance of `account` in `symbol`.
pub async fn get_balance<R: ChainRpc + ?Sized>(
    rpc: &R,
    registry: &TokenRegistry,
    symbol: &str,
    account: &Account,
) -> Result<TokenBalance, TokenOpsError> {
    get_balance_of(rpc, registry, symbol, account.address()).await
}

/// Balance of an arbitrary `owner` address in `symbol`.
pub async fn get_balance_of<R: ChainRpc + ?Sized>(
    rpc: &R,
    registry: &TokenRegistry,
    symbol: &str,
    owner: Address,
) -> Result<TokenBalance, TokenOpsError> {
    if is_native(symbol) {
        let balance = rpc.native_balance(owner).await?;
        return Ok(TokenBalance {
            symbol: NATIVE_SYMBOL.to_string(),
            balance_raw: balance,
            balance_formatted: format_amount(balance, NATIVE_DECIMALS),
            decimals: NATIVE_DECIMALS,
            contract_address: None,
        });
    }

    let token = registry.address_of(symbol)?;
    let symbol = rpc.token_symbol(token).await?;
    let decimals = rpc.token_decimals(token).await?;
    let balance = rpc.token_balance(token, owner).await?;

    Ok(TokenBalance {
        symbol,
        balance_raw: balance,
        balance_formatted: format_amount(balance, decimals),
        decimals,
        contract_address: Some(token.to_checksum(None)),
    })
}
