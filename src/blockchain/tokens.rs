// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token and protocol contract addresses on zkSync Era.

use std::collections::HashMap;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::error::TokenOpsError;

/// ERC-20 contracts used for transactions on zkSync Era mainnet.
///
/// `ETH` carries the wrapped-ETH address; amount and balance lookups still
/// treat it as the native currency.
pub const ZKSYNC_TOKENS: &[(&str, &str)] = &[
    ("ETH", "0x5aea5775959fbc2557cc8789bc1bf90a239d9a91"),
    ("WETH", "0x5aea5775959fbc2557cc8789bc1bf90a239d9a91"),
    ("WBTC", "0xbbeb516fb02a01611cbbe0453fe3c580d7281011"),
    ("USDT", "0x493257fd37edb34451f62edf8d2a0c418852ba4c"),
    ("USDC", "0x3355df6D4c9C3035724Fd0e3914dE96A5a83aaf4"),
    ("BUSD", "0x2039bb4116b4efc145ec4f0e2ea75012d6c0f181"),
    ("MATIC", "0x28a487240e4d45cff4a2980d334cc933b7483842"),
];

/// SyncSwap router, the usual spender for swap approvals.
pub const SYNCSWAP_ROUTER: &str = "0x2da10A1e27bF85cEdD8FFb1AbBe97e53391C0295";

/// SyncSwap classic pool factory.
pub const SYNCSWAP_CLASSIC_POOL: &str = "0xf2DAd89f2788a8CD54625C60b55cD3d2D0ACa7Cb";

/// Parse a hex address, accepting any checksum casing.
pub fn parse_address(raw: &str) -> Result<Address, TokenOpsError> {
    Address::from_str(raw.trim()).map_err(|e| TokenOpsError::InvalidAddress(format!("{raw}: {e}")))
}

/// Immutable symbol -> contract address table, built once at startup.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<String, Address>,
}

impl TokenRegistry {
    /// Build a registry from `(symbol, address)` pairs.
    pub fn from_entries(entries: &[(&str, &str)]) -> Result<Self, TokenOpsError> {
        let mut tokens = HashMap::with_capacity(entries.len());
        for (symbol, address) in entries {
            tokens.insert(symbol.to_ascii_uppercase(), parse_address(address)?);
        }
        Ok(Self { tokens })
    }

    /// Registry for zkSync Era mainnet.
    pub fn zksync() -> Result<Self, TokenOpsError> {
        Self::from_entries(ZKSYNC_TOKENS)
    }

    /// Contract address for a symbol (case-insensitive).
    pub fn address_of(&self, symbol: &str) -> Result<Address, TokenOpsError> {
        self.tokens
            .get(&symbol.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| TokenOpsError::UnknownToken(symbol.to_string()))
    }

    /// Known symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.tokens.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}
