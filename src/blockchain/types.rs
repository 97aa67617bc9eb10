// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use std::fmt;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// zkSync Era network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// zkSync Era Mainnet configuration.
pub const ZKSYNC_MAINNET: NetworkConfig = NetworkConfig {
    name: "zkSync Era",
    chain_id: 324,
    rpc_url: "https://mainnet.era.zksync.io",
    explorer_url: "https://explorer.zksync.io",
};

/// zkSync Era Sepolia Testnet configuration.
pub const ZKSYNC_SEPOLIA: NetworkConfig = NetworkConfig {
    name: "zkSync Era Sepolia",
    chain_id: 300,
    rpc_url: "https://sepolia.era.zksync.dev",
    explorer_url: "https://sepolia.explorer.zksync.io",
};

/// Resolve a network preset by its short name (`mainnet` / `sepolia`).
pub fn network_by_name(raw: &str) -> Option<NetworkConfig> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mainnet" => Some(ZKSYNC_MAINNET),
        "sepolia" => Some(ZKSYNC_SEPOLIA),
        _ => None,
    }
}

/// Symbol of the native currency on zkSync Era.
pub const NATIVE_SYMBOL: &str = "ETH";

/// Decimals of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Token balance information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Token symbol (e.g., "ETH", "USDC")
    pub symbol: String,
    /// Balance in smallest unit (wei for native, token decimals for ERC-20)
    pub balance_raw: U256,
    /// Balance formatted with decimals
    pub balance_formatted: String,
    /// Number of decimals
    pub decimals: u8,
    /// Contract address (None for native token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

/// Receipt state as reported by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    /// Receipt exists but is not part of a block yet.
    Pending,
    /// Mined with status 1.
    Success,
    /// Mined with a non-1 status.
    Failed,
}

/// Final result of waiting on a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxOutcome {
    /// Mined with status 1.
    Confirmed,
    /// Mined but reverted.
    Reverted,
    /// The node never returned a receipt within the timeout.
    NotFound,
    /// A receipt was seen but never left the pending state within the timeout.
    TimedOut,
}

impl TxOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TxOutcome::Confirmed)
    }
}

impl fmt::Display for TxOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TxOutcome::Confirmed => "confirmed",
            TxOutcome::Reverted => "reverted",
            TxOutcome::NotFound => "not found",
            TxOutcome::TimedOut => "timed out",
        };
        f.write_str(text)
    }
}
