// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error type shared by every token operation.

use alloy::primitives::TxHash;

use crate::blockchain::TxOutcome;

/// Errors that can occur during token operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenOpsError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown token symbol: {0}")]
    UnknownToken(String),

    #[error("Invalid gas multiplier: {0}")]
    InvalidGasMultiplier(f64),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Gas estimation failed: {0}")]
    GasEstimation(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Broadcast failed: {0}")]
    Broadcast(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Transaction {tx_hash} did not succeed: {outcome}")]
    TransactionFailed { tx_hash: TxHash, outcome: TxOutcome },
}
