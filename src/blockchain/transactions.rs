// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction signing and broadcasting for zkSync Era.
//!
//! Gas is estimated through the node, padded by a caller-supplied
//! multiplier, and the transaction is signed locally before the raw bytes
//! are submitted.

use alloy::{
    eips::eip2718::Encodable2718,
    network::{Ethereum, TransactionBuilder},
    primitives::{Bytes, TxHash},
    rpc::types::TransactionRequest,
};

use super::account::Account;
use super::rpc::ChainRpc;
use crate::error::TokenOpsError;

/// A signed, EIP-2718 encoded transaction ready for broadcast.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    /// Hash of the signed transaction
    pub tx_hash: TxHash,
    /// Encoded bytes for `eth_sendRawTransaction`
    pub raw: Bytes,
    /// Gas limit that was signed
    pub gas_limit: u64,
}

/// Scale a gas estimate, truncating toward zero.
pub fn apply_gas_multiplier(gas: u64, multiplier: f64) -> Result<u64, TokenOpsError> {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(TokenOpsError::InvalidGasMultiplier(multiplier));
    }
    let scaled = (gas as f64 * multiplier).floor();
    if scaled > u64::MAX as f64 {
        return Err(TokenOpsError::InvalidGasMultiplier(multiplier));
    }
    Ok(scaled as u64)
}

/// Estimate gas for `tx`, apply `gas_multiplier`, and sign with `account`.
///
/// `tx` must already carry nonce, gas price and chain id.
pub async fn sign_transaction<R: ChainRpc + ?Sized>(
    rpc: &R,
    tx: TransactionRequest,
    account: &Account,
    gas_multiplier: f64,
) -> Result<SignedTransaction, TokenOpsError> {
    let tx = tx.with_from(account.address());

    let estimate = rpc.estimate_gas(&tx).await?;
    let gas_limit = apply_gas_multiplier(estimate, gas_multiplier)?;
    tracing::debug!(estimate, gas_limit, gas_multiplier, "Gas estimated");

    let tx = tx.with_gas_limit(gas_limit);
    let envelope = TransactionBuilder::<Ethereum>::build(tx, &account.wallet())
        .await
        .map_err(|e| TokenOpsError::Signing(e.to_string()))?;

    Ok(SignedTransaction {
        tx_hash: *envelope.tx_hash(),
        raw: envelope.encoded_2718().into(),
        gas_limit,
    })
}

/// Submit a signed transaction and return the hash the node reports.
pub async fn send_raw_transaction<R: ChainRpc + ?Sized>(
    rpc: &R,
    signed: &SignedTransaction,
) -> Result<TxHash, TokenOpsError> {
    let tx_hash = rpc.send_raw_transaction(&signed.raw).await?;
    if tx_hash != signed.tx_hash {
        tracing::warn!(
            local = %signed.tx_hash,
            remote = %tx_hash,
            "Node reported a different transaction hash"
        );
    }
    tracing::info!(tx_hash = %tx_hash, gas_limit = signed.gas_limit, "Transaction broadcast");
    Ok(tx_hash)
}

/// Sign `tx` and broadcast it.
pub async fn sign_and_send<R: ChainRpc + ?Sized>(
    rpc: &R,
    tx: TransactionRequest,
    account: &Account,
    gas_multiplier: f64,
) -> Result<TxHash, TokenOpsError> {
    let signed = sign_transaction(rpc, tx, account, gas_multiplier).await?;
    send_raw_transaction(rpc, &signed).await
}
