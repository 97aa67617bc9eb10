// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Node operations used by the token helpers.
//!
//! [`super::ChainClient`] implements this over an alloy HTTP provider; tests
//! use an in-memory fake.

use alloy::{
    primitives::{Address, TxHash, U256},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use super::types::ReceiptStatus;
use crate::error::TokenOpsError;

#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Chain ID reported by the node.
    async fn chain_id(&self) -> Result<u64, TokenOpsError>;

    /// Current legacy gas price in wei.
    async fn gas_price(&self) -> Result<u128, TokenOpsError>;

    /// Next nonce for `address`, counting pending transactions.
    async fn transaction_count(&self, address: Address) -> Result<u64, TokenOpsError>;

    /// Native balance in wei.
    async fn native_balance(&self, address: Address) -> Result<U256, TokenOpsError>;

    async fn token_symbol(&self, token: Address) -> Result<String, TokenOpsError>;

    async fn token_decimals(&self, token: Address) -> Result<u8, TokenOpsError>;

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, TokenOpsError>;

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, TokenOpsError>;

    /// Simulate `tx` and return the gas it would use.
    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, TokenOpsError>;

    /// Submit an EIP-2718 encoded signed transaction.
    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<TxHash, TokenOpsError>;

    /// Receipt state, or `None` when the node does not know the transaction.
    async fn receipt_status(&self, tx_hash: TxHash) -> Result<Option<ReceiptStatus>, TokenOpsError>;
}
