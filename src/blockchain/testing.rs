// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory [`ChainRpc`] used by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use alloy::{
    primitives::{keccak256, Address, Bytes, TxHash, U256},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use super::rpc::ChainRpc;
use super::types::ReceiptStatus;
use crate::error::TokenOpsError;

/// Anvil's first default account.
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// One scripted answer to a receipt lookup.
#[derive(Debug, Clone)]
pub enum ReceiptReply {
    Status(Option<ReceiptStatus>),
    Error(String),
    /// The lookup never completes.
    Hang,
}

#[derive(Default)]
struct MockState {
    native_balances: HashMap<Address, U256>,
    decimals: HashMap<Address, u8>,
    symbols: HashMap<Address, String>,
    balances: HashMap<(Address, Address), U256>,
    allowances: HashMap<(Address, Address, Address), U256>,
    receipts: VecDeque<ReceiptReply>,
    estimated: Vec<TransactionRequest>,
    sent: Vec<Bytes>,
    receipt_polls: usize,
    gas_estimate: Option<u64>,
    hang_receipts: bool,
}

/// Scriptable fake node.
///
/// Unscripted receipt lookups report "not found". Unknown tokens fail the
/// contract call the way a node would for an address without code.
pub struct MockChain {
    chain_id: u64,
    gas_price: u128,
    nonce: u64,
    state: Mutex<MockState>,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            chain_id: 324,
            gas_price: 250_000_000,
            nonce: 7,
            state: Mutex::new(MockState {
                gas_estimate: Some(50_000),
                ..MockState::default()
            }),
        }
    }

    /// Unscripted receipt lookups never complete.
    pub fn with_hanging_receipts(self) -> Self {
        self.state().hang_receipts = true;
        self
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn with_native_balance(self, owner: Address, balance: U256) -> Self {
        self.state().native_balances.insert(owner, balance);
        self
    }

    pub fn with_token(self, token: Address, symbol: &str, decimals: u8) -> Self {
        {
            let mut state = self.state();
            state.decimals.insert(token, decimals);
            state.symbols.insert(token, symbol.to_string());
        }
        self
    }

    pub fn with_token_balance(self, token: Address, owner: Address, balance: U256) -> Self {
        self.state().balances.insert((token, owner), balance);
        self
    }

    pub fn with_allowance(
        self,
        token: Address,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Self {
        self.state().allowances.insert((token, owner, spender), value);
        self
    }

    /// Make every gas estimate fail.
    pub fn with_failing_estimate(self) -> Self {
        self.state().gas_estimate = None;
        self
    }

    pub fn with_gas_estimate(self, gas: u64) -> Self {
        self.state().gas_estimate = Some(gas);
        self
    }

    pub fn push_receipt(&self, reply: ReceiptReply) {
        self.state().receipts.push_back(reply);
    }

    pub fn push_status(&self, status: Option<ReceiptStatus>) {
        self.push_receipt(ReceiptReply::Status(status));
    }

    /// Requests passed to `estimate_gas`, in order.
    pub fn estimated(&self) -> Vec<TransactionRequest> {
        self.state().estimated.clone()
    }

    /// Raw transactions passed to `send_raw_transaction`, in order.
    pub fn sent(&self) -> Vec<Bytes> {
        self.state().sent.clone()
    }

    pub fn receipt_polls(&self) -> usize {
        self.state().receipt_polls
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn gas_price_wei(&self) -> u128 {
        self.gas_price
    }
}

impl Default for MockChain {
    fn default() -> Self {
        Self::new()
    }
}

fn no_code(token: Address) -> TokenOpsError {
    TokenOpsError::Contract(format!("no contract at {token}"))
}

#[async_trait]
impl ChainRpc for MockChain {
    async fn chain_id(&self) -> Result<u64, TokenOpsError> {
        Ok(self.chain_id)
    }

    async fn gas_price(&self) -> Result<u128, TokenOpsError> {
        Ok(self.gas_price)
    }

    async fn transaction_count(&self, _address: Address) -> Result<u64, TokenOpsError> {
        Ok(self.nonce)
    }

    async fn native_balance(&self, address: Address) -> Result<U256, TokenOpsError> {
        Ok(self.state().native_balances.get(&address).copied().unwrap_or_default())
    }

    async fn token_symbol(&self, token: Address) -> Result<String, TokenOpsError> {
        self.state().symbols.get(&token).cloned().ok_or_else(|| no_code(token))
    }

    async fn token_decimals(&self, token: Address) -> Result<u8, TokenOpsError> {
        self.state().decimals.get(&token).copied().ok_or_else(|| no_code(token))
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, TokenOpsError> {
        let state = self.state();
        if !state.decimals.contains_key(&token) {
            return Err(no_code(token));
        }
        Ok(state.balances.get(&(token, owner)).copied().unwrap_or_default())
    }

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, TokenOpsError> {
        let state = self.state();
        if !state.decimals.contains_key(&token) {
            return Err(no_code(token));
        }
        Ok(state
            .allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default())
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, TokenOpsError> {
        let mut state = self.state();
        state.estimated.push(tx.clone());
        state
            .gas_estimate
            .ok_or_else(|| TokenOpsError::GasEstimation("execution reverted".to_string()))
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<TxHash, TokenOpsError> {
        self.state().sent.push(Bytes::copy_from_slice(raw));
        Ok(keccak256(raw))
    }

    async fn receipt_status(
        &self,
        _tx_hash: TxHash,
    ) -> Result<Option<ReceiptStatus>, TokenOpsError> {
        let reply = {
            let mut state = self.state();
            state.receipt_polls += 1;
            let fallback = if state.hang_receipts {
                ReceiptReply::Hang
            } else {
                ReceiptReply::Status(None)
            };
            state.receipts.pop_front().unwrap_or(fallback)
        };
        match reply {
            ReceiptReply::Status(status) => Ok(status),
            ReceiptReply::Error(message) => Err(TokenOpsError::Rpc(message)),
            ReceiptReply::Hang => std::future::pending().await,
        }
    }
}
