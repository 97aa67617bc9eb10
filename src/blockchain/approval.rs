// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 allowance checks and approval transactions.

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    rpc::types::TransactionRequest,
};
use tracing::info;

use super::account::Account;
use super::confirmation::{
    wait_for_transaction, DEFAULT_CONFIRMATION_TIMEOUT, DEFAULT_POLL_INTERVAL,
};
use super::erc20::approve_calldata;
use super::rpc::ChainRpc;
use super::transactions::sign_and_send;
use crate::error::TokenOpsError;

/// Allowance granted when escalating, large enough that the spender never
/// needs another approval.
pub const MAX_APPROVAL: U256 = U256::from_limbs([0, 0, 1, 0]);

/// Default pause after a confirmed approval.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(10);

/// Knobs for the approval flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalPolicy {
    /// Gas headroom applied to the estimate
    pub gas_multiplier: f64,
    /// How long to wait for the approval receipt
    pub confirmation_timeout: Duration,
    /// Interval between receipt lookups
    pub poll_interval: Duration,
    /// Pause after confirmation before returning to the caller
    pub settle_delay: Duration,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self {
            gas_multiplier: 1.0,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Result of [`approve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Existing allowance already covers the amount; nothing was sent.
    AlreadyApproved { allowance: U256 },
    /// An approval transaction was mined successfully.
    Approved { tx_hash: TxHash, approved_amount: U256 },
}

/// Amount to approve given the requested amount and the current allowance,
/// or `None` when no approval is needed.
///
/// A zero request always sends an approval of zero.
pub fn approval_amount(requested: U256, allowance: U256) -> Option<U256> {
    if requested > allowance {
        Some(MAX_APPROVAL)
    } else if requested.is_zero() {
        Some(U256::ZERO)
    } else {
        None
    }
}

/// Amount `spender` may currently transfer from `account`.
pub async fn check_token_allowance<R: ChainRpc + ?Sized>(
    rpc: &R,
    token: Address,
    spender: Address,
    account: &Account,
) -> Result<U256, TokenOpsError> {
    rpc.token_allowance(token, account.address(), spender).await
}

/// Make sure `spender` may move `amount` base units of `token` for `account`.
pub async fn approve<R: ChainRpc + ?Sized>(
    rpc: &R,
    account: &Account,
    token: Address,
    spender: Address,
    amount: U256,
    policy: &ApprovalPolicy,
) -> Result<ApprovalOutcome, TokenOpsError> {
    let owner = account.address();
    let allowance = check_token_allowance(rpc, token, spender, account).await?;

    let Some(approved_amount) = approval_amount(amount, allowance) else {
        info!(%owner, %token, %spender, %allowance, "Allowance already sufficient");
        return Ok(ApprovalOutcome::AlreadyApproved { allowance });
    };

    info!(%owner, %token, %spender, %approved_amount, "Sending approval");

    let tx = TransactionRequest::default()
        .with_chain_id(rpc.chain_id().await?)
        .with_from(owner)
        .with_nonce(rpc.transaction_count(owner).await?)
        .with_gas_price(rpc.gas_price().await?)
        .with_to(token)
        .with_input(approve_calldata(spender, approved_amount));

    let tx_hash = sign_and_send(rpc, tx, account, policy.gas_multiplier).await?;

    let outcome = wait_for_transaction(
        rpc,
        tx_hash,
        owner,
        policy.confirmation_timeout,
        policy.poll_interval,
    )
    .await?;

    if !outcome.is_success() {
        return Err(TokenOpsError::TransactionFailed { tx_hash, outcome });
    }

    tokio::time::sleep(policy.settle_delay).await;

    Ok(ApprovalOutcome::Approved {
        tx_hash,
        approved_amount,
    })
}
