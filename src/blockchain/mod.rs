// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for zkSync Era.
//!
//! This module provides functionality for:
//! - Converting human amounts to base units and querying balances
//! - Checking ERC-20 allowances and sending approvals
//! - Transaction signing, broadcasting and confirmation polling

pub mod abi;
pub mod account;
pub mod amounts;
pub mod approval;
pub mod client;
pub mod confirmation;
pub mod erc20;
pub mod rpc;
pub mod tokens;
pub mod transactions;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use account::Account;
pub use amounts::{amount_to_base_units, format_amount, get_balance, get_balance_of, parse_amount};
pub use approval::{approve, check_token_allowance, ApprovalOutcome, ApprovalPolicy, MAX_APPROVAL};
pub use client::ChainClient;
pub use confirmation::wait_for_transaction;
pub use rpc::ChainRpc;
pub use tokens::{parse_address, TokenRegistry};
pub use transactions::{send_raw_transaction, sign_and_send, sign_transaction, SignedTransaction};
pub use types::*;
