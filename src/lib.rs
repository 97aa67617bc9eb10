// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! zkSync Token Ops - ERC-20 helpers for zkSync Era
//!
//! Balance lookup, amount conversion, allowance checks and approval
//! transactions against a zkSync Era JSON-RPC endpoint.
//!
//! ## Modules
//!
//! - `blockchain` - Token operations, signing and confirmation polling
//! - `config` - Settings loaded from the environment
//! - `error` - Error type returned by every operation

pub mod blockchain;
pub mod config;
pub mod error;

pub use error::TokenOpsError;
