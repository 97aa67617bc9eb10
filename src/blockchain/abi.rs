// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Default ERC-20 JSON ABI.
//!
//! The typed bindings in [`super::erc20`] are what the crate calls through.
//! The JSON file is the contract interface shipped alongside the binary; it is
//! checked at startup so a mismatched ABI is caught before any transaction is
//! built.

use std::path::Path;

use alloy::{json_abi::JsonAbi, sol_types::SolCall};

use super::erc20::IERC20;
use crate::error::TokenOpsError;

/// ERC-20 ABI bundled with the crate.
const DEFAULT_ERC20_ABI: &str = include_str!("../../abi/erc20.json");

/// Parse the bundled ERC-20 ABI.
pub fn default_erc20_abi() -> Result<JsonAbi, TokenOpsError> {
    parse_abi(DEFAULT_ERC20_ABI)
}

/// Parse a JSON ABI document.
pub fn parse_abi(json: &str) -> Result<JsonAbi, TokenOpsError> {
    serde_json::from_str(json).map_err(|e| TokenOpsError::Abi(format!("Invalid ABI JSON: {e}")))
}

/// Read and parse a JSON ABI file.
pub fn load_abi(path: &Path) -> Result<JsonAbi, TokenOpsError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| TokenOpsError::Abi(format!("Failed to read {}: {e}", path.display())))?;
    parse_abi(&json)
}

/// Verify an ABI exposes the ERC-20 functions used by this crate with the
/// same selectors as the compiled bindings.
pub fn check_erc20_abi(abi: &JsonAbi) -> Result<(), TokenOpsError> {
    let required: [(&str, [u8; 4]); 5] = [
        ("decimals", IERC20::decimalsCall::SELECTOR),
        ("symbol", IERC20::symbolCall::SELECTOR),
        ("balanceOf", IERC20::balanceOfCall::SELECTOR),
        ("allowance", IERC20::allowanceCall::SELECTOR),
        ("approve", IERC20::approveCall::SELECTOR),
    ];

    for (name, selector) in required {
        let overloads = abi
            .function(name)
            .ok_or_else(|| TokenOpsError::Abi(format!("ABI is missing `{name}`")))?;
        if !overloads.iter().any(|f| f.selector().0 == selector) {
            return Err(TokenOpsError::Abi(format!(
                "ABI `{name}` has an unexpected signature"
            )));
        }
    }
    Ok(())
}
