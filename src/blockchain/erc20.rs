// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract interactions.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
    sol_types::SolCall,
};

use crate::error::TokenOpsError;

// Define the ERC-20 interface using alloy's sol! macro
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// Calldata for `approve(spender, amount)`.
pub fn approve_calldata(spender: Address, amount: U256) -> Vec<u8> {
    IERC20::approveCall { spender, amount }.abi_encode()
}

/// ERC-20 contract wrapper.
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    /// Create a new ERC-20 contract instance.
    pub fn new(provider: &P, address: Address) -> Self {
        let contract = IERC20::new(address, provider.clone());
        Self { contract }
    }

    /// Get the token symbol.
    pub async fn symbol(&self) -> Result<String, TokenOpsError> {
        self.contract
            .symbol()
            .call()
            .await
            .map_err(|e| TokenOpsError::Contract(format!("symbol(): {e}")))
    }

    /// Get the token decimals.
    pub async fn decimals(&self) -> Result<u8, TokenOpsError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| TokenOpsError::Contract(format!("decimals(): {e}")))
    }

    /// Get the raw balance of an address.
    pub async fn balance_of(&self, owner: Address) -> Result<U256, TokenOpsError> {
        self.contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| TokenOpsError::Contract(format!("balanceOf(): {e}")))
    }

    /// Get the amount `spender` may transfer on behalf of `owner`.
    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, TokenOpsError> {
        self.contract
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| TokenOpsError::Contract(format!("allowance(): {e}")))
    }
}
