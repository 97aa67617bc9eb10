// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! zkSync Era client for blockchain interactions.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use super::erc20::Erc20Contract;
use super::rpc::ChainRpc;
use super::types::*;
use crate::error::TokenOpsError;

/// zkSync Era client backed by an alloy provider.
pub struct ChainClient<P = DynProvider> {
    /// Network configuration
    network: NetworkConfig,
    /// Alloy provider
    provider: P,
}

impl ChainClient<DynProvider> {
    /// Connect to `rpc_url` over HTTP.
    pub fn connect(network: NetworkConfig, rpc_url: &str) -> Result<Self, TokenOpsError> {
        let url: url::Url = rpc_url.parse().map_err(|e: url::ParseError| {
            TokenOpsError::InvalidRpcUrl(format!("{rpc_url}: {e}"))
        })?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self { network, provider })
    }

    /// Connect to the network's default endpoint.
    pub fn for_network(network: NetworkConfig) -> Result<Self, TokenOpsError> {
        let rpc_url = network.rpc_url;
        Self::connect(network, rpc_url)
    }
}

impl<P: Provider + Clone> ChainClient<P> {
    /// Wrap an existing provider.
    pub fn with_provider(network: NetworkConfig, provider: P) -> Self {
        Self { network, provider }
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    fn token(&self, address: Address) -> Erc20Contract<P> {
        Erc20Contract::new(&self.provider, address)
    }
}

#[async_trait]
impl<P> ChainRpc for ChainClient<P>
where
    P: Provider + Clone + Send + Sync,
{
    async fn chain_id(&self) -> Result<u64, TokenOpsError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| TokenOpsError::Rpc(format!("Failed to get chain id: {e}")))
    }

    async fn gas_price(&self) -> Result<u128, TokenOpsError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| TokenOpsError::Rpc(format!("Failed to get gas price: {e}")))
    }

    async fn transaction_count(&self, address: Address) -> Result<u64, TokenOpsError> {
        self.provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(|e| TokenOpsError::Rpc(format!("Failed to get nonce: {e}")))
    }

    async fn native_balance(&self, address: Address) -> Result<U256, TokenOpsError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| TokenOpsError::Rpc(format!("Failed to get balance: {e}")))
    }

    async fn token_symbol(&self, token: Address) -> Result<String, TokenOpsError> {
        self.token(token).symbol().await
    }

    async fn token_decimals(&self, token: Address) -> Result<u8, TokenOpsError> {
        self.token(token).decimals().await
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, TokenOpsError> {
        self.token(token).balance_of(owner).await
    }

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, TokenOpsError> {
        self.token(token).allowance(owner, spender).await
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, TokenOpsError> {
        self.provider
            .estimate_gas(tx.clone())
            .await
            .map_err(|e| TokenOpsError::GasEstimation(e.to_string()))
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<TxHash, TokenOpsError> {
        let pending = self
            .provider
            .send_raw_transaction(raw)
            .await
            .map_err(|e| TokenOpsError::Broadcast(e.to_string()))?;
        Ok(*pending.tx_hash())
    }

    async fn receipt_status(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<ReceiptStatus>, TokenOpsError> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| TokenOpsError::Rpc(format!("Failed to get receipt: {e}")))?;

        Ok(receipt.map(|r| {
            if r.block_number.is_none() {
                ReceiptStatus::Pending
            } else if r.status() {
                ReceiptStatus::Success
            } else {
                ReceiptStatus::Failed
            }
        }))
    }
}
