// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use zksync_token_ops::{
    blockchain::{
        abi::{check_erc20_abi, default_erc20_abi, load_abi},
        get_balance_of, ChainClient, ChainRpc, TokenRegistry,
    },
    config::{LogFormat, Settings},
    TokenOpsError,
};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(settings.log_format);

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Startup check failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: Settings) -> Result<(), TokenOpsError> {
    let abi = match &settings.abi_path {
        Some(path) => load_abi(path)?,
        None => default_erc20_abi()?,
    };
    check_erc20_abi(&abi)?;

    let client = ChainClient::connect(settings.network.clone(), &settings.rpc_url)?;
    let chain_id = client.chain_id().await?;
    if chain_id != settings.network.chain_id {
        return Err(TokenOpsError::Rpc(format!(
            "{} reports chain id {chain_id}, expected {} for {}",
            settings.rpc_url, settings.network.chain_id, settings.network.name
        )));
    }
    tracing::info!(
        network = %settings.network.name,
        chain_id,
        rpc_url = %settings.rpc_url,
        explorer = %settings.network.explorer_url,
        "Connected"
    );

    let Some(owner) = settings.wallet_address else {
        return Ok(());
    };

    let registry = TokenRegistry::zksync()?;
    for symbol in registry.symbols() {
        match get_balance_of(&client, &registry, symbol, owner).await {
            Ok(balance) => tracing::info!(
                %owner,
                symbol = %balance.symbol,
                balance = %balance.balance_formatted,
                raw = %balance.balance_raw,
                "Balance"
            ),
            Err(e) => tracing::warn!(%owner, symbol, error = %e, "Failed to get balance"),
        }
    }

    Ok(())
}
