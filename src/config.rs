// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ZKSYNC_NETWORK` | Network preset (`mainnet` or `sepolia`) | `mainnet` |
//! | `ZKSYNC_RPC_URL` | RPC endpoint override | Network preset URL |
//! | `APPROVAL_GAS_MULTIPLIER` | Gas headroom for approval transactions | `1.0` |
//! | `CONFIRMATION_TIMEOUT_SECS` | How long to wait for a receipt | `120` |
//! | `CONFIRMATION_POLL_MS` | Interval between receipt lookups | `1000` |
//! | `APPROVAL_SETTLE_SECS` | Pause after a confirmed approval | `10` |
//! | `ABI_PATH` | ERC-20 JSON ABI checked at startup | Bundled ABI |
//! | `WALLET_ADDRESS` | Address whose balances are reported | None |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::Address;

use crate::blockchain::{
    network_by_name, parse_address, ApprovalPolicy, NetworkConfig, ZKSYNC_MAINNET,
};

pub const NETWORK_ENV: &str = "ZKSYNC_NETWORK";
pub const RPC_URL_ENV: &str = "ZKSYNC_RPC_URL";
pub const GAS_MULTIPLIER_ENV: &str = "APPROVAL_GAS_MULTIPLIER";
pub const CONFIRMATION_TIMEOUT_ENV: &str = "CONFIRMATION_TIMEOUT_SECS";
pub const CONFIRMATION_POLL_ENV: &str = "CONFIRMATION_POLL_MS";
pub const SETTLE_DELAY_ENV: &str = "APPROVAL_SETTLE_SECS";
pub const ABI_PATH_ENV: &str = "ABI_PATH";
pub const WALLET_ADDRESS_ENV: &str = "WALLET_ADDRESS";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Immutable settings, loaded once at process start.
#[derive(Debug, Clone)]
pub struct Settings {
    pub network: NetworkConfig,
    pub rpc_url: String,
    pub approval: ApprovalPolicy,
    pub abi_path: Option<PathBuf>,
    pub wallet_address: Option<Address>,
    pub log_format: LogFormat,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through `lookup`, which returns the raw value of a variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let network = match get(NETWORK_ENV) {
            Some(raw) => network_by_name(&raw).ok_or_else(|| ConfigError::Invalid {
                name: NETWORK_ENV,
                value: raw.clone(),
                reason: "expected `mainnet` or `sepolia`".to_string(),
            })?,
            None => ZKSYNC_MAINNET,
        };

        let rpc_url = get(RPC_URL_ENV).unwrap_or_else(|| network.rpc_url.to_string());

        let defaults = ApprovalPolicy::default();
        let gas_multiplier = match get(GAS_MULTIPLIER_ENV) {
            Some(raw) => {
                let value: f64 = parse_var(GAS_MULTIPLIER_ENV, &raw)?;
                if !value.is_finite() || value <= 0.0 {
                    return Err(invalid(GAS_MULTIPLIER_ENV, &raw, "must be a positive number"));
                }
                value
            }
            None => defaults.gas_multiplier,
        };
        let confirmation_timeout = get(CONFIRMATION_TIMEOUT_ENV)
            .map(|raw| parse_var(CONFIRMATION_TIMEOUT_ENV, &raw).map(Duration::from_secs))
            .transpose()?
            .unwrap_or(defaults.confirmation_timeout);
        let poll_interval = match get(CONFIRMATION_POLL_ENV) {
            Some(raw) => {
                let millis: u64 = parse_var(CONFIRMATION_POLL_ENV, &raw)?;
                if millis == 0 {
                    return Err(invalid(CONFIRMATION_POLL_ENV, &raw, "must be greater than zero"));
                }
                Duration::from_millis(millis)
            }
            None => defaults.poll_interval,
        };
        let settle_delay = get(SETTLE_DELAY_ENV)
            .map(|raw| parse_var(SETTLE_DELAY_ENV, &raw).map(Duration::from_secs))
            .transpose()?
            .unwrap_or(defaults.settle_delay);

        let wallet_address = get(WALLET_ADDRESS_ENV)
            .map(|raw| {
                parse_address(&raw).map_err(|e| invalid(WALLET_ADDRESS_ENV, &raw, &e.to_string()))
            })
            .transpose()?;

        let log_format = match get(LOG_FORMAT_ENV).map(|v| v.to_ascii_lowercase()) {
            None => LogFormat::Pretty,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) => return Err(invalid(LOG_FORMAT_ENV, &v, "expected `json` or `pretty`")),
        };

        Ok(Self {
            network,
            rpc_url,
            approval: ApprovalPolicy {
                gas_multiplier,
                confirmation_timeout,
                poll_interval,
                settle_delay,
            },
            abi_path: get(ABI_PATH_ENV).map(PathBuf::from),
            wallet_address,
            log_format,
        })
    }
}

fn invalid(name: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| invalid(name, raw, &e.to_string()))
}
