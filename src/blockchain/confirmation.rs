// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Receipt polling for submitted transactions.
//!
//! ## Strategy
//!
//! The receipt is polled at a fixed interval. A success or failure status
//! ends the wait immediately. A missing or pending receipt is retried until
//! the timeout elapses, at which point the wait ends as
//! [`TxOutcome::NotFound`] or [`TxOutcome::TimedOut`] respectively. RPC
//! errors are retried the same way; if the timeout elapses while the node is
//! still failing, the last error is returned.
//!
//! Each lookup is bounded by the time left before the timeout (at least one
//! poll interval). A lookup that does not answer in time counts as an RPC
//! error.

use std::time::Duration;

use alloy::primitives::{Address, TxHash};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::rpc::ChainRpc;
use super::types::{ReceiptStatus, TxOutcome};
use crate::error::TokenOpsError;

/// Default time to wait for a receipt.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Default interval between receipt lookups.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll until `tx_hash` is mined or the timeout elapses.
///
/// `owner` is only used for log context.
pub async fn wait_for_transaction<R: ChainRpc + ?Sized>(
    rpc: &R,
    tx_hash: TxHash,
    owner: Address,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<TxOutcome, TokenOpsError> {
    let started = Instant::now();

    loop {
        let expired = started.elapsed() > timeout;
        let budget = timeout.saturating_sub(started.elapsed()).max(poll_interval);
        let reply = match tokio::time::timeout(budget, rpc.receipt_status(tx_hash)).await {
            Ok(reply) => reply,
            Err(_) => Err(TokenOpsError::Rpc(format!(
                "receipt lookup did not answer within {}ms",
                budget.as_millis()
            ))),
        };

        match reply {
            Ok(Some(ReceiptStatus::Success)) => {
                info!(%owner, %tx_hash, "Transaction confirmed");
                return Ok(TxOutcome::Confirmed);
            }
            Ok(Some(ReceiptStatus::Failed)) => {
                warn!(%owner, %tx_hash, "Transaction reverted");
                return Ok(TxOutcome::Reverted);
            }
            Ok(Some(ReceiptStatus::Pending)) => {
                if expired {
                    warn!(
                        %owner,
                        %tx_hash,
                        timeout_secs = timeout.as_secs(),
                        "Transaction still pending after timeout"
                    );
                    return Ok(TxOutcome::TimedOut);
                }
                debug!(%tx_hash, "Receipt pending");
            }
            Ok(None) => {
                if expired {
                    warn!(
                        %owner,
                        %tx_hash,
                        timeout_secs = timeout.as_secs(),
                        "Transaction not found"
                    );
                    return Ok(TxOutcome::NotFound);
                }
                debug!(%tx_hash, "Receipt not found yet");
            }
            Err(e) => {
                if expired || started.elapsed() >= timeout {
                    return Err(e);
                }
                warn!(%tx_hash, error = %e, "Receipt lookup failed, will retry");
            }
        }

        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::testing::{MockChain, ReceiptReply};

    const TIMEOUT: Duration = Duration::from_secs(5);
    const POLL: Duration = Duration::from_secs(1);

    async fn wait(rpc: &MockChain) -> Result<TxOutcome, TokenOpsError> {
        wait_for_transaction(rpc, TxHash::repeat_byte(0xab), Address::ZERO, TIMEOUT, POLL).await
    }

    #[tokio::test(start_paused = true)]
    async fn success_status_confirms() {
        let rpc = MockChain::new();
        rpc.push_status(Some(ReceiptStatus::Success));

        assert_eq!(wait(&rpc).await.unwrap(), TxOutcome::Confirmed);
        assert_eq!(rpc.receipt_polls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_status_reverts() {
        let rpc = MockChain::new();
        rpc.push_status(None);
        rpc.push_status(Some(ReceiptStatus::Failed));

        assert_eq!(wait(&rpc).await.unwrap(), TxOutcome::Reverted);
        assert_eq!(rpc.receipt_polls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_polling_until_mined() {
        let rpc = MockChain::new();
        rpc.push_status(None);
        rpc.push_status(Some(ReceiptStatus::Pending));
        rpc.push_status(Some(ReceiptStatus::Pending));
        rpc.push_status(Some(ReceiptStatus::Success));

        let started = Instant::now();
        assert_eq!(wait(&rpc).await.unwrap(), TxOutcome::Confirmed);
        assert_eq!(rpc.receipt_polls(), 4);
        assert_eq!(started.elapsed(), 3 * POLL);
    }

    #[tokio::test(start_paused = true)]
    async fn never_found_times_out_as_not_found() {
        let rpc = MockChain::new();

        assert_eq!(wait(&rpc).await.unwrap(), TxOutcome::NotFound);
        // Polls at 0..=5s are within the timeout, the 6s poll is past it.
        assert_eq!(rpc.receipt_polls(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn stuck_pending_times_out() {
        let rpc = MockChain::new();
        for _ in 0..20 {
            rpc.push_status(Some(ReceiptStatus::Pending));
        }

        assert_eq!(wait(&rpc).await.unwrap(), TxOutcome::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_are_retried() {
        let rpc = MockChain::new();
        rpc.push_receipt(ReceiptReply::Error("connection reset".to_string()));
        rpc.push_status(Some(ReceiptStatus::Success));

        assert_eq!(wait(&rpc).await.unwrap(), TxOutcome::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_errors_surface_after_timeout() {
        let rpc = MockChain::new();
        for _ in 0..20 {
            rpc.push_receipt(ReceiptReply::Error("node down".to_string()));
        }

        let err = wait(&rpc).await.unwrap_err();
        assert!(matches!(err, TokenOpsError::Rpc(msg) if msg == "node down"));
    }

    #[tokio::test(start_paused = true)]
    async fn unanswered_lookup_is_cut_off_at_timeout() {
        let rpc = MockChain::new().with_hanging_receipts();

        let started = Instant::now();
        let err = wait(&rpc).await.unwrap_err();
        assert!(matches!(err, TokenOpsError::Rpc(ref msg) if msg.contains("did not answer")));
        assert!(started.elapsed() >= TIMEOUT);
        assert!(started.elapsed() <= TIMEOUT + POLL);
        assert_eq!(rpc.receipt_polls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_lookup_gets_at_least_one_poll_interval() {
        let rpc = MockChain::new();
        for _ in 0..5 {
            rpc.push_status(Some(ReceiptStatus::Pending));
        }
        rpc.push_receipt(ReceiptReply::Hang);

        let started = Instant::now();
        let err = wait(&rpc).await.unwrap_err();
        assert!(matches!(err, TokenOpsError::Rpc(_)));
        // Five pending polls take 5s, the sixth lookup is cut off one interval later.
        assert_eq!(started.elapsed(), TIMEOUT + POLL);
        assert_eq!(rpc.receipt_polls(), 6);
    }
}
