// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Local signing account.

use std::fmt;

use alloy::{network::EthereumWallet, primitives::Address, signers::local::PrivateKeySigner};

use crate::error::TokenOpsError;

/// Address plus the key that signs for it. Owned by the caller and passed by
/// reference into every operation.
#[derive(Clone)]
pub struct Account {
    signer: PrivateKeySigner,
}

impl Account {
    /// Create an account from a hex private key (with or without `0x`).
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, TokenOpsError> {
        // Use alloy's hex decoding (from alloy-primitives)
        let key_bytes = alloy::hex::decode(private_key_hex.trim())
            .map_err(|e| TokenOpsError::InvalidPrivateKey(e.to_string()))?;

        let signer = PrivateKeySigner::from_slice(&key_bytes)
            .map_err(|e| TokenOpsError::InvalidPrivateKey(e.to_string()))?;

        Ok(Self { signer })
    }

    pub fn from_signer(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Wallet wrapping this account's signer.
    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::testing::{TEST_ADDRESS, TEST_PRIVATE_KEY};
    use crate::blockchain::tokens::parse_address;

    #[test]
    fn derives_address_from_key() {
        let account = Account::from_private_key(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(account.address(), parse_address(TEST_ADDRESS).unwrap());
    }

    #[test]
    fn accepts_0x_prefix() {
        let prefixed = format!("0x{TEST_PRIVATE_KEY}");
        let account = Account::from_private_key(&prefixed).unwrap();
        assert_eq!(account.address(), parse_address(TEST_ADDRESS).unwrap());
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(matches!(
            Account::from_private_key("zz"),
            Err(TokenOpsError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            Account::from_private_key("abcd"),
            Err(TokenOpsError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn debug_hides_key() {
        let account = Account::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let text = format!("{account:?}");
        assert!(!text.contains(TEST_PRIVATE_KEY));
    }
}
