/*
[INPUT]:  Wallet address and public key of the requesting account
[OUTPUT]: Expiring JWT produced by the wallet
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing credential inputs
*/

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::http::{IhlError, Result};

/// A wallet that can vouch for an account by issuing an expiring JWT.
///
/// The trait is async to support hardware wallets and external signers.
/// Implementations must be safe to call from several in-flight requests at
/// once; every call produces an independent token.
#[async_trait]
pub trait ExpiringJwtSigner: Send + Sync {
    /// Issue a fresh, time-bounded JWT for `wallet_address` / `public_key`
    async fn expiring_jwt(&self, public_key: &str, wallet_address: &str) -> Result<String>;
}

/// Identity and signer used for one signed IHL call
#[derive(Clone, Copy)]
pub struct WalletAuth<'a> {
    pub wallet_address: &'a str,
    pub public_key: &'a str,
    pub signer: &'a dyn ExpiringJwtSigner,
}

impl<'a> WalletAuth<'a> {
    pub fn new(
        wallet_address: &'a str,
        public_key: &'a str,
        signer: &'a dyn ExpiringJwtSigner,
    ) -> Self {
        Self {
            wallet_address,
            public_key,
            signer,
        }
    }

    /// Ask the wallet for a new credential. Never cached.
    pub async fn issue_jwt(&self) -> Result<String> {
        debug!(wallet_address = self.wallet_address, "requesting expiring jwt");
        self.signer
            .expiring_jwt(self.public_key, self.wallet_address)
            .await
    }
}

/// Mock signer for testing. Records every call it receives.
#[derive(Debug, Default)]
pub struct MockJwtSigner {
    token: String,
    failure: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockJwtSigner {
    /// Create a mock signer that always returns `token`
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            ..Self::default()
        }
    }

    /// Create a mock signer whose every call fails with a signing error
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// `(public_key, wallet_address)` pairs seen so far, in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ExpiringJwtSigner for MockJwtSigner {
    async fn expiring_jwt(&self, public_key: &str, wallet_address: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((public_key.to_string(), wallet_address.to_string()));

        match &self.failure {
            Some(message) => Err(IhlError::signing(message.clone())),
            None => Ok(self.token.clone()),
        }
    }
}
