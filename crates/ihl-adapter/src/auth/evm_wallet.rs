/*
[INPUT]:  EVM private key (hex string), wallet identity to vouch for
[OUTPUT]: ES256K-signed expiring JWTs
[POS]:    Auth layer - local-key wallet implementation
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::B256;
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::auth::jwt::{JwtClaims, JwtHeader, signing_input};
use crate::auth::ExpiringJwtSigner;
use crate::http::{IhlError, Result};

/// Lifetime of tokens issued by [`EvmWalletSigner`] unless overridden
pub const DEFAULT_JWT_TTL: Duration = Duration::from_secs(5 * 60);

/// Wallet backed by a local secp256k1 private key
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
    ttl: Duration,
}

impl EvmWalletSigner {
    /// Create a new EVM wallet signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| IhlError::Config(format!("Invalid EVM private key: {e}")))?;

        let address = signer.address().to_checksum(None);

        Ok(Self {
            signer,
            address,
            ttl: DEFAULT_JWT_TTL,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Checksummed address derived from the key
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn sign_claims(&self, claims: &JwtClaims) -> Result<String> {
        let input = signing_input(&JwtHeader::es256k(), claims)?;
        let digest = B256::from_slice(Sha256::digest(input.as_bytes()).as_slice());

        let signature = self
            .signer
            .sign_hash_sync(&digest)
            .map_err(|e| IhlError::signing(format!("Failed to sign JWT: {e}")))?;

        // [r, s, v]; JWS keeps r || s only
        let bytes = signature.as_bytes();
        Ok(format!("{input}.{}", URL_SAFE_NO_PAD.encode(&bytes[..64])))
    }
}

#[async_trait]
impl ExpiringJwtSigner for EvmWalletSigner {
    async fn expiring_jwt(&self, public_key: &str, wallet_address: &str) -> Result<String> {
        verify_wallet_address(wallet_address, &self.address)?;

        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| IhlError::Config(format!("Invalid JWT lifetime: {e}")))?;
        let claims = JwtClaims::new(public_key, wallet_address, ttl);
        debug!(wallet_address, exp = claims.exp, "issuing expiring jwt");

        self.sign_claims(&claims)
    }
}

fn normalize_evm_address(address: &str) -> String {
    let address = address.trim();
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
        .to_ascii_lowercase()
}

fn verify_wallet_address(requested: &str, derived: &str) -> Result<()> {
    if normalize_evm_address(requested) == normalize_evm_address(derived) {
        Ok(())
    } else {
        Err(IhlError::signing(format!(
            "Wallet address mismatch: requested {requested}, key belongs to {derived}"
        )))
    }
}
