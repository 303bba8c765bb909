/*
[INPUT]:  Wallet identity, token lifetime, encoded JWT strings
[OUTPUT]: JWT header/claims, signing input, decoded claims
[POS]:    Auth layer - JWT structure shared by wallet implementations
[UPDATE]: When claim set or encoding changes
*/

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::{IhlError, Result};

/// JOSE header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

impl JwtHeader {
    /// secp256k1 / SHA-256
    pub fn es256k() -> Self {
        Self {
            alg: "ES256K".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Claims a wallet vouches for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Public key of the account
    pub iss: String,
    /// Wallet address of the account
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl JwtClaims {
    /// Claims valid from now for `ttl`
    pub fn new(public_key: &str, wallet_address: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            iss: public_key.to_string(),
            sub: wallet_address.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Base64url (no padding) JSON segment
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(value)?))
}

/// `header.payload`, the bytes covered by the signature
pub fn signing_input(header: &JwtHeader, claims: &JwtClaims) -> Result<String> {
    Ok(format!(
        "{}.{}",
        encode_segment(header)?,
        encode_segment(claims)?
    ))
}

/// Read the claims of a JWT without verifying its signature
pub fn decode_claims(token: &str) -> Result<JwtClaims> {
    let token = token.trim();
    let payload_b64 = token
        .split('.')
        .nth(1)
        .ok_or_else(|| IhlError::InvalidResponse("token is not a valid JWT".to_string()))?;

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .or_else(|_| URL_SAFE.decode(payload_b64))
        .map_err(|e| IhlError::InvalidResponse(format!("Invalid JWT payload base64: {e}")))?;

    Ok(serde_json::from_slice(&payload_bytes)?)
}
