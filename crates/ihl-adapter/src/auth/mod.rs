/*
[INPUT]:  Wallet keys and the identity a request is made for
[OUTPUT]: Short-lived bearer JWTs and signing errors
[POS]:    Auth layer - wallet-derived credentials for IHL requests
[UPDATE]: When credential format or wallet implementations change
*/

pub mod evm_wallet;
pub mod jwt;
pub mod wallet;

pub use evm_wallet::{DEFAULT_JWT_TTL, EvmWalletSigner};
pub use jwt::{JwtClaims, JwtHeader, decode_claims};
pub use wallet::{ExpiringJwtSigner, MockJwtSigner, WalletAuth};
