/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public IHL adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod fiatconnect;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    EvmWalletSigner,
    ExpiringJwtSigner,
    JwtClaims,
    MockJwtSigner,
    WalletAuth,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Endpoint,
    IhlClient,
    IhlError,
    Result,
    StatusPolicy,
};

pub use fiatconnect::FiatConnectClient;

// Re-export all types
pub use types::*;
