/*
[INPUT]:  HTTP client configuration, wallet credentials, IHL endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - IHL REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod persona;
pub mod plaid;

pub use error::{IhlError, Result};

pub use client::{ClientConfig, IhlClient};
pub use endpoint::{Endpoint, StatusPolicy};
