/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::FiatAccountType;

/// Bank account linked through IHL, as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: i64,
    pub account_name: String,
    pub account_type: String,
    pub account_number_truncated: String,
}

/// FiatConnect provider entry from the provider registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiatConnectClientConfig {
    pub base_url: String,
    pub provider_name: String,
    pub icon_url: String,
}

/// Fiat account as registered with a FiatConnect provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiatAccount {
    pub fiat_account_id: String,
    pub account_name: String,
    pub institution_name: String,
    pub fiat_account_type: FiatAccountType,
}
