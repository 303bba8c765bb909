/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// KYC status of an account as reported by the compliance check.
///
/// Numeric on the wire. Anything else the service sends is kept verbatim in
/// `Other` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ComplianceStatus {
    NotSubmitted,
    Submitted,
    Accepted,
    Denied,
    InReview,
    Other(Value),
}

impl From<Value> for ComplianceStatus {
    fn from(value: Value) -> Self {
        match value.as_i64() {
            Some(0) => ComplianceStatus::NotSubmitted,
            Some(1) => ComplianceStatus::Submitted,
            Some(2) => ComplianceStatus::Accepted,
            Some(3) => ComplianceStatus::Denied,
            Some(4) => ComplianceStatus::InReview,
            _ => ComplianceStatus::Other(value),
        }
    }
}

impl From<ComplianceStatus> for Value {
    fn from(status: ComplianceStatus) -> Self {
        match status {
            ComplianceStatus::NotSubmitted => Value::from(0),
            ComplianceStatus::Submitted => Value::from(1),
            ComplianceStatus::Accepted => Value::from(2),
            ComplianceStatus::Denied => Value::from(3),
            ComplianceStatus::InReview => Value::from(4),
            ComplianceStatus::Other(value) => value,
        }
    }
}

/// Deployment the wallet is pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Alfajores,
    Mainnet,
}

impl Network {
    /// Default in-house-liquidity base URL
    pub fn ihl_url(self) -> &'static str {
        match self {
            Network::Alfajores => "https://liquidity-dot-celo-mobile-alfajores.appspot.com",
            Network::Mainnet => "https://liquidity-dot-celo-mobile-mainnet.appspot.com",
        }
    }

    /// Default FiatConnect provider registry URL
    pub fn fiatconnect_providers_url(self) -> &'static str {
        match self {
            Network::Alfajores => {
                "https://us-central1-celo-mobile-alfajores.cloudfunctions.net/getFiatConnectProviders"
            }
            Network::Mainnet => {
                "https://us-central1-celo-mobile-mainnet.cloudfunctions.net/getFiatConnectProviders"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiatAccountSchema {
    AccountNumber,
    MobileMoney,
    DuniaWallet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiatAccountType {
    BankAccount,
    MobileMoney,
    DuniaWallet,
}
