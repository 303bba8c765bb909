/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::FiatAccountType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBankAccountRequest {
    pub account_address: String,
    pub account_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBankAccountRequest {
    pub account_address: String,
    pub plaid_access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeAccessTokenRequest {
    pub public_token: String,
    pub account_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkTokenRequest {
    pub account_address: String,
    pub is_android: bool,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonaAccountRequest {
    pub account_address: String,
}

/// Caller-supplied fields for a Plaid link token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTokenParams {
    pub is_android: bool,
    /// The user's current language, e.g. `en-US`
    pub language: String,
    /// Existing access token, set when editing an already linked item
    pub access_token: Option<String>,
    /// The user's verified phone number
    pub phone_number: String,
}

/// Account details a user submits to a FiatConnect provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFiatAccountRequest {
    pub account_name: String,
    pub institution_name: String,
    pub account_number: String,
    pub country: String,
    pub fiat_account_type: FiatAccountType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_token_request_omits_missing_access_token() {
        let request = CreateLinkTokenRequest {
            account_address: "0xabc".to_string(),
            is_android: true,
            language: "en-US".to_string(),
            access_token: None,
            phone_number: "+15555550100".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "accountAddress": "0xabc",
                "isAndroid": true,
                "language": "en-US",
                "phoneNumber": "+15555550100",
            })
        );
    }

    #[test]
    fn test_delete_request_field_names() {
        let request = DeleteBankAccountRequest {
            account_address: "0xABC".to_string(),
            account_id: 7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"accountAddress": "0xABC", "accountId": 7}));
    }
}
