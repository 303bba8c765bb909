/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ihl-adapter tests

use ihl_adapter::{ClientConfig, IhlClient, LinkTokenParams, Result, WalletAuth};
use wiremock::MockServer;

pub const WALLET_ADDRESS: &str = "0xABC";
pub const PUBLIC_KEY: &str = "0x04deadbeef";

/// Well-known test key and its checksummed address
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn mock_client(server: &MockServer) -> IhlClient {
    IhlClient::with_base_url(ClientConfig::default(), &server.uri()).expect("client init")
}

/// Mock JWT token for testing
#[allow(dead_code)]
pub fn mock_jwt_token() -> String {
    "eyJhbGciOiJFUzI1NksiLCJ0eXAiOiJKV1QifQ.test.signature".to_string()
}

/// Every wallet-signed IHL operation
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum SignedOp {
    DeleteBankAccount,
    BankAccounts,
    CreateBankAccount,
    ExchangeAccessToken,
    CreateLinkToken,
    CreatePersonaAccount,
}

impl SignedOp {
    #[allow(dead_code)]
    pub fn method(self) -> &'static str {
        match self {
            SignedOp::DeleteBankAccount => "DELETE",
            SignedOp::BankAccounts => "GET",
            _ => "POST",
        }
    }

    #[allow(dead_code)]
    pub fn path(self) -> &'static str {
        match self {
            SignedOp::DeleteBankAccount | SignedOp::BankAccounts | SignedOp::CreateBankAccount => {
                "/account/bank-account"
            }
            SignedOp::ExchangeAccessToken => "/plaid/access-token/exchange",
            SignedOp::CreateLinkToken => "/plaid/link-token/create",
            SignedOp::CreatePersonaAccount => "/persona/account/create",
        }
    }

    /// Response body that satisfies the operation's decoder
    #[allow(dead_code)]
    pub fn success_body(self) -> serde_json::Value {
        match self {
            SignedOp::BankAccounts => serde_json::json!({"bankAccounts": []}),
            SignedOp::ExchangeAccessToken => serde_json::json!({"accessToken": "tok-123"}),
            SignedOp::CreateLinkToken => serde_json::json!({"linkToken": "link-123"}),
            _ => serde_json::json!({}),
        }
    }

    /// Run the operation, discarding its payload
    #[allow(dead_code)]
    pub async fn run(self, client: &IhlClient, auth: &WalletAuth<'_>) -> Result<()> {
        match self {
            SignedOp::DeleteBankAccount => client.delete_bank_account(auth, 7).await,
            SignedOp::BankAccounts => client.bank_accounts(auth).await.map(|_| ()),
            SignedOp::CreateBankAccount => client.create_bank_account(auth, "access-1").await,
            SignedOp::ExchangeAccessToken => client
                .exchange_plaid_access_token(auth, "public-1")
                .await
                .map(|_| ()),
            SignedOp::CreateLinkToken => {
                let params = LinkTokenParams {
                    is_android: true,
                    language: "en-US".to_string(),
                    access_token: None,
                    phone_number: "+15555550100".to_string(),
                };
                client.create_link_token(auth, &params).await.map(|_| ())
            }
            SignedOp::CreatePersonaAccount => client.create_persona_account(auth).await,
        }
    }
}
