/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the IHL HTTP client
[POS]:    Integration tests - IHL endpoints
[UPDATE]: When IHL endpoints or status policies change
*/

mod common;

use common::{
    PUBLIC_KEY, SignedOp, WALLET_ADDRESS, mock_client, mock_jwt_token, setup_mock_server,
};
use ihl_adapter::{
    ClientConfig, ComplianceStatus, IhlClient, IhlError, MockJwtSigner, Network, WalletAuth,
};
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(IhlClient::new());
}

#[test]
fn test_client_for_network() {
    let client = assert_ok!(IhlClient::for_network(ClientConfig::default(), Network::Mainnet));
    assert_eq!(client.base_url(), Network::Mainnet.ihl_url());
}

#[rstest]
#[case(SignedOp::DeleteBankAccount, 200)]
#[case(SignedOp::DeleteBankAccount, 202)]
#[case(SignedOp::BankAccounts, 200)]
#[case(SignedOp::CreateBankAccount, 201)]
#[case(SignedOp::ExchangeAccessToken, 200)]
#[case(SignedOp::CreateLinkToken, 200)]
#[case(SignedOp::CreatePersonaAccount, 201)]
#[case(SignedOp::CreatePersonaAccount, 409)]
#[tokio::test]
async fn test_allowed_status_succeeds(#[case] op: SignedOp, #[case] status: u16) {
    let server = setup_mock_server().await;
    Mock::given(method(op.method()))
        .and(path(op.path()))
        .and(header("authorization", format!("Bearer {}", mock_jwt_token()).as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(op.success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let signer = MockJwtSigner::new(&mock_jwt_token());
    let auth = WalletAuth::new(WALLET_ADDRESS, PUBLIC_KEY, &signer);
    assert_ok!(op.run(&mock_client(&server), &auth).await);
}

#[rstest]
#[case(SignedOp::DeleteBankAccount, 503)]
#[case(SignedOp::BankAccounts, 503)]
#[case(SignedOp::BankAccounts, 404)]
#[case(SignedOp::CreateBankAccount, 400)]
#[case(SignedOp::ExchangeAccessToken, 401)]
#[case(SignedOp::CreateLinkToken, 500)]
#[case(SignedOp::CreatePersonaAccount, 200)]
#[case(SignedOp::CreatePersonaAccount, 500)]
#[tokio::test]
async fn test_rejected_status_names_path_and_code(#[case] op: SignedOp, #[case] status: u16) {
    let server = setup_mock_server().await;
    Mock::given(method(op.method()))
        .and(path(op.path()))
        .respond_with(ResponseTemplate::new(status).set_body_json(op.success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let signer = MockJwtSigner::new(&mock_jwt_token());
    let auth = WalletAuth::new(WALLET_ADDRESS, PUBLIC_KEY, &signer);
    let err = op.run(&mock_client(&server), &auth).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains(op.path()), "{message}");
    assert!(message.contains(&status.to_string()), "{message}");
    assert_eq!(err.status_code(), Some(status));
}

#[rstest]
#[case(SignedOp::DeleteBankAccount)]
#[case(SignedOp::BankAccounts)]
#[case(SignedOp::CreateBankAccount)]
#[case(SignedOp::ExchangeAccessToken)]
#[case(SignedOp::CreateLinkToken)]
#[case(SignedOp::CreatePersonaAccount)]
#[tokio::test]
async fn test_signer_called_once_with_caller_identity(#[case] op: SignedOp) {
    let server = setup_mock_server().await;
    Mock::given(method(op.method()))
        .and(path(op.path()))
        .respond_with(ResponseTemplate::new(201).set_body_json(op.success_body()))
        .mount(&server)
        .await;

    let signer = MockJwtSigner::new(&mock_jwt_token());
    let auth = WalletAuth::new(WALLET_ADDRESS, PUBLIC_KEY, &signer);
    assert_ok!(op.run(&mock_client(&server), &auth).await);

    assert_eq!(
        signer.calls(),
        vec![(PUBLIC_KEY.to_string(), WALLET_ADDRESS.to_string())]
    );
}

#[rstest]
#[case(SignedOp::DeleteBankAccount)]
#[case(SignedOp::BankAccounts)]
#[case(SignedOp::CreateBankAccount)]
#[case(SignedOp::ExchangeAccessToken)]
#[case(SignedOp::CreateLinkToken)]
#[case(SignedOp::CreatePersonaAccount)]
#[tokio::test]
async fn test_signing_failure_sends_nothing(#[case] op: SignedOp) {
    let server = setup_mock_server().await;
    Mock::given(method(op.method()))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let signer = MockJwtSigner::failing("user cancelled");
    let auth = WalletAuth::new(WALLET_ADDRESS, PUBLIC_KEY, &signer);
    let err = op.run(&mock_client(&server), &auth).await.unwrap_err();

    assert!(matches!(err, IhlError::Signing { .. }));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_transport_failure_surfaces() {
    // nothing listens on port 1
    let client = assert_ok!(IhlClient::with_base_url(
        ClientConfig::default(),
        "http://127.0.0.1:1"
    ));

    let signer = MockJwtSigner::new(&mock_jwt_token());
    let auth = WalletAuth::new(WALLET_ADDRESS, PUBLIC_KEY, &signer);
    let err = client.bank_accounts(&auth).await.unwrap_err();
    assert!(matches!(err, IhlError::Http(_)));
}

#[tokio::test]
async fn test_concurrent_calls_get_independent_credentials() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account/bank-account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bankAccounts": [],
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/persona/account/create"))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let signer = MockJwtSigner::new(&mock_jwt_token());
    let auth = WalletAuth::new(WALLET_ADDRESS, PUBLIC_KEY, &signer);

    let (accounts, persona) = tokio::join!(
        client.bank_accounts(&auth),
        client.create_persona_account(&auth)
    );
    assert_ok!(accounts);
    assert_ok!(persona);
    assert_eq!(signer.calls().len(), 2);
}

#[tokio::test]
async fn test_compliance_status_passes_unknown_value_through() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account/0xABC/compliance-check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "complianceCheckStatus": 42,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = assert_ok!(
        mock_client(&server)
            .compliance_status(WALLET_ADDRESS, &mock_jwt_token())
            .await
    );
    assert_eq!(status, ComplianceStatus::Other(serde_json::json!(42)));
}

#[tokio::test]
async fn test_compliance_status_passes_string_value_through() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account/0xABC/compliance-check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "complianceCheckStatus": "InReview",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = assert_ok!(
        mock_client(&server)
            .compliance_status(WALLET_ADDRESS, "jwt")
            .await
    );
    assert_eq!(status, ComplianceStatus::Other(serde_json::json!("InReview")));
}
