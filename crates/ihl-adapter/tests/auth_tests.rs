/*
[INPUT]:  Local wallet key and mock IHL responses
[OUTPUT]: Test results for wallet-signed requests
[POS]:    Integration tests - authentication
[UPDATE]: When credential format or signing flow changes
*/

mod common;

use std::time::Duration;

use common::{TEST_ADDRESS, TEST_PRIVATE_KEY, mock_client, setup_mock_server};
use ihl_adapter::auth::decode_claims;
use ihl_adapter::{EvmWalletSigner, ExpiringJwtSigner, IhlError, WalletAuth};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_evm_wallet_signs_each_request() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/persona/account/create"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let wallet = assert_ok!(EvmWalletSigner::new(TEST_PRIVATE_KEY));
    let wallet = wallet.with_ttl(Duration::from_secs(120));
    let auth = WalletAuth::new(TEST_ADDRESS, "0x04cafe", &wallet);
    let client = mock_client(&server);

    assert_ok!(client.create_persona_account(&auth).await);
    assert_ok!(client.create_persona_account(&auth).await);

    let requests = server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 2);

    let tokens: Vec<String> = requests
        .iter()
        .map(|request| {
            let value = request
                .headers
                .get("authorization")
                .expect("authorization header")
                .to_str()
                .expect("ascii header");
            value.strip_prefix("Bearer ").expect("bearer scheme").to_string()
        })
        .collect();
    assert_ne!(tokens[0], tokens[1]);

    for token in &tokens {
        let claims = assert_ok!(decode_claims(token));
        assert_eq!(claims.sub, TEST_ADDRESS);
        assert_eq!(claims.iss, "0x04cafe");
        assert_eq!(claims.exp - claims.iat, 120);
    }
}

#[tokio::test]
async fn test_evm_wallet_refuses_foreign_address() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let wallet = assert_ok!(EvmWalletSigner::new(TEST_PRIVATE_KEY));
    let auth = WalletAuth::new("0x0000000000000000000000000000000000000001", "0x04cafe", &wallet);

    let err = mock_client(&server).bank_accounts(&auth).await.unwrap_err();
    assert!(matches!(err, IhlError::Signing { .. }));
}

#[tokio::test]
async fn test_evm_wallet_as_trait_object() {
    let wallet = assert_ok!(EvmWalletSigner::new(TEST_PRIVATE_KEY));
    let signer: &dyn ExpiringJwtSigner = &wallet;

    let token = assert_ok!(signer.expiring_jwt("0x04cafe", TEST_ADDRESS).await);
    assert_eq!(token.split('.').count(), 3);
}
