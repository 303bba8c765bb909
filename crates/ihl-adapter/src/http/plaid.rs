/*
[INPUT]:  Wallet credentials, Plaid public/access tokens, link parameters
[OUTPUT]: Plaid access tokens and link tokens
[POS]:    HTTP layer - Plaid token exchange endpoints
[UPDATE]: When Plaid endpoints or payloads change
*/

use crate::auth::WalletAuth;
use crate::http::client::read_json;
use crate::http::endpoint::{PLAID_ACCESS_TOKEN_EXCHANGE, PLAID_LINK_TOKEN_CREATE};
use crate::http::{IhlClient, Result};
use crate::types::{
    AccessTokenResponse, CreateLinkTokenRequest, ExchangeAccessTokenRequest, LinkTokenParams,
    LinkTokenResponse,
};

impl IhlClient {
    /// Exchange a Plaid public token for a long-term access token
    ///
    /// POST /plaid/access-token/exchange
    pub async fn exchange_plaid_access_token(
        &self,
        auth: &WalletAuth<'_>,
        public_token: &str,
    ) -> Result<String> {
        let body = ExchangeAccessTokenRequest {
            public_token: public_token.to_string(),
            account_address: auth.wallet_address.to_string(),
        };

        let builder = self
            .signed_request(&PLAID_ACCESS_TOKEN_EXCHANGE, "/plaid/access-token/exchange", auth)
            .await?
            .json(&body);
        let response = self.send(&PLAID_ACCESS_TOKEN_EXCHANGE, builder).await?;

        let body: AccessTokenResponse = read_json(response).await?;
        Ok(body.access_token)
    }

    /// Create a Plaid Link token
    ///
    /// POST /plaid/link-token/create
    pub async fn create_link_token(
        &self,
        auth: &WalletAuth<'_>,
        params: &LinkTokenParams,
    ) -> Result<String> {
        let body = CreateLinkTokenRequest {
            account_address: auth.wallet_address.to_string(),
            is_android: params.is_android,
            language: params.language.clone(),
            access_token: params.access_token.clone(),
            phone_number: params.phone_number.clone(),
        };

        let builder = self
            .signed_request(&PLAID_LINK_TOKEN_CREATE, "/plaid/link-token/create", auth)
            .await?
            .json(&body);
        let response = self.send(&PLAID_LINK_TOKEN_CREATE, builder).await?;

        let body: LinkTokenResponse = read_json(response).await?;
        Ok(body.link_token)
    }
}
