/*
[INPUT]:  Wallet credentials
[OUTPUT]: Persona identity-verification account for the wallet
[POS]:    HTTP layer - Persona endpoints
[UPDATE]: When Persona endpoints or accepted statuses change
*/

use crate::auth::WalletAuth;
use crate::http::endpoint::PERSONA_ACCOUNT_CREATE;
use crate::http::{IhlClient, Result};
use crate::types::CreatePersonaAccountRequest;

impl IhlClient {
    /// Create a Persona account for the wallet. Succeeds if it already exists.
    ///
    /// POST /persona/account/create
    pub async fn create_persona_account(&self, auth: &WalletAuth<'_>) -> Result<()> {
        let body = CreatePersonaAccountRequest {
            account_address: auth.wallet_address.to_string(),
        };

        let builder = self
            .signed_request(&PERSONA_ACCOUNT_CREATE, "/persona/account/create", auth)
            .await?
            .json(&body);
        self.send(&PERSONA_ACCOUNT_CREATE, builder).await?;
        Ok(())
    }
}
