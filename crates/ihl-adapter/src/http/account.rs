/*
[INPUT]:  Wallet address, JWT or wallet credentials, bank account ids/tokens
[OUTPUT]: Compliance status and linked bank accounts
[POS]:    HTTP layer - account endpoints (compliance check, bank accounts)
[UPDATE]: When adding account endpoints or changing their payloads
*/

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::auth::WalletAuth;
use crate::http::client::read_json;
use crate::http::endpoint::{
    BANK_ACCOUNT_CREATE, BANK_ACCOUNT_DELETE, BANK_ACCOUNTS_LIST, COMPLIANCE_CHECK_STATUS,
};
use crate::http::{IhlClient, IhlError, Result};
use crate::types::{
    BankAccount, BankAccountsResponse, ComplianceStatus, ComplianceStatusResponse,
    CreateBankAccountRequest, DeleteBankAccountRequest,
};

/// Characters `encodeURIComponent` escapes: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, URI_COMPONENT).to_string()
}

fn bank_account_path(wallet_address: &str) -> String {
    format!("/account/bank-account?accountAddress={}", encode(wallet_address))
}

impl IhlClient {
    /// Get the KYC status of an account.
    ///
    /// `jwt` is supplied by the caller and may be non-expiring.
    ///
    /// GET /account/{walletAddress}/compliance-check-status
    pub async fn compliance_status(&self, wallet_address: &str, jwt: &str) -> Result<ComplianceStatus> {
        if wallet_address.trim().is_empty() {
            return Err(IhlError::Config("wallet address must not be empty".to_string()));
        }

        let path = format!("/account/{}/compliance-check-status", encode(wallet_address));
        let builder = self.request(&COMPLIANCE_CHECK_STATUS, &path, jwt)?;
        let response = self.send(&COMPLIANCE_CHECK_STATUS, builder).await?;

        let body: ComplianceStatusResponse = read_json(response).await?;
        Ok(body.compliance_check_status)
    }

    /// Remove a linked bank account by its IHL id
    ///
    /// DELETE /account/bank-account?accountAddress={walletAddress}
    pub async fn delete_bank_account(&self, auth: &WalletAuth<'_>, id: i64) -> Result<()> {
        let body = DeleteBankAccountRequest {
            account_address: auth.wallet_address.to_string(),
            account_id: id,
        };

        let path = bank_account_path(auth.wallet_address);
        let builder = self
            .signed_request(&BANK_ACCOUNT_DELETE, &path, auth)
            .await?
            .json(&body);
        self.send(&BANK_ACCOUNT_DELETE, builder).await?;
        Ok(())
    }

    /// List the bank accounts linked to the wallet, in server order
    ///
    /// GET /account/bank-account?accountAddress={walletAddress}
    pub async fn bank_accounts(&self, auth: &WalletAuth<'_>) -> Result<Vec<BankAccount>> {
        let path = bank_account_path(auth.wallet_address);
        let builder = self.signed_request(&BANK_ACCOUNTS_LIST, &path, auth).await?;
        let response = self.send(&BANK_ACCOUNTS_LIST, builder).await?;

        let body: BankAccountsResponse = read_json(response).await?;
        Ok(body.bank_accounts)
    }

    /// Link a bank account using a long-term Plaid access token
    ///
    /// POST /account/bank-account
    pub async fn create_bank_account(&self, auth: &WalletAuth<'_>, plaid_access_token: &str) -> Result<()> {
        let body = CreateBankAccountRequest {
            account_address: auth.wallet_address.to_string(),
            plaid_access_token: plaid_access_token.to_string(),
        };

        let builder = self
            .signed_request(&BANK_ACCOUNT_CREATE, "/account/bank-account", auth)
            .await?
            .json(&body);
        self.send(&BANK_ACCOUNT_CREATE, builder).await?;
        Ok(())
    }
}
