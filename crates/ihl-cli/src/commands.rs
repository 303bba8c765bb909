/*
[INPUT]:  Parsed subcommand, CLI configuration, wallet private key
[OUTPUT]: JSON results of IHL / FiatConnect operations
[POS]:    Command layer - maps subcommands onto client operations
[UPDATE]: When adding subcommands or client operations
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use ihl_adapter::auth::decode_claims;
use ihl_adapter::{
    EvmWalletSigner, FiatConnectClient, IhlClient, LinkTokenParams, WalletAuth,
};
use serde_json::{Value, json};
use tracing::info;

use crate::config::CliConfig;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the KYC status of the wallet
    ComplianceStatus {
        /// Use this JWT instead of issuing one from the wallet
        #[arg(long)]
        jwt: Option<String>,
    },
    /// Manage linked bank accounts
    #[command(subcommand)]
    BankAccounts(BankAccountsCommand),
    /// Plaid token exchange
    #[command(subcommand)]
    Plaid(PlaidCommand),
    /// Persona identity verification
    #[command(subcommand)]
    Persona(PersonaCommand),
    /// List FiatConnect providers
    Providers,
    /// Issue an expiring JWT from the wallet and print its claims
    IssueJwt,
}

#[derive(Subcommand, Debug, Clone)]
pub enum BankAccountsCommand {
    List,
    Delete {
        #[arg(long)]
        id: i64,
    },
    Create {
        /// Long-term Plaid access token
        #[arg(long)]
        access_token: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaidCommand {
    /// Exchange a public token for an access token
    Exchange {
        #[arg(long)]
        public_token: String,
    },
    /// Create a link token
    LinkToken {
        #[arg(long)]
        language: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        android: bool,
        /// Existing access token, when editing a linked item
        #[arg(long)]
        access_token: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PersonaCommand {
    Create,
}

/// Wallet identity plus signer loaded from configuration
struct Wallet {
    address: String,
    public_key: String,
    signer: EvmWalletSigner,
}

/// Clients and wallet built from one configuration
pub struct Session {
    client: IhlClient,
    fiatconnect: FiatConnectClient,
    wallet: Option<Wallet>,
}

impl Session {
    /// Build clients and, when configured, load the wallet key through `lookup`
    pub fn from_config(
        config: &CliConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let client = IhlClient::with_base_url(config.client_config(), config.ihl_url())
            .context("create IHL client")?;
        let fiatconnect = FiatConnectClient::new(config.client_config(), config.providers_url())
            .context("create FiatConnect client")?;

        let wallet = match &config.wallet {
            Some(wallet_config) => {
                let private_key = wallet_config.private_key_with(lookup)?;
                let signer = EvmWalletSigner::new(&private_key)
                    .context("load wallet private key")?
                    .with_ttl(wallet_config.jwt_ttl());
                Some(Wallet {
                    address: wallet_config.address.clone(),
                    public_key: wallet_config.public_key.clone(),
                    signer,
                })
            }
            None => None,
        };

        Ok(Self {
            client,
            fiatconnect,
            wallet,
        })
    }

    fn auth(&self) -> Result<WalletAuth<'_>> {
        let wallet = self
            .wallet
            .as_ref()
            .context("this command needs a `wallet` section in the config")?;
        Ok(WalletAuth::new(&wallet.address, &wallet.public_key, &wallet.signer))
    }

    pub async fn execute(&self, command: &Command) -> Result<Value> {
        match command {
            Command::ComplianceStatus { jwt } => {
                let auth = self.auth()?;
                let jwt = match jwt {
                    Some(jwt) => jwt.clone(),
                    None => auth.issue_jwt().await?,
                };
                let status = self
                    .client
                    .compliance_status(auth.wallet_address, &jwt)
                    .await
                    .context("fetch compliance status")?;
                Ok(json!({ "complianceCheckStatus": status }))
            }
            Command::BankAccounts(BankAccountsCommand::List) => {
                let accounts = self
                    .client
                    .bank_accounts(&self.auth()?)
                    .await
                    .context("list bank accounts")?;
                Ok(json!({ "bankAccounts": accounts }))
            }
            Command::BankAccounts(BankAccountsCommand::Delete { id }) => {
                self.client
                    .delete_bank_account(&self.auth()?, *id)
                    .await
                    .context("delete bank account")?;
                info!(id, "bank account deleted");
                Ok(json!({ "deleted": id }))
            }
            Command::BankAccounts(BankAccountsCommand::Create { access_token }) => {
                self.client
                    .create_bank_account(&self.auth()?, access_token)
                    .await
                    .context("create bank account")?;
                Ok(json!({ "created": true }))
            }
            Command::Plaid(PlaidCommand::Exchange { public_token }) => {
                let access_token = self
                    .client
                    .exchange_plaid_access_token(&self.auth()?, public_token)
                    .await
                    .context("exchange plaid public token")?;
                Ok(json!({ "accessToken": access_token }))
            }
            Command::Plaid(PlaidCommand::LinkToken {
                language,
                phone,
                android,
                access_token,
            }) => {
                let params = LinkTokenParams {
                    is_android: *android,
                    language: language.clone(),
                    access_token: access_token.clone(),
                    phone_number: phone.clone(),
                };
                let link_token = self
                    .client
                    .create_link_token(&self.auth()?, &params)
                    .await
                    .context("create plaid link token")?;
                Ok(json!({ "linkToken": link_token }))
            }
            Command::Persona(PersonaCommand::Create) => {
                self.client
                    .create_persona_account(&self.auth()?)
                    .await
                    .context("create persona account")?;
                Ok(json!({ "created": true }))
            }
            Command::Providers => {
                let providers = self.fiatconnect.providers().await;
                Ok(json!({ "providers": providers }))
            }
            Command::IssueJwt => {
                let jwt = self.auth()?.issue_jwt().await?;
                let claims = decode_claims(&jwt)?;
                Ok(json!({
                    "jwt": jwt,
                    "claims": claims,
                    "expiresAt": claims.expires_at(),
                }))
            }
        }
    }
}
