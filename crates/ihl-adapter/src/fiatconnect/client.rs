/*
[INPUT]:  Provider registry URL, provider URL and account schema/body
[OUTPUT]: List of FiatConnect providers; NotImplemented for account creation
[POS]:    FiatConnect layer - HTTP client
[UPDATE]: When FiatConnect SDK integration lands
*/

use reqwest::{Client, Url};
use tracing::{debug, error};

use crate::http::client::read_json;
use crate::http::{ClientConfig, IhlError, Result};
use crate::types::{
    FiatAccount, FiatAccountSchema, FiatConnectClientConfig, Network, NewFiatAccountRequest, ProvidersResponse,
};

/// Client for FiatConnect provider discovery
#[derive(Debug, Clone)]
pub struct FiatConnectClient {
    http_client: Client,
    providers_url: Url,
}

impl FiatConnectClient {
    pub fn new(config: ClientConfig, providers_url: &str) -> Result<Self> {
        Ok(Self {
            http_client: config.build_http_client()?,
            providers_url: Url::parse(providers_url)?,
        })
    }

    pub fn for_network(config: ClientConfig, network: Network) -> Result<Self> {
        Self::new(config, network.fiatconnect_providers_url())
    }

    pub fn providers_url(&self) -> &Url {
        &self.providers_url
    }

    /// Fetch the registered FiatConnect providers.
    ///
    /// Failures are logged and yield an empty list.
    pub async fn providers(&self) -> Vec<FiatConnectClientConfig> {
        match self.fetch_providers().await {
            Ok(providers) => {
                debug!(count = providers.len(), "fetched FiatConnect providers");
                providers
            }
            Err(err) => {
                error!(error = %err, url = %self.providers_url, "failed to fetch FiatConnect providers");
                Vec::new()
            }
        }
    }

    async fn fetch_providers(&self) -> Result<Vec<FiatConnectClientConfig>> {
        let response = self
            .http_client
            .get(self.providers_url.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IhlError::status(
                format!("FiatConnect GET {}", self.providers_url.path()),
                status,
            ));
        }

        let body: ProvidersResponse = read_json(response).await?;
        Ok(body.providers)
    }

    /// Register a new fiat account with a provider.
    ///
    /// Not wired to the FiatConnect SDK yet; always fails without sending anything.
    pub async fn add_new_fiat_account(
        &self,
        provider_url: &str,
        schema: FiatAccountSchema,
        _body: &NewFiatAccountRequest,
    ) -> Result<FiatAccount> {
        debug!(provider_url, ?schema, "add_new_fiat_account called");
        Err(IhlError::NotImplemented("addNewFiatAccount".to_string()))
    }
}
