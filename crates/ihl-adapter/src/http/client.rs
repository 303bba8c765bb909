/*
[INPUT]:  HTTP configuration (base URL, timeouts), endpoint declarations, bearer JWTs
[OUTPUT]: Configured reqwest client, authorized requests, status-checked responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::WalletAuth;
use crate::http::{Endpoint, Result};
use crate::types::Network;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub(crate) fn build_http_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()?)
    }
}

/// Client for the in-house-liquidity API.
///
/// Holds no credentials: signed operations ask the wallet for a fresh JWT on
/// every call.
#[derive(Debug, Clone)]
pub struct IhlClient {
    http_client: Client,
    base_url: String,
}

impl IhlClient {
    /// Create a client for the default network with default configuration
    pub fn new() -> Result<Self> {
        Self::for_network(ClientConfig::default(), Network::default())
    }

    /// Create a client for the IHL deployment of `network`
    pub fn for_network(config: ClientConfig, network: Network) -> Result<Self> {
        Self::with_base_url(config, network.ihl_url())
    }

    /// Create a client with a custom base URL (e.g. a mock server)
    pub fn with_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(Self {
            http_client: config.build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL followed by `path` (which may carry a query string)
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Build an authorized JSON request for `endpoint`
    pub(crate) fn request(&self, endpoint: &Endpoint, path: &str, jwt: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        Ok(self
            .http_client
            .request(endpoint.method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {jwt}")))
    }

    /// Obtain a fresh credential from the wallet, then build the request
    pub(crate) async fn signed_request(
        &self,
        endpoint: &Endpoint,
        path: &str,
        auth: &WalletAuth<'_>,
    ) -> Result<RequestBuilder> {
        let jwt = auth.issue_jwt().await?;
        self.request(endpoint, path, &jwt)
    }

    /// Send the request and apply the endpoint's status policy
    pub(crate) async fn send(&self, endpoint: &Endpoint, builder: RequestBuilder) -> Result<Response> {
        debug!(operation = %endpoint.operation(), "sending IHL request");

        let response = builder.send().await?;
        let status = response.status();
        if let Err(err) = endpoint.check(status) {
            warn!(operation = %endpoint.operation(), status = status.as_u16(), "IHL request rejected");
            return Err(err);
        }

        Ok(response)
    }
}

/// Decode a JSON response body
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
