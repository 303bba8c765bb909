/*
[INPUT]:  YAML configuration file, environment
[OUTPUT]: Parsed CLI configuration and resolved client settings
[POS]:    Configuration layer - network, timeouts, wallet identity
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use ihl_adapter::{ClientConfig, Network};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the IHL command line
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Deployment providing default URLs
    #[serde(default)]
    pub network: Network,
    /// Overrides the network's IHL base URL
    #[serde(default)]
    pub ihl_url: Option<String>,
    /// Overrides the network's FiatConnect provider registry URL
    #[serde(default)]
    pub providers_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Wallet used to sign requests
    #[serde(default)]
    pub wallet: Option<WalletConfig>,
}

/// Wallet identity configuration. The private key itself is never stored here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
    /// Wallet address requests are made for
    pub address: String,
    /// Public key sent as the JWT issuer
    pub public_key: String,
    /// Environment variable holding the hex private key
    #[serde(default = "default_private_key_env")]
    pub private_key_env: String,
    #[serde(default = "default_jwt_ttl_secs")]
    pub jwt_ttl_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_private_key_env() -> String {
    "IHL_WALLET_PRIVATE_KEY".to_string()
}

fn default_jwt_ttl_secs() -> u64 {
    300
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        if let Some(wallet) = &self.wallet {
            if wallet.address.trim().is_empty() {
                bail!("wallet.address must not be empty");
            }
            if wallet.jwt_ttl_secs == 0 {
                bail!("wallet.jwt_ttl_secs must be greater than zero");
            }
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn ihl_url(&self) -> &str {
        self.ihl_url.as_deref().unwrap_or(self.network.ihl_url())
    }

    pub fn providers_url(&self) -> &str {
        self.providers_url
            .as_deref()
            .unwrap_or(self.network.fiatconnect_providers_url())
    }
}

impl WalletConfig {
    /// Read the private key through `lookup` (normally the process environment)
    pub fn private_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        lookup(&self.private_key_env)
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("environment variable {} is not set", self.private_key_env))
    }

    pub fn jwt_ttl(&self) -> Duration {
        Duration::from_secs(self.jwt_ttl_secs)
    }
}

/// `<config dir>/ihl/config.yaml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ihl")
        .join("config.yaml")
}
