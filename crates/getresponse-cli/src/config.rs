/*
[INPUT]:  YAML configuration file and API_* / X_* environment variables
[OUTPUT]: Parsed connection settings and a configured GetResponse client
[POS]:    Configuration layer - connection setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use getresponse_client::{ClientConfig, Credentials, DEFAULT_API_ENDPOINT, GetResponseClient};
use serde::{Deserialize, Serialize};

/// Connection settings for the GetResponse API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API endpoint, e.g. https://api3.getresponse360.com/v3 for GetResponse 360
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// API key from the account's API settings page
    #[serde(default)]
    pub api_key: String,
    /// GetResponse 360 account domain
    #[serde(default)]
    pub x_domain: Option<String>,
    /// tz database time zone applied to dates in responses
    #[serde(default)]
    pub x_time_zone: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            api_key: String::new(),
            x_domain: None,
            x_time_zone: None,
            timeout_secs: None,
        }
    }
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Override file values with `API_ENDPOINT`, `API_KEY`, `X_DOMAIN` and
    /// `X_TIME_ZONE` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override file values from `lookup`; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(endpoint) = lookup("API_ENDPOINT") {
            self.api_endpoint = endpoint;
        }
        if let Some(api_key) = lookup("API_KEY") {
            self.api_key = api_key;
        }
        if let Some(domain) = lookup("X_DOMAIN") {
            self.x_domain = Some(domain);
        }
        if let Some(time_zone) = lookup("X_TIME_ZONE") {
            self.x_time_zone = Some(time_zone);
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("api_key is required (set it in the config file or via API_KEY)");
        }
        if self.api_endpoint.trim().is_empty() {
            bail!("api_endpoint must not be empty");
        }
        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        let mut credentials = Credentials::new(self.api_key.trim());
        if let Some(domain) = non_empty(&self.x_domain) {
            credentials = credentials.with_domain(domain);
        }
        if let Some(time_zone) = non_empty(&self.x_time_zone) {
            credentials = credentials.with_time_zone(time_zone);
        }
        credentials
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Validate and build a client
    pub fn build_client(&self) -> anyhow::Result<GetResponseClient> {
        self.validate()?;
        GetResponseClient::with_config_and_endpoint(
            self.client_config(),
            self.credentials(),
            &self.api_endpoint,
        )
        .context("build GetResponse client")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
