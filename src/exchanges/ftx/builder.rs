use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::ftx::connector::FtxConnector;
use crate::exchanges::ftx::signer::FtxSigner;
use reqwest::header::HeaderValue;
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "https://ftx.com/api";
const EXCHANGE_NAME: &str = "ftx";

/// Builder for FTX connectors
///
/// A signer is attached only when the configuration carries credentials;
/// without one, authenticated endpoints fail before any request is sent.
pub struct FtxBuilder {
    config: ExchangeConfig,
    rest_timeout: u64,
    user_agent: Option<String>,
}

impl Default for FtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FtxBuilder {
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(),
            rest_timeout: 30,
            user_agent: None,
        }
    }

    /// Set the exchange configuration
    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials, keeping any base URL and sub-account already set
    pub fn with_credentials(mut self, api_key: String, secret_key: String) -> Self {
        let mut config = ExchangeConfig::new(api_key, secret_key);
        config.base_url = self.config.base_url.take();
        config.subaccount = self.config.subaccount.take();
        self.config = config;
        self
    }

    pub fn with_subaccount(mut self, subaccount: String) -> Self {
        self.config.subaccount = Some(subaccount);
        self
    }

    /// Set base URL for REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    /// Set REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Build the shared REST client
    pub fn build_rest(self) -> Result<ReqwestRest, ExchangeError> {
        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut rest_config = RestClientConfig::new(base_url, EXCHANGE_NAME.to_string())
            .with_timeout(self.rest_timeout);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let mut rest_builder = RestClientBuilder::new(rest_config);

        if self.config.has_credentials() {
            if HeaderValue::from_str(self.config.api_key()).is_err() {
                return Err(ExchangeError::ConfigurationError(
                    "API key is not a valid HTTP header value".to_string(),
                ));
            }
            let signer = FtxSigner::new(
                self.config.api_key().to_string(),
                self.config.secret_key().to_string(),
            )
            .with_subaccount(self.config.subaccount.clone());
            rest_builder = rest_builder.with_signer(Arc::new(signer));
        }

        rest_builder.build()
    }

    pub fn build(self) -> Result<FtxConnector<ReqwestRest>, ExchangeError> {
        Ok(FtxConnector::new(self.build_rest()?))
    }
}

/// Create an FTX connector from configuration
pub fn build_connector(config: ExchangeConfig) -> Result<FtxConnector<ReqwestRest>, ExchangeError> {
    FtxBuilder::new().with_config(config).build()
}
