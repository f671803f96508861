use crate::core::errors::ExchangeError;
use crate::core::kernel::query::QueryParams;
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

/// A fully described HTTP request, ready to be signed and sent
#[derive(Debug, Clone)]
pub struct RestRequest {
    pub method: Method,
    /// Path relative to the configured base URL, already parameter-substituted
    pub endpoint: String,
    pub query: QueryParams,
    pub body: Vec<u8>,
    pub authenticated: bool,
    /// Per-request deadline; overrides the client-wide timeout
    pub timeout: Option<Duration>,
}

impl RestRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: QueryParams::new(),
            body: Vec::new(),
            authenticated: false,
            timeout: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Encode `body` as the JSON request body; the seam for body-carrying endpoints
    pub fn with_json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ExchangeError> {
        self.body = serde_json::to_vec(body).map_err(|e| {
            ExchangeError::SerializationError(format!(
                "Failed to serialize request body for {}: {}",
                self.endpoint, e
            ))
        })?;
        Ok(self)
    }

    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Status and full body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status: u16,
    pub body: String,
}

/// REST client trait for making HTTP requests
///
/// The transport is exchange-agnostic: it signs when asked, sends, and hands
/// back the raw body. Envelope handling belongs to the exchange layer.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Send a prepared request
    async fn execute(&self, request: RestRequest) -> Result<RestResponse, ExchangeError>;

    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query` - Query parameters
    /// * `authenticated` - Whether to sign the request
    async fn get(
        &self,
        endpoint: &str,
        query: QueryParams,
        authenticated: bool,
    ) -> Result<RestResponse, ExchangeError> {
        self.execute(
            RestRequest::get(endpoint)
                .with_query(query)
                .authenticated(authenticated),
        )
        .await
    }

    /// Whether authenticated requests can be signed
    fn can_sign(&self) -> bool;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API, including any path prefix such as `/api`
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            exchange_name,
            timeout_seconds: 30,
            user_agent: concat!("ftx-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        Url::parse(&self.config.base_url).map_err(|e| {
            ExchangeError::ConfigurationError(format!(
                "Invalid base URL '{}': {}",
                self.config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: Arc::new(self.config),
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using reqwest
///
/// Cloning is cheap; clones share the connection pool and configuration.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: Arc<RestClientConfig>,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Create a new `ReqwestRest` instance with default settings
    pub fn new(
        base_url: String,
        exchange_name: String,
        signer: Option<Arc<dyn Signer>>,
    ) -> Result<Self, ExchangeError> {
        let mut builder = RestClientBuilder::new(RestClientConfig::new(base_url, exchange_name));
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        builder.build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Get the current timestamp in milliseconds
    fn get_timestamp() -> Result<u64, ExchangeError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .map_err(|e| ExchangeError::AuthError(format!("Failed to get timestamp: {}", e)))
    }

    /// Convert a signer header into its wire form; values are never echoed back
    fn signed_header(
        endpoint: &str,
        key: &str,
        value: &str,
    ) -> Result<(HeaderName, HeaderValue), ExchangeError> {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ExchangeError::ConfigurationError(format!(
                "Invalid auth header name {} for {}: {}",
                key, endpoint, e
            ))
        })?;
        let value = HeaderValue::from_str(value).map_err(|_| {
            ExchangeError::ConfigurationError(format!(
                "Credentials produce an invalid {} header for {}",
                key, endpoint
            ))
        })?;
        Ok((name, value))
    }

    /// Build the full URL for an endpoint, with the query string appended
    fn build_url(&self, endpoint: &str, query: &QueryParams) -> Result<Url, ExchangeError> {
        let mut raw = format!("{}{}", self.config.base_url, endpoint);
        if !query.is_empty() {
            raw.push('?');
            raw.push_str(&query.to_query_string());
        }

        Url::parse(&raw).map_err(|e| {
            ExchangeError::ConfigurationError(format!("Invalid request URL '{}': {}", raw, e))
        })
    }

    /// Read the full response body
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(
        &self,
        endpoint: &str,
        response: Response,
    ) -> Result<RestResponse, ExchangeError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!(
                "Failed to read response body from {}: {}",
                endpoint, e
            ))
        })?;

        trace!("Response body: {}", body);

        Ok(RestResponse { status, body })
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(
        skip(self, request),
        fields(
            exchange = %self.config.exchange_name,
            method = %request.method,
            endpoint = %request.endpoint,
            param_count = request.query.len(),
        )
    )]
    async fn execute(&self, request: RestRequest) -> Result<RestResponse, ExchangeError> {
        let url = self.build_url(&request.endpoint, &request.query)?;
        let mut builder = self.client.request(request.method.clone(), url.clone());

        if request.authenticated {
            let Some(signer) = &self.signer else {
                return Err(ExchangeError::ConfigurationError(format!(
                    "{} requires authentication but no credentials are configured",
                    request.endpoint
                )));
            };

            let timestamp = Self::get_timestamp()?;
            let (headers, signed_params) = signer.sign_request(
                request.method.as_str(),
                url.path(),
                url.query().unwrap_or_default(),
                &request.body,
                timestamp,
            )?;

            for (key, value) in headers {
                let (name, value) = Self::signed_header(&request.endpoint, &key, &value)?;
                builder = builder.header(name, value);
            }

            if !signed_params.is_empty() {
                builder = builder.query(&signed_params);
            }
        }

        if !request.body.is_empty() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(request.body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            ExchangeError::NetworkError(format!(
                "{} {} failed: {}",
                request.method, request.endpoint, e
            ))
        })?;

        self.handle_response(&request.endpoint, response).await
    }

    fn can_sign(&self) -> bool {
        self.signer.is_some()
    }
}
