use crate::core::errors::ExchangeError;
use crate::core::kernel::{QueryParams, RestClient, RestRequest};
use crate::exchanges::ftx::codec::{decode_result, unwrap_envelope};
use serde::de::DeserializeOwned;

/// Thin typed wrapper around `RestClient` for the FTX API
///
/// Every call is one round trip: send, check the envelope, decode `result`.
#[derive(Debug, Clone)]
pub struct FtxRestClient<R: RestClient> {
    client: R,
}

impl<R: RestClient> FtxRestClient<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// GET `endpoint` and decode its `result`
    pub async fn get_result<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: QueryParams,
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        self.send(
            RestRequest::get(endpoint)
                .with_query(query)
                .authenticated(authenticated),
        )
        .await
    }

    /// Send an arbitrary prepared request and decode its `result`
    pub async fn send<T: DeserializeOwned>(&self, request: RestRequest) -> Result<T, ExchangeError> {
        let endpoint = request.endpoint.clone();
        let response = self.client.execute(request).await?;
        let result = unwrap_envelope(&endpoint, response)?;
        decode_result(&endpoint, result)
    }
}
