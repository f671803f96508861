use crate::core::errors::ExchangeError;
use crate::core::kernel::RestResponse;
use crate::exchanges::ftx::types::FtxApiResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Check the `{"success","result","error"}` envelope and return the raw `result`
///
/// The envelope is parsed regardless of HTTP status, since FTX reports
/// failures as `success: false` bodies on 4xx responses.
pub fn unwrap_envelope(endpoint: &str, response: RestResponse) -> Result<Value, ExchangeError> {
    let envelope: FtxApiResponse = serde_json::from_str(&response.body).map_err(|e| {
        ExchangeError::DeserializationError(format!(
            "Malformed response envelope from {} (HTTP {}): {}",
            endpoint, response.status, e
        ))
    })?;

    if !envelope.success {
        let message = envelope
            .error
            .unwrap_or_else(|| "unknown error".to_string());
        warn!(endpoint, status = response.status, error = %message, "FTX reported failure");
        return Err(ExchangeError::ApiError {
            endpoint: endpoint.to_string(),
            status: response.status,
            message,
        });
    }

    debug!(endpoint, status = response.status, "FTX envelope ok");
    Ok(envelope.result)
}

/// Decode the raw `result` payload into its typed shape
pub fn decode_result<T: DeserializeOwned>(endpoint: &str, result: Value) -> Result<T, ExchangeError> {
    serde_json::from_value(result).map_err(|e| {
        ExchangeError::DeserializationError(format!(
            "Unexpected result from {}: {}",
            endpoint, e
        ))
    })
}
