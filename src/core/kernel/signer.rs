use crate::core::errors::ExchangeError;
use std::collections::HashMap;

/// Result type for signing operations: (headers, `query_params`)
pub type SignatureResult = Result<(HashMap<String, String>, Vec<(String, String)>), ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations attach exchange-specific credentials to an outgoing
/// request. They receive the request exactly as it will be sent on the wire.
pub trait Signer: Send + Sync {
    /// Sign a request and return headers and extra query parameters
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `request_path` - Full URL path including any base path prefix
    /// * `query_string` - Encoded query string (without leading '?')
    /// * `body` - Raw request body bytes
    /// * `timestamp` - Request timestamp in milliseconds
    ///
    /// # Returns
    /// Tuple of (headers, additional query params) to include in the request
    fn sign_request(
        &self,
        method: &str,
        request_path: &str,
        query_string: &str,
        body: &[u8],
        timestamp: u64,
    ) -> SignatureResult;
}
