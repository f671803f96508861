use crate::core::errors::ExchangeError;
use crate::core::kernel::{SignatureResult, Signer};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use std::collections::HashMap;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_KEY: &str = "FTX-KEY";
pub const HEADER_TIMESTAMP: &str = "FTX-TS";
pub const HEADER_SIGNATURE: &str = "FTX-SIGN";
pub const HEADER_SUBACCOUNT: &str = "FTX-SUBACCOUNT";

/// FTX HMAC-SHA256 signer
///
/// The prehash string is `timestamp + METHOD + request_path[?query] + body`,
/// signed with the API secret and hex encoded.
pub struct FtxSigner {
    api_key: String,
    secret_key: Secret<String>,
    subaccount: Option<String>,
}

impl std::fmt::Debug for FtxSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FtxSigner")
            .field("subaccount", &self.subaccount)
            .finish_non_exhaustive()
    }
}

impl FtxSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key: Secret::new(secret_key),
            subaccount: None,
        }
    }

    pub fn with_subaccount(mut self, subaccount: Option<String>) -> Self {
        self.subaccount = subaccount.filter(|s| !s.is_empty());
        self
    }

    fn generate_signature(&self, prehash: &str) -> Result<String, ExchangeError> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;

        mac.update(prehash.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Build the string FTX expects to be signed
pub fn signature_payload(
    timestamp: u64,
    method: &str,
    request_path: &str,
    query_string: &str,
    body: &[u8],
) -> Result<String, ExchangeError> {
    let body = std::str::from_utf8(body)
        .map_err(|e| ExchangeError::AuthError(format!("Invalid body encoding: {}", e)))?;

    let mut payload = format!("{}{}{}", timestamp, method, request_path);
    if !query_string.is_empty() {
        payload.push('?');
        payload.push_str(query_string);
    }
    payload.push_str(body);

    Ok(payload)
}

/// Percent-encode a sub-account name for the `FTX-SUBACCOUNT` header
pub fn encode_subaccount(subaccount: &str) -> String {
    url::form_urlencoded::byte_serialize(subaccount.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl Signer for FtxSigner {
    fn sign_request(
        &self,
        method: &str,
        request_path: &str,
        query_string: &str,
        body: &[u8],
        timestamp: u64,
    ) -> SignatureResult {
        let payload = signature_payload(timestamp, method, request_path, query_string, body)?;
        let signature = self.generate_signature(&payload)?;

        let mut headers = HashMap::new();
        headers.insert(HEADER_KEY.to_string(), self.api_key.clone());
        headers.insert(HEADER_TIMESTAMP.to_string(), timestamp.to_string());
        headers.insert(HEADER_SIGNATURE.to_string(), signature);

        if let Some(subaccount) = &self.subaccount {
            headers.insert(HEADER_SUBACCOUNT.to_string(), encode_subaccount(subaccount));
        }

        // Credentials travel in headers only
        Ok((headers, Vec::new()))
    }
}
