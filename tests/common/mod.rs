//! Shared helpers for the FTX integration tests
#![allow(dead_code)]

use ftx_client::core::kernel::ReqwestRest;
use ftx_client::{ExchangeConfig, FtxBuilder, FtxConnector};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_SECRET_KEY: &str = "test_secret_key";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Base URL with the `/api` prefix FTX serves under
pub fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

pub fn public_connector(server: &MockServer) -> FtxConnector<ReqwestRest> {
    FtxBuilder::new()
        .with_base_url(api_url(server))
        .build()
        .expect("connector should build")
}

pub fn authenticated_connector(
    server: &MockServer,
    subaccount: Option<&str>,
) -> FtxConnector<ReqwestRest> {
    let mut config = ExchangeConfig::new(TEST_API_KEY.to_string(), TEST_SECRET_KEY.to_string())
        .base_url(api_url(server));
    if let Some(subaccount) = subaccount {
        config = config.subaccount(subaccount.to_string());
    }

    FtxBuilder::new()
        .with_config(config)
        .build()
        .expect("connector should build")
}

pub fn success(result: Value) -> Value {
    json!({ "success": true, "result": result })
}

pub fn failure(error: &str) -> Value {
    json!({ "success": false, "error": error })
}
