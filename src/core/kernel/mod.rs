//! Exchange-agnostic transport layer
//!
//! The kernel turns a [`RestRequest`] into an HTTP call and hands back the raw
//! [`RestResponse`]. It knows nothing about any particular exchange:
//!
//! - [`QueryParams`] / [`ToQuery`]: explicit query-parameter serialization
//! - [`RestClient`] / [`ReqwestRest`]: request building, signing and transport
//! - [`Signer`]: pluggable request authentication
//!
//! ```rust,no_run
//! use ftx_client::core::kernel::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rest_config = RestClientConfig::new("https://ftx.com/api".to_string(), "ftx".to_string());
//! let rest = RestClientBuilder::new(rest_config).build()?;
//!
//! let query = QueryParams::new().with("depth", &5_u32);
//! let response = rest.get("/markets/BTC-PERP/orderbook", query, false).await?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```
pub mod query;
pub mod rest;
pub mod signer;

pub use query::{QueryParams, QueryValue, ToQuery};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig, RestRequest, RestResponse};
pub use signer::{SignatureResult, Signer};
