//! Typed async client for the FTX REST API.
//!
//! ```rust,no_run
//! use ftx_client::{build_connector, ExchangeConfig, GetHistoricalPricesParams, Resolution};
//!
//! # async fn example() -> Result<(), ftx_client::ExchangeError> {
//! let ftx = build_connector(ExchangeConfig::read_only())?;
//!
//! let markets = ftx.get_markets().await?;
//! let book = ftx.get_order_book("BTC-PERP", Some(5)).await?;
//! let candles = ftx
//!     .get_historical_prices("BTC-PERP", &GetHistoricalPricesParams::new(Resolution::Hour))
//!     .await?;
//! # Ok(())
//! # }
//! ```
pub mod core;
pub mod exchanges;

pub use crate::core::{config::ExchangeConfig, errors::ExchangeError};
pub use exchanges::ftx::*;
