pub mod builder;
pub mod codec;
pub mod connector;
pub mod requests;
pub mod rest;
pub mod signer;
pub mod types;

pub use builder::{build_connector, FtxBuilder, DEFAULT_BASE_URL};
pub use connector::{Fills, FtxConnector, Markets};
pub use requests::{
    GetFillsParams, GetFundingPaymentsParams, GetHistoricalPricesParams, GetOrderBookParams,
    GetTradesParams, SortOrder,
};
pub use rest::FtxRestClient;
pub use signer::FtxSigner;
pub use types::{
    Fill, FundingPayment, HistoricalPrice, Liquidity, Market, MarketType, OrderBook, PriceLevel,
    Resolution, Side, Trade,
};
