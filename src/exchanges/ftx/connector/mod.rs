use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::ftx::requests::{
    GetFillsParams, GetFundingPaymentsParams, GetHistoricalPricesParams, GetTradesParams,
};
use crate::exchanges::ftx::types::{
    Fill, FundingPayment, HistoricalPrice, Market, OrderBook, Trade,
};

pub mod fills;
pub mod markets;

pub use fills::Fills;
pub use markets::Markets;

/// FTX connector composing the endpoint groups over one shared REST client
#[derive(Debug, Clone)]
pub struct FtxConnector<R: RestClient> {
    pub markets: Markets<R>,
    pub fills: Fills<R>,
}

impl<R: RestClient + Clone> FtxConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            markets: Markets::new(rest.clone()),
            fills: Fills::new(rest),
        }
    }
}

// Delegate to the endpoint groups
impl<R: RestClient> FtxConnector<R> {
    pub async fn get_markets(&self) -> Result<Vec<Market>, ExchangeError> {
        self.markets.get_markets().await
    }

    pub async fn get_market(&self, name: &str) -> Result<Market, ExchangeError> {
        self.markets.get_market(name).await
    }

    pub async fn get_order_book(
        &self,
        name: &str,
        depth: Option<u32>,
    ) -> Result<OrderBook, ExchangeError> {
        self.markets.get_order_book(name, depth).await
    }

    pub async fn get_trades(
        &self,
        name: &str,
        params: &GetTradesParams,
    ) -> Result<Vec<Trade>, ExchangeError> {
        self.markets.get_trades(name, params).await
    }

    pub async fn get_historical_prices(
        &self,
        name: &str,
        params: &GetHistoricalPricesParams,
    ) -> Result<Vec<HistoricalPrice>, ExchangeError> {
        self.markets.get_historical_prices(name, params).await
    }

    pub async fn get_fills(&self, params: &GetFillsParams) -> Result<Vec<Fill>, ExchangeError> {
        self.fills.get_fills(params).await
    }

    pub async fn get_funding_payments(
        &self,
        params: &GetFundingPaymentsParams,
    ) -> Result<Vec<FundingPayment>, ExchangeError> {
        self.fills.get_funding_payments(params).await
    }
}
