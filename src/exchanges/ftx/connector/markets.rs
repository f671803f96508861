use crate::core::errors::ExchangeError;
use crate::core::kernel::{QueryParams, RestClient, ToQuery};
use crate::exchanges::ftx::requests::{
    GetHistoricalPricesParams, GetOrderBookParams, GetTradesParams,
};
use crate::exchanges::ftx::rest::FtxRestClient;
use crate::exchanges::ftx::types::{HistoricalPrice, Market, OrderBook, Trade};
use tracing::instrument;

const API_MARKETS: &str = "/markets";

fn market_path(name: &str, resource: Option<&str>) -> Result<String, ExchangeError> {
    if name.is_empty() {
        return Err(ExchangeError::InvalidParameters(
            "Market name cannot be empty".to_string(),
        ));
    }

    Ok(resource.map_or_else(
        || format!("{}/{}", API_MARKETS, name),
        |resource| format!("{}/{}/{}", API_MARKETS, name, resource),
    ))
}

/// Public market data endpoints
#[derive(Debug, Clone)]
pub struct Markets<R: RestClient> {
    rest: FtxRestClient<R>,
}

impl<R: RestClient> Markets<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: FtxRestClient::new(rest),
        }
    }

    /// `GET /markets`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_markets(&self) -> Result<Vec<Market>, ExchangeError> {
        self.rest
            .get_result(API_MARKETS, QueryParams::new(), false)
            .await
    }

    /// `GET /markets/{name}`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_market(&self, name: &str) -> Result<Market, ExchangeError> {
        let path = market_path(name, None)?;
        self.rest.get_result(&path, QueryParams::new(), false).await
    }

    /// `GET /markets/{name}/orderbook`; `depth` is omitted from the query when `None`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_order_book(
        &self,
        name: &str,
        depth: Option<u32>,
    ) -> Result<OrderBook, ExchangeError> {
        let path = market_path(name, Some("orderbook"))?;
        let query = GetOrderBookParams { depth }.to_query()?;
        self.rest.get_result(&path, query, false).await
    }

    /// `GET /markets/{name}/trades`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_trades(
        &self,
        name: &str,
        params: &GetTradesParams,
    ) -> Result<Vec<Trade>, ExchangeError> {
        let path = market_path(name, Some("trades"))?;
        let query = params.to_query()?;
        self.rest.get_result(&path, query, false).await
    }

    /// `GET /markets/{name}/candles`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_historical_prices(
        &self,
        name: &str,
        params: &GetHistoricalPricesParams,
    ) -> Result<Vec<HistoricalPrice>, ExchangeError> {
        let path = market_path(name, Some("candles"))?;
        let query = params.to_query()?;
        self.rest.get_result(&path, query, false).await
    }
}
