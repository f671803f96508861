use crate::core::errors::ExchangeError;
use crate::core::kernel::{QueryParams, QueryValue, ToQuery};
use crate::exchanges::ftx::types::Resolution;

/// Result ordering for endpoints that support it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl QueryValue for SortOrder {
    fn to_query_value(&self) -> String {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
        .to_string()
    }
}

/// Filters for `GET /fills`. Times are unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFillsParams {
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub order: Option<SortOrder>,
    pub order_id: Option<i64>,
}

impl ToQuery for GetFillsParams {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        let mut query = QueryParams::new();
        query.insert_opt("market", self.market.as_deref());
        query.insert_opt("limit", self.limit.as_ref());
        query.insert_opt("start_time", self.start_time.as_ref());
        query.insert_opt("end_time", self.end_time.as_ref());
        query.insert_opt("order", self.order.as_ref());
        query.insert_opt("orderId", self.order_id.as_ref());
        Ok(query)
    }
}

/// Filters for `GET /funding_payments`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFundingPaymentsParams {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub future: Option<String>,
}

impl ToQuery for GetFundingPaymentsParams {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        let mut query = QueryParams::new();
        query.insert_opt("start_time", self.start_time.as_ref());
        query.insert_opt("end_time", self.end_time.as_ref());
        query.insert_opt("future", self.future.as_deref());
        Ok(query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTradesParams {
    pub limit: Option<u32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

impl ToQuery for GetTradesParams {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        let mut query = QueryParams::new();
        query.insert_opt("limit", self.limit.as_ref());
        query.insert_opt("start_time", self.start_time.as_ref());
        query.insert_opt("end_time", self.end_time.as_ref());
        Ok(query)
    }
}

/// Parameters for `GET /markets/{name}/candles`; resolution is mandatory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHistoricalPricesParams {
    pub resolution: Resolution,
    pub limit: Option<u32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

impl GetHistoricalPricesParams {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            limit: None,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_range(mut self, start_time: i64, end_time: i64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }
}

impl ToQuery for GetHistoricalPricesParams {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        let mut query = QueryParams::new();
        query.insert("resolution", &self.resolution);
        query.insert_opt("limit", self.limit.as_ref());
        query.insert_opt("start_time", self.start_time.as_ref());
        query.insert_opt("end_time", self.end_time.as_ref());
        Ok(query)
    }
}

/// Optional depth for `GET /markets/{name}/orderbook`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetOrderBookParams {
    pub depth: Option<u32>,
}

impl ToQuery for GetOrderBookParams {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        let mut query = QueryParams::new();
        query.insert_opt("depth", self.depth.as_ref());
        Ok(query)
    }
}
