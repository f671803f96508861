use crate::core::errors::ExchangeError;
use crate::core::kernel::{RestClient, ToQuery};
use crate::exchanges::ftx::requests::{GetFillsParams, GetFundingPaymentsParams};
use crate::exchanges::ftx::rest::FtxRestClient;
use crate::exchanges::ftx::types::{Fill, FundingPayment};
use tracing::instrument;

const API_FILLS: &str = "/fills";
const API_FUNDING_PAYMENTS: &str = "/funding_payments";

/// Authenticated account history: fills and funding payments
#[derive(Debug, Clone)]
pub struct Fills<R: RestClient> {
    rest: FtxRestClient<R>,
}

impl<R: RestClient> Fills<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: FtxRestClient::new(rest),
        }
    }

    /// `GET /fills`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_fills(&self, params: &GetFillsParams) -> Result<Vec<Fill>, ExchangeError> {
        let query = params.to_query()?;
        self.rest.get_result(API_FILLS, query, true).await
    }

    /// `GET /funding_payments`
    #[instrument(skip(self), fields(exchange = "ftx"))]
    pub async fn get_funding_payments(
        &self,
        params: &GetFundingPaymentsParams,
    ) -> Result<Vec<FundingPayment>, ExchangeError> {
        let query = params.to_query()?;
        self.rest.get_result(API_FUNDING_PAYMENTS, query, true).await
    }
}
