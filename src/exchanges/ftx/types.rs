use crate::core::errors::ExchangeError;
use crate::core::kernel::QueryValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Standard FTX response envelope
#[derive(Debug, Deserialize)]
pub struct FtxApiResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquidity {
    Maker,
    Taker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Spot,
    Future,
    #[serde(other)]
    Other,
}

/// Candle width, carried on the wire as a number of seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Resolution {
    Sec15,
    Minute,
    Minute5,
    Minute15,
    Hour,
    Hour4,
    Day,
}

impl Resolution {
    pub const ALL: [Self; 7] = [
        Self::Sec15,
        Self::Minute,
        Self::Minute5,
        Self::Minute15,
        Self::Hour,
        Self::Hour4,
        Self::Day,
    ];

    pub const fn as_secs(self) -> u32 {
        match self {
            Self::Sec15 => 15,
            Self::Minute => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Hour => 3600,
            Self::Hour4 => 14400,
            Self::Day => 86400,
        }
    }
}

impl TryFrom<u32> for Resolution {
    type Error = ExchangeError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.as_secs() == secs)
            .ok_or_else(|| {
                ExchangeError::InvalidParameters(format!("Unsupported resolution: {}s", secs))
            })
    }
}

impl From<Resolution> for u32 {
    fn from(resolution: Resolution) -> Self {
        resolution.as_secs()
    }
}

impl FromStr for Resolution {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = s.parse::<u32>().map_err(|e| {
            ExchangeError::InvalidParameters(format!("Invalid resolution '{}': {}", s, e))
        })?;
        Self::try_from(secs)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

impl QueryValue for Resolution {
    fn to_query_value(&self) -> String {
        self.as_secs().to_string()
    }
}

/// An executed trade on the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub id: i64,
    pub market: String,
    #[serde(default)]
    pub future: Option<String>,
    #[serde(default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub quote_currency: Option<String>,
    pub side: Side,
    pub price: Decimal,
    pub size: Decimal,
    pub fee: Decimal,
    pub fee_rate: Decimal,
    #[serde(default)]
    pub fee_currency: Option<String>,
    pub liquidity: Liquidity,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub trade_id: Option<i64>,
    #[serde(rename = "type")]
    pub fill_type: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingPayment {
    pub id: i64,
    pub future: String,
    pub payment: Decimal,
    pub rate: Decimal,
    pub time: DateTime<Utc>,
}

/// Static and 24h metadata for a tradable instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub name: String,
    #[serde(rename = "type")]
    pub market_type: MarketType,
    #[serde(default)]
    pub underlying: Option<String>,
    #[serde(default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub quote_currency: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub post_only: bool,
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub high_leverage_fee_exempt: bool,
    pub price_increment: Decimal,
    pub size_increment: Decimal,
    #[serde(default)]
    pub min_provide_size: Option<Decimal>,
    #[serde(default)]
    pub last: Option<Decimal>,
    #[serde(default)]
    pub bid: Option<Decimal>,
    #[serde(default)]
    pub ask: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub change1h: Option<Decimal>,
    #[serde(default)]
    pub change24h: Option<Decimal>,
    #[serde(default)]
    pub change_bod: Option<Decimal>,
    #[serde(default)]
    pub quote_volume24h: Option<Decimal>,
    #[serde(default)]
    pub volume_usd24h: Option<Decimal>,
}

/// One `[price, size]` level of an order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Decimal; 2]", into = "[Decimal; 2]")]
pub struct PriceLevel {
    pub price: Decimal,
    pub size: Decimal,
}

impl From<[Decimal; 2]> for PriceLevel {
    fn from([price, size]: [Decimal; 2]) -> Self {
        Self { price, size }
    }
}

impl From<PriceLevel> for [Decimal; 2] {
    fn from(level: PriceLevel) -> Self {
        [level.price, level.size]
    }
}

/// Order book snapshot; bids best-first (descending), asks best-first (ascending)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }
}

/// A public trade print
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub liquidation: bool,
    pub price: Decimal,
    pub side: Side,
    pub size: Decimal,
    pub time: DateTime<Utc>,
}

/// OHLCV candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    pub start_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}
