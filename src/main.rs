use ftx_client::{
    build_connector, ExchangeConfig, GetFillsParams, GetHistoricalPricesParams, Resolution,
};
use ftx_client::core::config::ConfigError;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "env-file")]
fn load_config() -> Result<ExchangeConfig, ConfigError> {
    ExchangeConfig::from_env_auto("FTX")
}

#[cfg(not(feature = "env-file"))]
fn load_config() -> Result<ExchangeConfig, ConfigError> {
    ExchangeConfig::from_env("FTX")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // FTX_API_KEY / FTX_SECRET_KEY from the environment or a .env file
    let config = load_config().unwrap_or_else(|e| {
        println!("No credentials loaded ({}), using public endpoints only", e);
        ExchangeConfig::read_only()
    });
    let has_credentials = config.has_credentials();

    let ftx = build_connector(config)?;

    println!("Fetching markets...");
    let markets = ftx.get_markets().await?;
    println!("Found {} markets", markets.len());
    for market in markets.iter().take(5) {
        println!(
            "Market: {} ({:?}), last: {:?}, 24h volume (USD): {:?}",
            market.name, market.market_type, market.last, market.volume_usd24h
        );
    }

    let book = ftx.get_order_book("BTC-PERP", Some(5)).await?;
    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        println!(
            "BTC-PERP top of book: {} x {} / {} x {}",
            bid.price, bid.size, ask.price, ask.size
        );
    }

    let candles = ftx
        .get_historical_prices(
            "BTC-PERP",
            &GetHistoricalPricesParams::new(Resolution::Hour).with_limit(5),
        )
        .await?;
    for candle in &candles {
        println!(
            "{} O:{} H:{} L:{} C:{} V:{}",
            candle.start_time, candle.open, candle.high, candle.low, candle.close, candle.volume
        );
    }

    if has_credentials {
        let fills = ftx
            .get_fills(&GetFillsParams {
                limit: Some(10),
                ..Default::default()
            })
            .await?;
        println!("Recent fills: {}", fills.len());
        for fill in &fills {
            println!(
                "{} {:?} {} @ {} (fee {})",
                fill.market, fill.side, fill.size, fill.price, fill.fee
            );
        }
    }

    Ok(())
}
