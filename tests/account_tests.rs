mod common;

use common::{
    authenticated_connector, failure, public_connector, setup_mock_server, success, TEST_API_KEY,
    TEST_SECRET_KEY,
};
use ftx_client::core::kernel::{RestClientBuilder, RestClientConfig, Signer};
use ftx_client::{
    ExchangeConfig, ExchangeError, FtxBuilder, FtxConnector, FtxSigner, GetFillsParams,
    GetFundingPaymentsParams, Liquidity, Side, SortOrder,
};
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn fills_payload() -> serde_json::Value {
    json!([
        {
            "fee": 20.1374935,
            "feeCurrency": "USD",
            "feeRate": 0.0005,
            "future": "EOS-0329",
            "id": 11215,
            "liquidity": "taker",
            "market": "EOS-0329",
            "baseCurrency": null,
            "quoteCurrency": null,
            "orderId": 8436981,
            "tradeId": 1013912,
            "price": 4.201,
            "side": "buy",
            "size": 9587,
            "time": "2019-03-27T19:15:10.204619+00:00",
            "type": "order"
        },
        {
            "fee": -0.05,
            "feeRate": -0.0001,
            "future": null,
            "id": 11216,
            "liquidity": "maker",
            "market": "BTC/USD",
            "baseCurrency": "BTC",
            "quoteCurrency": "USD",
            "orderId": 8436982,
            "tradeId": null,
            "price": 29000.5,
            "side": "sell",
            "size": 0.01,
            "time": "2021-01-01T00:00:00+00:00",
            "type": "order"
        }
    ])
}

#[tokio::test]
async fn test_get_fills_is_signed() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/fills"))
        .and(query_param("market", "BTC/USD"))
        .and(query_param("start_time", "1609459200"))
        .and(header("FTX-KEY", TEST_API_KEY))
        .and(header_exists("FTX-TS"))
        .and(header_exists("FTX-SIGN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(fills_payload())))
        .expect(1)
        .mount(&server)
        .await;

    let params = GetFillsParams {
        market: Some("BTC/USD".to_string()),
        start_time: Some(1_609_459_200),
        ..Default::default()
    };
    let fills = authenticated_connector(&server, None)
        .get_fills(&params)
        .await
        .unwrap();

    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].id, 11215);
    assert_eq!(fills[0].side, Side::Buy);
    assert_eq!(fills[0].liquidity, Liquidity::Taker);
    assert_eq!(fills[0].fee, dec!(20.1374935));
    assert_eq!(fills[0].fee_currency.as_deref(), Some("USD"));
    assert_eq!(fills[1].market, "BTC/USD");
    assert_eq!(fills[1].side, Side::Sell);
    assert_eq!(fills[1].liquidity, Liquidity::Maker);
    assert_eq!(fills[1].fee, dec!(-0.05));
    assert!(fills[1].future.is_none());
    assert!(fills[1].trade_id.is_none());
    assert!(fills[1].fee_currency.is_none());

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert!(request.headers.get("FTX-SUBACCOUNT").is_none());

    // Recompute the signature over exactly what was sent
    let timestamp: u64 = request.headers["FTX-TS"].to_str().unwrap().parse().unwrap();
    let signer = FtxSigner::new(TEST_API_KEY.to_string(), TEST_SECRET_KEY.to_string());
    let (expected, _) = signer
        .sign_request(
            "GET",
            request.url.path(),
            request.url.query().unwrap_or_default(),
            &[],
            timestamp,
        )
        .unwrap();
    assert_eq!(
        request.headers["FTX-SIGN"].to_str().unwrap(),
        expected["FTX-SIGN"]
    );
}

#[tokio::test]
async fn test_get_fills_full_params() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/fills"))
        .and(query_param("limit", "50"))
        .and(query_param("end_time", "1612137600"))
        .and(query_param("order", "asc"))
        .and(query_param("orderId", "8436981"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let params = GetFillsParams {
        limit: Some(50),
        end_time: Some(1_612_137_600),
        order: Some(SortOrder::Asc),
        order_id: Some(8_436_981),
        ..Default::default()
    };
    let fills = authenticated_connector(&server, None)
        .get_fills(&params)
        .await
        .unwrap();
    assert!(fills.is_empty());
}

#[tokio::test]
async fn test_subaccount_header() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/funding_payments"))
        .and(header("FTX-SUBACCOUNT", "my%20sub"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let payments = authenticated_connector(&server, Some("my sub"))
        .get_funding_payments(&GetFundingPaymentsParams::default())
        .await
        .unwrap();
    assert!(payments.is_empty());
}

#[tokio::test]
async fn test_get_funding_payments() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/funding_payments"))
        .and(query_param("future", "ETH-PERP"))
        .and(query_param("start_time", "1559881511"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([
            {
                "future": "ETH-PERP",
                "id": 33830,
                "payment": 0.0441342,
                "time": "2019-05-15T18:00:00+00:00",
                "rate": 0.0001
            }
        ]))))
        .mount(&server)
        .await;

    let params = GetFundingPaymentsParams {
        start_time: Some(1_559_881_511),
        end_time: None,
        future: Some("ETH-PERP".to_string()),
    };
    let payments = authenticated_connector(&server, None)
        .get_funding_payments(&params)
        .await
        .unwrap();

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].future, "ETH-PERP");
    assert_eq!(payments[0].id, 33830);
    assert_eq!(payments[0].payment, dec!(0.0441342));
    assert_eq!(payments[0].rate, dec!(0.0001));
}

#[tokio::test]
async fn test_fills_without_credentials_never_hits_network() {
    let server = setup_mock_server().await;

    let err = public_connector(&server)
        .get_fills(&GetFillsParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ExchangeError::ConfigurationError(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unencodable_api_key_is_rejected_by_builder() {
    let server = setup_mock_server().await;
    let config = ExchangeConfig::new("key\n".to_string(), TEST_SECRET_KEY.to_string())
        .base_url(common::api_url(&server));

    let err = FtxBuilder::new().with_config(config).build().unwrap_err();

    assert!(matches!(err, ExchangeError::ConfigurationError(_)));
}

#[tokio::test]
async fn test_unencodable_api_key_never_hits_network() {
    let server = setup_mock_server().await;
    let signer = FtxSigner::new("key\n".to_string(), TEST_SECRET_KEY.to_string());
    let rest = RestClientBuilder::new(RestClientConfig::new(
        common::api_url(&server),
        "ftx".to_string(),
    ))
    .with_signer(Arc::new(signer))
    .build()
    .unwrap();

    let err = FtxConnector::new(rest)
        .get_fills(&GetFillsParams::default())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ExchangeError::ConfigurationError(ref msg) if msg.contains("FTX-KEY")),
        "unexpected error: {err:?}"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_not_logged_in() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/fills"))
        .respond_with(ResponseTemplate::new(401).set_body_json(failure("Not logged in")))
        .mount(&server)
        .await;

    let err = authenticated_connector(&server, None)
        .get_fills(&GetFillsParams::default())
        .await
        .unwrap_err();

    match err {
        ExchangeError::ApiError {
            endpoint,
            status,
            message,
        } => {
            assert_eq!(endpoint, "/fills");
            assert_eq!(status, 401);
            assert_eq!(message, "Not logged in");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
