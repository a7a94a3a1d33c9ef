//! Regression checks against the public Reflector "External CEX & DEX" oracle.
//!
//! These hit the network, run them with `cargo test -- --ignored`.

use sep40_oracle::{Asset, Error, Oracle, OracleConfig, Sep40};

const REFLECTOR_CEX_DEX: &str = "CAFJZQWSED6YAWZU3GWRTOCNPPCGBN32L7QV43XX5LZLFTK6JLN34DLN";

fn create_oracle() -> Oracle {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Oracle::new(&OracleConfig::new(REFLECTOR_CEX_DEX).with_timeout_ms(30_000)).unwrap()
}

fn btc() -> Asset {
    Asset::Other("BTC".to_string())
}

#[tokio::test]
#[ignore]
async fn test_base() {
    let oracle = create_oracle();
    assert_eq!(oracle.base().await.unwrap(), Asset::Other("USD".to_string()));
}

#[tokio::test]
#[ignore]
async fn test_assets() {
    let oracle = create_oracle();
    let assets = oracle.assets().await.unwrap();
    assert!(assets.len() > 1);
    for asset in assets {
        assert!(matches!(asset, Asset::Other(_)));
    }
}

#[tokio::test]
#[ignore]
async fn test_decimals_and_resolution() {
    let oracle = create_oracle();
    assert_eq!(oracle.decimals().await.unwrap(), 14);
    assert_eq!(oracle.resolution().await.unwrap(), 300);
}

#[tokio::test]
#[ignore]
async fn test_prices() {
    let oracle = create_oracle();
    let prices = oracle.prices(&btc(), 5).await.unwrap();
    assert_eq!(prices.len(), 5);
    assert!(prices.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[tokio::test]
#[ignore]
async fn test_last_price() {
    let oracle = create_oracle();
    let last = oracle.last_price(&btc()).await.unwrap();
    assert!(last.price > 0);
    assert!(last.timestamp > 0);
}

#[tokio::test]
#[ignore]
async fn test_price_matches_history() {
    let oracle = create_oracle();
    let prices = oracle.prices(&btc(), 5).await.unwrap();

    let point = oracle.price(&btc(), prices[4].timestamp).await.unwrap();
    assert_eq!(point.price, prices[4].price);
    assert_eq!(point.timestamp, prices[4].timestamp);
}

#[tokio::test]
#[ignore]
async fn test_unknown_asset() {
    let oracle = create_oracle();
    let err = oracle
        .last_price(&Asset::Other("NOTACOIN".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoDataAvailable { .. }), "{err}");
}
