//! Async wrapper tests (requires the `async` feature).

#![cfg(feature = "async")]

mod common;

use std::sync::Arc;

use figure_market::AsyncFigureMarket;

#[tokio::test]
async fn async_build_and_calculate() {
    common::init_logging();
    let market = AsyncFigureMarket::builder().build().await.unwrap();
    let estimate = market.calculate(3500, 0.8).await.unwrap();
    assert_eq!(estimate.cheapest, "FromJapan");
}

#[tokio::test]
async fn async_resolve_matches_sync() {
    let sync = common::market();
    let market = AsyncFigureMarket::from_market(sync.clone());
    let listings = Arc::new(common::sample_listings());

    let got = market
        .resolve(common::hitori_nendoroid(), listings.clone())
        .await
        .unwrap();
    let expected = sync.resolve(&common::hitori_nendoroid(), &listings);
    assert_eq!(got, expected);
}

#[tokio::test]
async fn async_precompute_matches_sync() {
    let sync = common::market();
    let market = AsyncFigureMarket::from_market(sync.clone());
    let listings = Arc::new(common::sample_listings());

    let got = market
        .precompute(common::catalog(), listings.clone())
        .await
        .unwrap();
    let expected = sync.resolver().precompute(&common::catalog(), &listings);
    assert_eq!(got, expected);
}

#[tokio::test]
async fn async_run_propagates_errors() {
    let market = AsyncFigureMarket::from_market(common::market());
    assert!(market.run(|m| m.calculate(0, 0.5)).await.is_err());
    assert_eq!(market.market().config().matching.max_results, 10);
}
