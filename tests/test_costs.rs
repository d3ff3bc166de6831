//! Landed-cost calculator tests.

mod common;

use figure_market::costs::{CostConfig, ServiceFees};
use figure_market::{FigureMarket, MarketConfig, MarketError};

// ---------------------------------------------------------------------------
// Per-service arithmetic
// ---------------------------------------------------------------------------

#[test]
fn neokyo_breakdown_below_duty_threshold() {
    let market = common::market();
    let b = market.costs().breakdown_for("Neokyo", 3500, 0.8).unwrap();

    assert_eq!(b.service, "Neokyo");
    assert_eq!(b.item_price, 3500);
    assert_eq!(b.fees, 472);
    assert_eq!(b.domestic_shipping, 700);
    assert_eq!(b.international_shipping, 2000);
    assert_eq!(b.shipping, 2700);
    assert_eq!(b.duty, 0);
    assert_eq!(b.total, 6672);
    assert_eq!(b.total_usd, 43.05);
}

#[test]
fn total_is_sum_of_parts() {
    let market = common::market();
    let estimate = market.calculate(12_345, 1.7).unwrap();
    for b in &estimate.breakdowns {
        assert_eq!(b.total, b.item_price + b.shipping + b.fees + b.duty, "{}", b.service);
    }
}

#[test]
fn duty_applies_above_threshold() {
    let market = common::market();
    let b = market.costs().breakdown_for("neokyo", 150_000, 1.0).unwrap();

    assert_eq!(b.fees, 4720);
    // 215.61 USD over the threshold at 4.5 %, rounded once in yen
    assert_eq!(b.duty, 1504);
    assert_eq!(b.total, 158_924);
    assert_eq!(b.total_usd, 1025.32);
}

#[test]
fn unknown_service_is_not_found() {
    let market = common::market();
    let err = market.costs().breakdown_for("Nope", 3500, 0.8).unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// Comparison across services
// ---------------------------------------------------------------------------

#[test]
fn estimate_compares_all_default_services() {
    let market = common::market();
    let estimate = market.calculate(3500, 0.8).unwrap();

    let totals: Vec<(&str, i64)> = estimate
        .breakdowns
        .iter()
        .map(|b| (b.service.as_str(), b.total))
        .collect();
    assert_eq!(
        totals,
        vec![
            ("Buyee", 6647),
            ("ZenMarket", 6889),
            ("FromJapan", 6484),
            ("Neokyo", 6672),
        ]
    );
    assert_eq!(estimate.cheapest, "FromJapan");
    assert_eq!(estimate.most_expensive, "ZenMarket");
    assert_eq!(estimate.savings_jpy, 405);
    assert_eq!(estimate.savings_usd, 2.62);
    assert_eq!(estimate.cheapest_breakdown().unwrap().total, 6484);
    assert_eq!(estimate.breakdown("zenmarket").unwrap().total, 6889);
}

#[test]
fn ties_keep_first_service() {
    let config = MarketConfig {
        costs: CostConfig {
            services: vec![
                ServiceFees::new("Alpha", 300, 0.0, 0.0),
                ServiceFees::new("Beta", 300, 0.0, 0.0),
            ],
            ..CostConfig::default()
        },
        ..MarketConfig::default()
    };
    let market = FigureMarket::builder().config(config).build().unwrap();
    let estimate = market.calculate(3500, 0.8).unwrap();

    assert_eq!(estimate.cheapest, "Alpha");
    assert_eq!(estimate.most_expensive, "Alpha");
    assert_eq!(estimate.savings_jpy, 0);
}

#[test]
fn default_weight_is_half_a_kilo() {
    let market = common::market();
    let estimate = market.calculate_default(3500).unwrap();
    assert_eq!(estimate.weight_kg, 0.5);
    assert!(estimate
        .breakdowns
        .iter()
        .all(|b| b.international_shipping == 1500));
}

// ---------------------------------------------------------------------------
// Shipping tiers
// ---------------------------------------------------------------------------

#[test]
fn shipping_tiers_include_their_breakpoint() {
    let costs = common::market();
    let calc = costs.costs();
    assert_eq!(calc.shipping_for(0.0), 1500);
    assert_eq!(calc.shipping_for(0.5), 1500);
    assert_eq!(calc.shipping_for(0.51), 2000);
    assert_eq!(calc.shipping_for(1.0), 2000);
    assert_eq!(calc.shipping_for(2.0), 3000);
    assert_eq!(calc.shipping_for(5.0), 5500);
    assert_eq!(calc.shipping_for(7.5), 8000);
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

#[test]
fn non_positive_price_is_rejected() {
    let market = common::market();
    for price in [0, -100] {
        let err = market.calculate(price, 0.5).unwrap_err();
        assert!(matches!(err, MarketError::InvalidArgument(_)));
    }
}

#[test]
fn absurd_price_is_rejected() {
    let market = common::market();
    for price in [100_000_001, i64::MAX - 100] {
        let err = market.calculate(price, 0.5).unwrap_err();
        assert!(matches!(err, MarketError::InvalidArgument(_)), "{price}");
    }
    assert!(market.calculate(100_000_000, 0.5).is_ok());
}

#[test]
fn overflowing_total_is_an_error_not_a_panic() {
    let config = MarketConfig {
        costs: CostConfig {
            max_item_price: i64::MAX,
            ..CostConfig::default()
        },
        ..MarketConfig::default()
    };
    let market = FigureMarket::builder().config(config).build().unwrap();

    let err = market.calculate(i64::MAX - 100, 0.5).unwrap_err();
    assert!(matches!(err, MarketError::InvalidArgument(_)));
    let err = market
        .costs()
        .breakdown_for("Buyee", i64::MAX - 100, 0.5)
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidArgument(_)));
}

#[test]
fn bad_weight_is_rejected() {
    let market = common::market();
    for weight in [-0.1, f64::NAN, f64::INFINITY] {
        let err = market.calculate(3500, weight).unwrap_err();
        assert!(matches!(err, MarketError::InvalidArgument(_)), "{weight}");
    }
}
