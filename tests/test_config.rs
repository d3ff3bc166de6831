//! Configuration loading, validation and builder precedence.

mod common;

use figure_market::config::{default_config_path, CONFIG_FILE_NAME};
use figure_market::costs::CostConfig;
use figure_market::matching::MatchConfig;
use figure_market::{FigureMarket, MarketConfig, MarketError};

// ---------------------------------------------------------------------------
// Defaults and round-trip
// ---------------------------------------------------------------------------

#[test]
fn built_in_defaults_validate() {
    MarketConfig::default().validate().unwrap();
}

#[test]
fn pretty_json_reloads_to_identical_config() {
    let config = MarketConfig::default();
    let json = config.to_json_pretty().unwrap();
    assert!(json.contains("\"maxResults\": 10"));
    assert_eq!(MarketConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn partial_document_keeps_other_defaults() {
    let config = MarketConfig::from_json_str(
        r#"{ "matching": { "maxResults": 3 }, "costs": { "exchangeRate": 150.0 } }"#,
    )
    .unwrap();

    assert_eq!(config.matching.max_results, 3);
    assert_eq!(config.matching.interactive.threshold, 0.5);
    assert_eq!(config.costs.exchange_rate, 150.0);
    assert_eq!(config.costs.services.len(), 4);
    assert_eq!(config.aliases, MarketConfig::default().aliases);
}

#[test]
fn alias_keys_from_json_are_lowercased() {
    let config = MarketConfig::from_json_str(
        r#"{ "aliases": [ { "key": "Frieren", "variants": ["フリーレン"] } ] }"#,
    )
    .unwrap();
    assert_eq!(config.aliases.len(), 1);
    assert_eq!(config.aliases.entries()[0].key, "frieren");
}

#[test]
fn default_path_ends_with_config_file() {
    assert!(default_config_path().ends_with(CONFIG_FILE_NAME));
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

fn assert_config_error(config: MarketConfig) {
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MarketError::Config(_)), "got {err}");
}

#[test]
fn empty_service_list_is_rejected() {
    assert_config_error(MarketConfig {
        costs: CostConfig {
            services: Vec::new(),
            ..CostConfig::default()
        },
        ..MarketConfig::default()
    });
}

#[test]
fn duplicate_service_names_are_rejected() {
    let mut config = MarketConfig::default();
    config.costs.services[1].name = "buyee".into();
    assert_config_error(config);
}

#[test]
fn unordered_shipping_tiers_are_rejected() {
    let mut config = MarketConfig::default();
    config.costs.shipping_tiers.swap(0, 1);
    assert_config_error(config);
}

#[test]
fn non_positive_exchange_rate_is_rejected() {
    let mut config = MarketConfig::default();
    config.costs.exchange_rate = 0.0;
    assert_config_error(config);
}

#[test]
fn zero_max_results_is_rejected() {
    assert_config_error(MarketConfig {
        matching: MatchConfig {
            max_results: 0,
            ..MatchConfig::default()
        },
        ..MarketConfig::default()
    });
}

#[test]
fn inverted_risk_bounds_are_rejected() {
    let mut config = MarketConfig::default();
    config.risk.cheap_below = 60_000;
    assert_config_error(config);
}

#[test]
fn non_positive_price_cap_is_rejected() {
    let mut config = MarketConfig::default();
    config.costs.max_item_price = 0;
    assert_config_error(config);
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = MarketConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, MarketError::Json(_)));
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_loads_config_file() {
    common::init_logging();
    let file = common::write_config(r#"{ "matching": { "maxResults": 1 } }"#);
    let market = FigureMarket::builder()
        .config_file(file.path())
        .build()
        .unwrap();

    assert_eq!(market.config().matching.max_results, 1);
    let results = market.resolve(&common::hitori_nendoroid(), &common::sample_listings());
    assert_eq!(results.len(), 1);
}

#[test]
fn explicit_config_wins_over_file() {
    common::init_logging();
    let file = common::write_config(r#"{ "matching": { "maxResults": 1 } }"#);
    let market = FigureMarket::builder()
        .config_file(file.path())
        .config(MarketConfig::default())
        .build()
        .unwrap();
    assert_eq!(market.config().matching.max_results, 10);
}

#[test]
fn builder_validates_explicit_config() {
    let mut config = MarketConfig::default();
    config.costs.services.clear();
    assert!(FigureMarket::builder().config(config).build().is_err());
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FigureMarket::builder()
        .config_file(dir.path().join("absent.json"))
        .build()
        .unwrap_err();
    assert!(matches!(err, MarketError::Io(_)));
}

#[test]
fn invalid_config_file_fails_build() {
    let file = common::write_config(r#"{ "costs": { "exchangeRate": -1.0 } }"#);
    let err = FigureMarket::builder()
        .config_file(file.path())
        .build()
        .unwrap_err();
    assert!(matches!(err, MarketError::Config(_)));
}

#[test]
fn display_summarizes_tables() {
    let market = common::market();
    assert_eq!(
        market.to_string(),
        "FigureMarket(services=4, aliases=16, thresholds=[interactive=0.50, bulk=0.35])"
    );
}
