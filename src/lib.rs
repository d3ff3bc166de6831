//! Figure marketplace core.
//!
//! Matches canonical collectible-figure catalog entries to Japanese
//! marketplace listings and estimates the landed cost of a listing through
//! several proxy services. The core is pure: products and listings are
//! supplied in memory, all tables come from an immutable [`MarketConfig`].
//!
//! # Quick start
//!
//! ```no_run
//! use figure_market::FigureMarket;
//! use figure_market::models::{Listing, Product, ProductCategory};
//!
//! let market = FigureMarket::builder().build().unwrap();
//!
//! let product = Product::new("bocchi-nendo", "Nendoroid Hitori Gotoh")
//!     .with_name_ja("後藤ひとり")
//!     .with_category(ProductCategory::Nendoroid);
//! let listings = vec![Listing::new("m1", "ねんどろいど 後藤ひとり", 4200)];
//!
//! let matches = market.resolve(&product, &listings);
//! let estimate = market.calculate(matches[0].price, 0.8).unwrap();
//! println!("cheapest via {}", estimate.cheapest);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod costs;
pub mod error;
pub mod matching;
pub mod models;

#[cfg(feature = "async")]
pub use async_client::AsyncFigureMarket;
pub use config::MarketConfig;
pub use error::{MarketError, Result};
pub use matching::MatchMode;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use costs::CostCalculator;
use matching::{
    AliasTable, ListingResolver, ListingSearch, MatchScorer, ProductTypeClassifier, RiskAssessor,
};
use models::{CostEstimate, Listing, ListingType, MatchResult, Product};

// ---------------------------------------------------------------------------
// FigureMarketBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FigureMarket`].
///
/// Use [`FigureMarket::builder()`] to obtain a builder, choose where the
/// configuration comes from, and call [`build()`](FigureMarketBuilder::build).
#[derive(Default)]
pub struct FigureMarketBuilder {
    config: Option<MarketConfig>,
    config_path: Option<PathBuf>,
    use_default_path: bool,
}

impl FigureMarketBuilder {
    /// Use an already-constructed configuration.
    pub fn config(mut self, config: MarketConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a JSON file.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Fall back to [`config::default_config_path`] when no config or file
    /// was given. Defaults to `false`, meaning built-in tables are used.
    pub fn use_default_path(mut self, enabled: bool) -> Self {
        self.use_default_path = enabled;
        self
    }

    /// Resolve and validate the configuration.
    ///
    /// Precedence: explicit config, then explicit file, then the platform
    /// default file (if enabled and present), then built-in defaults.
    pub fn build(self) -> Result<FigureMarket> {
        let config = if let Some(config) = self.config {
            config.validate()?;
            config
        } else if let Some(path) = self.config_path {
            MarketConfig::from_json_file(path)?
        } else if self.use_default_path && config::default_config_path().exists() {
            MarketConfig::from_json_file(config::default_config_path())?
        } else {
            info!("using built-in market configuration");
            MarketConfig::default()
        };
        Ok(FigureMarket {
            config: Arc::new(config),
        })
    }
}

// ---------------------------------------------------------------------------
// FigureMarket
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Holds the shared, read-only [`MarketConfig`] and hands out lightweight
/// borrowing wrappers for each operation family. Cloning is cheap and clones
/// share the same tables, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct FigureMarket {
    config: Arc<MarketConfig>,
}

impl FigureMarket {
    /// Create a new builder for configuring the market core.
    pub fn builder() -> FigureMarketBuilder {
        FigureMarketBuilder::default()
    }

    /// The configuration every component reads.
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    // -- Component accessors -----------------------------------------------

    /// Access the product-type classifier.
    pub fn classifier(&self) -> ProductTypeClassifier<'_> {
        ProductTypeClassifier::new(&self.config)
    }

    /// Access the alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.config.aliases
    }

    /// Access a pair scorer for the given strictness.
    pub fn scorer(&self, mode: MatchMode) -> MatchScorer<'_> {
        MatchScorer::new(&self.config, mode)
    }

    /// Access the listing resolver.
    pub fn resolver(&self) -> ListingResolver<'_> {
        ListingResolver::new(&self.config)
    }

    /// Access the risk assessor.
    pub fn risk(&self) -> RiskAssessor<'_> {
        RiskAssessor::new(&self.config)
    }

    /// Access free-text listing search.
    pub fn search(&self) -> ListingSearch<'_> {
        ListingSearch::new(&self.config)
    }

    /// Access the landed-cost calculator.
    pub fn costs(&self) -> CostCalculator<'_> {
        CostCalculator::new(&self.config)
    }

    // -- Presentation-layer interface --------------------------------------

    /// Ranked interactive matches for a product, capped at `max_results`.
    pub fn resolve(&self, product: &Product, listings: &[Listing]) -> Vec<MatchResult> {
        self.resolver().resolve(product, listings)
    }

    /// The product type a free-text query asks for, if any.
    pub fn detect_query_product_type(&self, query: &str) -> Option<ListingType> {
        self.classifier().detect_query_product_type(query)
    }

    /// Every known name variant for a query, the trimmed query first.
    pub fn expand_aliases(&self, query: &str) -> Vec<String> {
        self.config.aliases.expand(query)
    }

    /// Landed cost of an item through every configured service.
    pub fn calculate(&self, item_price: i64, weight_kg: f64) -> Result<CostEstimate> {
        self.costs().calculate(item_price, weight_kg)
    }

    /// Landed cost at the configured default parcel weight.
    pub fn calculate_default(&self, item_price: i64) -> Result<CostEstimate> {
        self.costs().calculate_default(item_price)
    }

    /// Find a product by id in a caller-supplied catalog.
    pub fn find_product<'p>(&self, products: &'p [Product], id: &str) -> Result<&'p Product> {
        products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MarketError::NotFound(format!("product '{id}'")))
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FigureMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        write!(
            f,
            "FigureMarket(services={}, aliases={}, thresholds=[interactive={:.2}, bulk={:.2}])",
            c.costs.services.len(),
            c.aliases.len(),
            c.matching.interactive.threshold,
            c.matching.bulk.threshold
        )
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Round to two decimal places (cents, or score hundredths).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
