//! Async wrapper around [`FigureMarket`] for use in async runtimes (Tokio, etc.).
//!
//! Matching and cost calculation are CPU-bound, so every operation runs on
//! the blocking thread pool via [`tokio::task::spawn_blocking`], keeping the
//! async event loop free. The market holds no mutable state, so workers share
//! it through an [`Arc`] without locking.
//!
//! # Example
//!
//! ```no_run
//! use figure_market::AsyncFigureMarket;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let market = AsyncFigureMarket::builder().build().await.unwrap();
//!     let estimate = market.run(|m| m.calculate(3500, 0.8)).await.unwrap();
//!     println!("{}", estimate.cheapest);
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::error::{MarketError, Result};
use crate::models::{CostEstimate, Listing, MatchResult, Product};
use crate::{FigureMarket, MarketConfig, MatchMode};

// ---------------------------------------------------------------------------
// AsyncFigureMarketBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFigureMarket`].
#[derive(Default)]
pub struct AsyncFigureMarketBuilder {
    config: Option<MarketConfig>,
    config_path: Option<PathBuf>,
    use_default_path: bool,
}

impl AsyncFigureMarketBuilder {
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

    /// Fall back to the platform default config file when present.
    pub fn use_default_path(mut self, enabled: bool) -> Self {
        self.use_default_path = enabled;
        self
    }

    /// Build the async market; config file reading happens on the blocking pool.
    pub async fn build(self) -> Result<AsyncFigureMarket> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FigureMarket::builder().use_default_path(self.use_default_path);
            if let Some(config) = self.config {
                builder = builder.config(config);
            }
            if let Some(path) = self.config_path {
                builder = builder.config_file(path);
            }
            let market = builder.build()?;
            Ok(AsyncFigureMarket {
                inner: Arc::new(market),
            })
        })
        .await
        .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFigureMarket
// ---------------------------------------------------------------------------

/// Async wrapper around [`FigureMarket`].
#[derive(Clone)]
pub struct AsyncFigureMarket {
    inner: Arc<FigureMarket>,
}

impl AsyncFigureMarket {
    /// Create a new builder for configuring the async market.
    pub fn builder() -> AsyncFigureMarketBuilder {
        AsyncFigureMarketBuilder::default()
    }

    /// Wrap an existing market.
    pub fn from_market(market: FigureMarket) -> Self {
        Self {
            inner: Arc::new(market),
        }
    }

    /// Run a sync market operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&FigureMarket) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let market = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&market))
            .await
            .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Interactive resolution for one product.
    pub async fn resolve(
        &self,
        product: Product,
        listings: Arc<Vec<Listing>>,
    ) -> Result<Vec<MatchResult>> {
        self.run(move |m| Ok(m.resolve(&product, &listings))).await
    }

    /// Bulk-mode resolution of a whole catalog.
    ///
    /// Each product is resolved by its own blocking task and writes only its
    /// own key in the result map.
    pub async fn precompute(
        &self,
        products: Vec<Product>,
        listings: Arc<Vec<Listing>>,
    ) -> Result<BTreeMap<String, Vec<MatchResult>>> {
        let mut tasks = JoinSet::new();
        for product in products {
            let market = self.inner.clone();
            let listings = listings.clone();
            tasks.spawn_blocking(move || {
                let matches = market
                    .resolver()
                    .resolve_with(&product, &listings, MatchMode::Bulk);
                (product.id, matches)
            });
        }

        let mut out = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            let (id, matches) =
                joined.map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?;
            out.insert(id, matches);
        }
        Ok(out)
    }

    /// Landed cost through every configured service.
    pub async fn calculate(&self, item_price: i64, weight_kg: f64) -> Result<CostEstimate> {
        self.run(move |m| m.calculate(item_price, weight_kg)).await
    }

    /// The wrapped synchronous market.
    pub fn market(&self) -> &FigureMarket {
        &self.inner
    }
}
