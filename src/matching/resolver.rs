//! Listing resolution: score every candidate for a product, keep matches,
//! rank them and cap the list.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;

use super::risk::RiskAssessor;
use super::scorer::{MatchMode, MatchScorer, PreparedProduct};
use crate::config::MarketConfig;
use crate::models::{Listing, MatchResult, Product};

/// Resolves catalog products to marketplace listings.
pub struct ListingResolver<'a> {
    config: &'a MarketConfig,
}

impl<'a> ListingResolver<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Interactive (strict) resolution for one product.
    pub fn resolve(&self, product: &Product, listings: &[Listing]) -> Vec<MatchResult> {
        self.resolve_with(product, listings, MatchMode::Interactive)
    }

    /// Resolve one product under the given mode.
    ///
    /// Results are sorted by score descending, then price ascending, then
    /// input order, and truncated to `max_results`. A product with no usable
    /// name yields an empty list.
    pub fn resolve_with(
        &self,
        product: &Product,
        listings: &[Listing],
        mode: MatchMode,
    ) -> Vec<MatchResult> {
        let prepared = PreparedProduct::new(product, self.config);
        if !prepared.has_identity() {
            debug!("product {} has no identity text; skipping", product.id);
            return Vec::new();
        }
        if listings.is_empty() {
            return Vec::new();
        }

        let scorer = MatchScorer::new(self.config, mode);
        let risk = RiskAssessor::new(self.config);

        let mut results: Vec<MatchResult> = listings
            .iter()
            .filter_map(|listing| {
                let scored = scorer.score_prepared(&prepared, listing);
                if !scored.matched {
                    return None;
                }
                let assessment = risk.assess(listing);
                Some(MatchResult {
                    listing_id: listing.id.clone(),
                    listing_name: listing.name.clone(),
                    price: listing.price,
                    score: scored.score,
                    reasons: scored.reasons,
                    listing_type: scored.listing_type,
                    risk: assessment.level,
                    risk_flags: assessment.flags,
                })
            })
            .collect();

        // Stable sort keeps input order for full ties.
        results.sort_by(rank_order);
        results.truncate(self.config.matching.max_results);

        debug!(
            "product {}: {} of {} listings matched ({:?})",
            product.id,
            results.len(),
            listings.len(),
            mode
        );
        results
    }

    /// Bulk-mode resolution for a whole catalog, keyed by product id.
    ///
    /// Every product appears in the output, with an empty list when nothing
    /// matched.
    pub fn precompute(
        &self,
        products: &[Product],
        listings: &[Listing],
    ) -> BTreeMap<String, Vec<MatchResult>> {
        products
            .iter()
            .map(|p| (p.id.clone(), self.resolve_with(p, listings, MatchMode::Bulk)))
            .collect()
    }

    /// Number of bulk-mode matches per product id.
    pub fn availability(
        &self,
        products: &[Product],
        listings: &[Listing],
    ) -> BTreeMap<String, usize> {
        self.precompute(products, listings)
            .into_iter()
            .map(|(id, matches)| (id, matches.len()))
            .collect()
    }
}

/// Score descending, then price ascending.
fn rank_order(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.price.cmp(&b.price))
}
