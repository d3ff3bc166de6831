//! Free-text listing search with alias expansion and type-aware boosts.

use std::cmp::Ordering;

use super::classifier::ProductTypeClassifier;
use super::normalize::normalize;
use crate::config::MarketConfig;
use crate::models::{Listing, ListingType, SearchHit};
use crate::round2;

const DIRECT_HIT: f64 = 1.0;
const ALIAS_HIT: f64 = 0.8;
const TYPE_BOOST: f64 = 0.3;
const MERCH_PENALTY: f64 = 0.5;
const SUBTYPE_CONFLICT_PENALTY: f64 = 0.2;

/// Searches listings by free text, outside strict product matching.
pub struct ListingSearch<'a> {
    config: &'a MarketConfig,
}

struct Term {
    text: String,
    direct: bool,
}

impl<'a> ListingSearch<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Find listings whose name contains the query or any of its aliases.
    ///
    /// The query is expanded both as typed and with product-type keywords
    /// removed, so `nendoroid bocchi` still reaches `ぼっち・ざ・ろっく`.
    pub fn search(&self, query: &str, listings: &[Listing], limit: usize) -> Vec<SearchHit> {
        let terms = self.terms_for(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let classifier = ProductTypeClassifier::new(self.config);
        let wanted = classifier.detect_query_product_type(query);

        let mut hits: Vec<SearchHit> = listings
            .iter()
            .filter_map(|listing| {
                let name = normalize(&listing.name);
                let term = terms.iter().find(|t| name.contains(t.text.as_str()))?;
                let listing_type = classifier
                    .detect_type(&listing.classification_text())
                    .listing_type;

                let mut score = if term.direct { DIRECT_HIT } else { ALIAS_HIT };
                if let Some(wanted) = wanted {
                    if listing_type == wanted {
                        score += TYPE_BOOST;
                    } else if listing_type == ListingType::Merch && wanted.is_figure_subtype() {
                        score -= MERCH_PENALTY;
                    } else if listing_type.is_figure_subtype() && wanted.is_figure_subtype() {
                        score -= SUBTYPE_CONFLICT_PENALTY;
                    }
                }

                Some(SearchHit {
                    listing_id: listing.id.clone(),
                    listing_name: listing.name.clone(),
                    price: listing.price,
                    score: round2(score),
                    matched_term: term.text.clone(),
                    listing_type,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.price.cmp(&b.price))
        });
        hits.truncate(limit);
        hits
    }

    /// Normalized search terms, direct ones first.
    fn terms_for(&self, query: &str) -> Vec<Term> {
        let mut terms: Vec<Term> = Vec::new();
        let mut push = |text: String, direct: bool| {
            let usable = if text.is_ascii() {
                text.len() >= 2
            } else {
                !text.is_empty()
            };
            if usable && !terms.iter().any(|t| t.text == text) {
                terms.push(Term { text, direct });
            }
        };

        let stripped = self.strip_type_keywords(query);
        for q in [query.trim(), stripped.as_str()] {
            if q.is_empty() {
                continue;
            }
            push(normalize(q), true);
            for alias in self.config.aliases.expand(q).into_iter().skip(1) {
                push(normalize(&alias), false);
            }
        }
        terms
    }

    fn strip_type_keywords(&self, query: &str) -> String {
        let mut lower = query.to_lowercase();
        for entry in &self.config.keywords.subtypes {
            for keyword in &entry.keywords {
                lower = lower.replace(&keyword.to_lowercase(), " ");
            }
        }
        lower.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
