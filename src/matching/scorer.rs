//! Product ↔ listing match scoring.
//!
//! A pair passes through ordered gates; failing any gate short-circuits to a
//! zero score:
//! 1. category compatibility (merch and cross-subtype listings rejected)
//! 2. specificity (nendoroid/figma/POP UP PARADE products need their keyword)
//! 3. identity (bare character/product name present in the listing)
//! 4. version awareness (bonus/penalty, may sink the pair below threshold)
//!
//! Scores accumulate weights from [`MatchConfig`]; acceptance compares the
//! two-decimal score against the active [`ScoringProfile`] threshold.

use log::debug;
use serde::{Deserialize, Serialize};

use super::classifier::ProductTypeClassifier;
use super::identity::{bare_name, identity_words};
use super::normalize::normalize;
use super::versions::VersionRequirement;
use crate::config::MarketConfig;
use crate::models::{Listing, ListingType, MatchScore, Product, ProductCategory};
use crate::round2;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which call site is scoring: interactive lookup or bulk precomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Interactive,
    Bulk,
}

/// Strictness knobs that differ between the two call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    /// Minimum rounded score to accept a pair.
    pub threshold: f64,
    /// Let word-level name hits satisfy the identity gate when no full name matched.
    pub allow_word_identity: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    pub interactive: ScoringProfile,
    pub bulk: ScoringProfile,
    /// Cap on results returned per product.
    pub max_results: usize,
    /// Exact nendoroid/figma/POP UP PARADE pairing.
    pub subtype_bonus: f64,
    /// Exact scale/prize/action-figure pairing.
    pub generic_subtype_bonus: f64,
    pub ja_name_weight: f64,
    pub en_name_weight: f64,
    /// Shorter English bare names are too ambiguous for a full-name hit.
    pub min_en_name_len: usize,
    pub ja_word_weight: f64,
    pub en_word_weight: f64,
    pub word_bonus_cap: f64,
    pub series_bonus: f64,
    pub version_bonus: f64,
    pub version_penalty: f64,
    pub conflicting_version_penalty: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            interactive: ScoringProfile {
                threshold: 0.5,
                allow_word_identity: false,
            },
            bulk: ScoringProfile {
                threshold: 0.35,
                allow_word_identity: true,
            },
            max_results: 10,
            subtype_bonus: 0.5,
            generic_subtype_bonus: 0.3,
            ja_name_weight: 0.4,
            en_name_weight: 0.35,
            min_en_name_len: 4,
            ja_word_weight: 0.25,
            en_word_weight: 0.15,
            word_bonus_cap: 0.3,
            series_bonus: 0.1,
            version_bonus: 0.2,
            version_penalty: 0.3,
            conflicting_version_penalty: 0.3,
        }
    }
}

impl MatchConfig {
    pub fn profile(&self, mode: MatchMode) -> &ScoringProfile {
        match mode {
            MatchMode::Interactive => &self.interactive,
            MatchMode::Bulk => &self.bulk,
        }
    }
}

// ---------------------------------------------------------------------------
// PreparedProduct — per-product work done once, reused for every listing
// ---------------------------------------------------------------------------

/// Normalized identity data derived from a [`Product`].
#[derive(Debug, Clone)]
pub struct PreparedProduct<'p> {
    pub product: &'p Product,
    pub ja_bare: String,
    pub en_bare: String,
    pub ja_words: Vec<String>,
    pub en_words: Vec<String>,
    pub version: Option<VersionRequirement>,
    pub series_terms: Vec<String>,
}

impl<'p> PreparedProduct<'p> {
    pub fn new(product: &'p Product, config: &MarketConfig) -> Self {
        let prefixes = &config.keywords.name_prefixes;
        let ja_raw = product
            .name_ja
            .as_deref()
            .map(|n| bare_name(n, prefixes))
            .unwrap_or_default();
        let en_raw = bare_name(&product.name, prefixes);

        let mut series_terms: Vec<String> = Vec::new();
        for series in [product.series.as_deref(), product.series_ja.as_deref()]
            .into_iter()
            .flatten()
        {
            for term in config.aliases.expand(series) {
                let term = normalize(&term);
                let usable = if term.is_ascii() {
                    term.len() >= 4
                } else {
                    term.chars().count() >= 2
                };
                if usable && !series_terms.contains(&term) {
                    series_terms.push(term);
                }
            }
        }

        Self {
            product,
            ja_bare: normalize(&ja_raw),
            en_bare: normalize(&en_raw),
            ja_words: identity_words(&ja_raw),
            en_words: identity_words(&en_raw),
            version: config.versions.requirement_for(product),
            series_terms,
        }
    }

    /// False when neither language leaves any identity text to search for.
    pub fn has_identity(&self) -> bool {
        !self.ja_bare.is_empty() || !self.en_bare.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MatchScorer
// ---------------------------------------------------------------------------

struct Tally {
    score: f64,
    reasons: Vec<String>,
    listing_type: ListingType,
}

impl Tally {
    fn add(&mut self, delta: f64, reason: String) {
        self.score += delta;
        self.reasons.push(format!("{reason} ({delta:+.2})"));
    }

    fn reject(self, reason: String) -> MatchScore {
        MatchScore {
            score: 0.0,
            reasons: vec![reason],
            listing_type: self.listing_type,
            matched: false,
        }
    }
}

/// Scores (product, listing) pairs under one [`MatchMode`].
pub struct MatchScorer<'a> {
    config: &'a MarketConfig,
    mode: MatchMode,
}

impl<'a> MatchScorer<'a> {
    pub fn new(config: &'a MarketConfig, mode: MatchMode) -> Self {
        Self { config, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn profile(&self) -> &ScoringProfile {
        self.config.matching.profile(self.mode)
    }

    /// Score a single pair.
    pub fn score(&self, product: &Product, listing: &Listing) -> MatchScore {
        let prepared = PreparedProduct::new(product, self.config);
        self.score_prepared(&prepared, listing)
    }

    /// Score a pair against an already-prepared product.
    pub fn score_prepared(&self, prepared: &PreparedProduct<'_>, listing: &Listing) -> MatchScore {
        let weights = &self.config.matching;
        let classifier = ProductTypeClassifier::new(self.config);
        let product = prepared.product;
        let type_text = listing.classification_text();
        let detection = classifier.detect_type(&type_text);

        let mut tally = Tally {
            score: 0.0,
            reasons: Vec::new(),
            listing_type: detection.listing_type,
        };

        // Gate 1: category compatibility
        let compat = classifier.category_compatible(product.category, detection.listing_type);
        if !compat.ok {
            debug!(
                "{} x {}: category gate rejected {} listing",
                product.id, listing.id, detection.listing_type
            );
            return tally.reject(format!(
                "category mismatch: {} product vs {} listing [{}]",
                product.category.map_or("untyped", ProductCategory::as_str),
                detection.listing_type,
                detection.keywords.join(", ")
            ));
        }
        if compat.bonus > 0.0 {
            tally.add(
                compat.bonus,
                format!("subtype match: {}", detection.listing_type),
            );
        }

        // Gate 2: specificity
        if let Some(required) = product.category.and_then(ProductCategory::required_subtype) {
            if !classifier.has_subtype_keyword(&type_text, required) {
                debug!(
                    "{} x {}: listing lacks {} keyword",
                    product.id, listing.id, required
                );
                return tally.reject(format!("missing {required} keyword"));
            }
        }

        // Gate 3: identity
        let listing_norm = normalize(&listing.name);
        let mut ja_full = false;
        let mut en_full = false;
        if !prepared.ja_bare.is_empty() && listing_norm.contains(&prepared.ja_bare) {
            ja_full = true;
            tally.add(
                weights.ja_name_weight,
                format!("japanese name match: {}", prepared.ja_bare),
            );
        } else if prepared.en_bare.chars().count() >= weights.min_en_name_len
            && listing_norm.contains(&prepared.en_bare)
        {
            en_full = true;
            tally.add(
                weights.en_name_weight,
                format!("english name match: {}", prepared.en_bare),
            );
        }

        let mut word_hits: Vec<&str> = Vec::new();
        let mut word_bonus = 0.0;
        if !ja_full {
            for word in &prepared.ja_words {
                if listing_norm.contains(word.as_str()) {
                    word_hits.push(word);
                    word_bonus += weights.ja_word_weight;
                }
            }
        }
        if !en_full {
            for word in &prepared.en_words {
                if listing_norm.contains(word.as_str()) {
                    word_hits.push(word);
                    word_bonus += weights.en_word_weight;
                }
            }
        }

        let full_hit = ja_full || en_full;
        if !full_hit && !(self.profile().allow_word_identity && !word_hits.is_empty()) {
            debug!("{} x {}: no identity match", product.id, listing.id);
            return tally.reject("no name match".to_string());
        }
        if !word_hits.is_empty() {
            tally.add(
                word_bonus.min(weights.word_bonus_cap),
                format!("name words: {}", word_hits.join(", ")),
            );
        }

        // Gate 4: version awareness
        let listing_lower = listing.name.to_lowercase();
        let own_pattern = prepared.version.as_ref().and_then(|v| v.pattern);
        if let Some(version) = &prepared.version {
            if version
                .terms
                .iter()
                .any(|t| listing_lower.contains(t.as_str()))
            {
                tally.add(
                    weights.version_bonus,
                    format!("version match: {}", version.label),
                );
            } else {
                tally.add(
                    -weights.version_penalty,
                    format!("version missing: {}", version.label),
                );
            }
        }
        let conflicts = self.config.versions.conflicts_in(&listing_lower, own_pattern);
        if !conflicts.is_empty() {
            tally.add(
                -weights.conflicting_version_penalty,
                format!("conflicting version: {}", conflicts.join(", ")),
            );
        }

        // Supporting series evidence
        if let Some(term) = prepared
            .series_terms
            .iter()
            .find(|t| listing_norm.contains(t.as_str()))
        {
            tally.add(weights.series_bonus, format!("series match: {term}"));
        }

        let score = round2(tally.score);
        let threshold = self.profile().threshold;
        let matched = score >= threshold - f64::EPSILON;
        if !matched {
            debug!(
                "{} x {}: score {score:.2} below threshold {threshold:.2}",
                product.id, listing.id
            );
        }

        MatchScore {
            score,
            reasons: tally.reasons,
            listing_type: tally.listing_type,
            matched,
        }
    }
}
