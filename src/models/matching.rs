use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ListingType — Classifier verdict for free text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    /// Non-figure goods (keychains, acrylic stands, apparel, ...).
    Merch,
    Nendoroid,
    Figma,
    PopUpParade,
    Scale,
    Prize,
    Unknown,
}

impl ListingType {
    /// True for every named figure subtype (not merch, not unknown).
    pub fn is_figure_subtype(self) -> bool {
        !matches!(self, ListingType::Merch | ListingType::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::Merch => "merch",
            ListingType::Nendoroid => "nendoroid",
            ListingType::Figma => "figma",
            ListingType::PopUpParade => "pop_up_parade",
            ListingType::Scale => "scale",
            ListingType::Prize => "prize",
            ListingType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel / RiskAssessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub flags: Vec<String>,
}

// ---------------------------------------------------------------------------
// MatchScore — Scorer output for one (product, listing) pair
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    /// Accumulated score rounded to two decimals; 0 when a gate rejected the pair.
    pub score: f64,
    pub reasons: Vec<String>,
    pub listing_type: ListingType,
    pub matched: bool,
}

// ---------------------------------------------------------------------------
// MatchResult — A listing accepted for a product, with risk annotations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub listing_id: String,
    pub listing_name: String,
    pub price: i64,
    pub score: f64,
    pub reasons: Vec<String>,
    pub listing_type: ListingType,
    pub risk: RiskLevel,
    pub risk_flags: Vec<String>,
}

// ---------------------------------------------------------------------------
// SearchHit — Free-text search result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub listing_id: String,
    pub listing_name: String,
    pub price: i64,
    pub score: f64,
    pub matched_term: String,
    pub listing_type: ListingType,
}
