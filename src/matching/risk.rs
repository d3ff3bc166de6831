//! Purchase-risk heuristics for matched listings.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::MarketConfig;
use crate::models::{Listing, RiskAssessment, RiskLevel};

pub const FLAG_CHEAP: &str = "suspiciously cheap";
pub const FLAG_PREMIUM: &str = "verify premium price";
pub const FLAG_NO_CONDITION: &str = "condition not stated";
pub const FLAG_JUNK: &str = "junk or damaged";
pub const FLAG_BOOTLEG: &str = "possible bootleg";
pub const FLAG_BUNDLE: &str = "bundle or lot";
pub const FLAG_PARTS: &str = "parts only or no box";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskConfig {
    /// Prices strictly below this are flagged as suspiciously cheap.
    pub cheap_below: i64,
    /// Prices strictly above this are flagged for verification.
    pub premium_above: i64,
    pub junk_keywords: Vec<String>,
    pub bootleg_keywords: Vec<String>,
    pub bundle_keywords: Vec<String>,
    pub parts_keywords: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            cheap_below: 1000,
            premium_above: 50000,
            junk_keywords: owned(&["ジャンク", "junk", "破損", "damaged", "broken", "壊れ"]),
            bootleg_keywords: owned(&[
                "海外版",
                "bootleg",
                "fake",
                "偽物",
                "コピー品",
                "非正規",
                "中国版",
                "互換品",
            ]),
            bundle_keywords: owned(&["まとめ売り", "まとめ", "セット売り", "bundle", "lot of", "大量"]),
            parts_keywords: owned(&[
                "箱なし",
                "箱無し",
                "本体のみ",
                "no box",
                "loose",
                "parts only",
                "パーツのみ",
                "欠品",
            ]),
        }
    }
}

/// Scores a listing's purchase risk from its price and title.
pub struct RiskAssessor<'a> {
    config: &'a MarketConfig,
}

impl<'a> RiskAssessor<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Junk and bootleg indicators force `High`; any other flag gives `Medium`.
    pub fn assess(&self, listing: &Listing) -> RiskAssessment {
        let rules = &self.config.risk;
        let lower = listing.name.to_lowercase();
        let mut flags: Vec<String> = Vec::new();
        let mut severe = false;

        if listing.price <= 0 {
            warn!("listing {} has non-positive price {}", listing.id, listing.price);
        }
        if listing.price < rules.cheap_below {
            flags.push(FLAG_CHEAP.to_string());
        }
        if listing.price > rules.premium_above {
            flags.push(FLAG_PREMIUM.to_string());
        }
        if listing
            .condition
            .as_deref()
            .map_or(true, |c| c.trim().is_empty())
        {
            flags.push(FLAG_NO_CONDITION.to_string());
        }
        if mentions_any(&lower, &rules.junk_keywords) {
            flags.push(FLAG_JUNK.to_string());
            severe = true;
        }
        if mentions_any(&lower, &rules.bootleg_keywords) {
            flags.push(FLAG_BOOTLEG.to_string());
            severe = true;
        }
        if mentions_any(&lower, &rules.bundle_keywords) {
            flags.push(FLAG_BUNDLE.to_string());
        }
        if mentions_any(&lower, &rules.parts_keywords) {
            flags.push(FLAG_PARTS.to_string());
        }

        let level = if severe {
            RiskLevel::High
        } else if !flags.is_empty() {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        RiskAssessment { level, flags }
    }
}

fn mentions_any(lower: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}
