//! Version/edition awareness: costume and special-version variants of the
//! same character must not stand in for each other.

use serde::{Deserialize, Serialize};

use super::identity::version_term;
use crate::models::Product;

/// A named special version with its English and Japanese tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionPattern {
    pub en: String,
    pub ja: String,
    /// Further spellings accepted as evidence of this version.
    #[serde(default)]
    pub extra: Vec<String>,
}

impl VersionPattern {
    fn new(en: &str, ja: &str, extra: &[&str]) -> Self {
        Self {
            en: en.to_string(),
            ja: ja.to_string(),
            extra: extra.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Every lowercase token that signals this version.
    pub fn terms(&self) -> Vec<String> {
        std::iter::once(&self.en)
            .chain(std::iter::once(&self.ja))
            .chain(self.extra.iter())
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }

    fn mentioned_in(&self, lower_text: &str) -> bool {
        self.terms().iter().any(|t| lower_text.contains(t.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionPatterns(pub Vec<VersionPattern>);

impl Default for VersionPatterns {
    fn default() -> Self {
        Self(vec![
            VersionPattern::new("swimsuit", "水着", &["swimwear"]),
            VersionPattern::new("casual", "私服", &["casual clothes"]),
            VersionPattern::new("wedding", "ウェディング", &["ウエディング"]),
            VersionPattern::new("formal dress", "フォーマル", &["正装"]),
            VersionPattern::new("lostword", "ロストワード", &["lost word"]),
            VersionPattern::new("school uniform", "制服", &[]),
            VersionPattern::new("bunny", "バニー", &[]),
            VersionPattern::new("yukata", "浴衣", &[]),
            VersionPattern::new("pajama", "パジャマ", &[]),
        ])
    }
}

/// The version a product demands of its listings.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRequirement {
    pub label: String,
    /// Index into the pattern table, `None` for a captured `<term> Ver.`.
    pub pattern: Option<usize>,
    pub terms: Vec<String>,
}

impl VersionPatterns {
    /// Find the version a product name carries.
    ///
    /// Named patterns are tried first in table order (English name, then
    /// Japanese name); failing those, the term right before a `Ver.` marker
    /// is captured.
    pub fn requirement_for(&self, product: &Product) -> Option<VersionRequirement> {
        let en = product.name.to_lowercase();
        let ja = product.name_ja.as_deref().unwrap_or_default().to_lowercase();

        for (idx, pattern) in self.0.iter().enumerate() {
            if pattern.mentioned_in(&en) || pattern.mentioned_in(&ja) {
                return Some(VersionRequirement {
                    label: pattern.en.clone(),
                    pattern: Some(idx),
                    terms: pattern.terms(),
                });
            }
        }

        let mut terms: Vec<String> = Vec::new();
        for name in [Some(product.name.as_str()), product.name_ja.as_deref()]
            .into_iter()
            .flatten()
        {
            if let Some(term) = version_term(name) {
                if !term.is_empty() && !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
        let label = terms.first()?.clone();
        Some(VersionRequirement {
            label,
            pattern: None,
            terms,
        })
    }

    /// Named versions the listing mentions other than `own`.
    pub fn conflicts_in(&self, lower_listing: &str, own: Option<usize>) -> Vec<String> {
        self.0
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != own)
            .filter(|(_, p)| p.mentioned_in(lower_listing))
            .map(|(_, p)| p.en.clone())
            .collect()
    }
}
