//! Figure subtype detection and category gating.
//!
//! Matching is case-insensitive substring containment against the raw text
//! (not the normalized form, so scale notations like `1/7` survive). Merch
//! keywords are checked first and win outright; subtype keywords follow in
//! table order, first hit wins.

use serde::{Deserialize, Serialize};

use crate::config::MarketConfig;
use crate::models::{ListingType, ProductCategory};

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtypeKeywords {
    pub subtype: ListingType,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordTables {
    /// Non-figure merchandise indicators.
    pub merch: Vec<String>,
    /// Figure subtypes in priority order.
    pub subtypes: Vec<SubtypeKeywords>,
    /// Leading product-line prefixes removed when deriving bare names.
    pub name_prefixes: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            merch: owned(&[
                "アクリルキーホルダー",
                "アクキー",
                "アクリルスタンド",
                "アクスタ",
                "アクリルブロック",
                "キーホルダー",
                "キーチェーン",
                "keychain",
                "key chain",
                "acrylic stand",
                "缶バッジ",
                "缶バッチ",
                "badge",
                "ラバーストラップ",
                "ストラップ",
                "strap",
                "tシャツ",
                "t-shirt",
                "パーカー",
                "hoodie",
                "タオル",
                "towel",
                "クリアファイル",
                "clear file",
                "ポスター",
                "poster",
                "タペストリー",
                "tapestry",
                "色紙",
                "ブロマイド",
                "ステッカー",
                "sticker",
                "マウスパッド",
                "mousepad",
                "クッション",
                "cushion",
                "ぬいぐるみ",
                "plush",
                "文房具",
                "ボールペン",
                "下敷き",
                "シール",
            ]),
            subtypes: vec![
                SubtypeKeywords {
                    subtype: ListingType::Nendoroid,
                    keywords: owned(&["ねんどろいど", "ねんどろ", "ネンドロイド", "nendoroid"]),
                },
                SubtypeKeywords {
                    subtype: ListingType::Figma,
                    keywords: owned(&["figma", "フィグマ"]),
                },
                SubtypeKeywords {
                    subtype: ListingType::PopUpParade,
                    keywords: owned(&[
                        "pop up parade",
                        "pop-up parade",
                        "popupparade",
                        "ポップアップパレード",
                        "ポップアップ パレード",
                    ]),
                },
                SubtypeKeywords {
                    subtype: ListingType::Scale,
                    keywords: owned(&[
                        "1/4",
                        "1/6",
                        "1/7",
                        "1/8",
                        "スケールフィギュア",
                        "scale figure",
                        "完成品フィギュア",
                    ]),
                },
                SubtypeKeywords {
                    subtype: ListingType::Prize,
                    keywords: owned(&[
                        "プライズ",
                        "prize",
                        "一番くじ",
                        "ichiban kuji",
                        "バンプレスト",
                        "banpresto",
                        "タイトー",
                        "taito",
                        "フリュー",
                        "furyu",
                        "ぬーどるストッパー",
                    ]),
                },
            ],
            name_prefixes: owned(&[
                "nendoroid",
                "ねんどろいど",
                "ネンドロイド",
                "figma",
                "フィグマ",
                "pop up parade",
                "pop-up parade",
                "popupparade",
                "ポップアップパレード",
                "ポップアップ パレード",
            ]),
        }
    }
}

impl KeywordTables {
    pub fn keywords_for(&self, subtype: ListingType) -> &[String] {
        self.subtypes
            .iter()
            .find(|s| s.subtype == subtype)
            .map(|s| s.keywords.as_slice())
            .unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Classifier verdict with the keywords that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDetection {
    pub listing_type: ListingType,
    pub keywords: Vec<String>,
}

/// Outcome of the category gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compatibility {
    pub ok: bool,
    pub bonus: f64,
}

impl Compatibility {
    const REJECT: Self = Self {
        ok: false,
        bonus: 0.0,
    };

    fn accept(bonus: f64) -> Self {
        Self { ok: true, bonus }
    }
}

// ---------------------------------------------------------------------------
// ProductTypeClassifier
// ---------------------------------------------------------------------------

/// Keyword-driven product type detection bound to a [`MarketConfig`].
pub struct ProductTypeClassifier<'a> {
    config: &'a MarketConfig,
}

impl<'a> ProductTypeClassifier<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Classify free text as merch, a figure subtype, or unknown.
    pub fn detect_type(&self, text: &str) -> TypeDetection {
        let lower = text.to_lowercase();
        let tables = &self.config.keywords;

        let merch_hits = hits(&lower, &tables.merch);
        if !merch_hits.is_empty() {
            return TypeDetection {
                listing_type: ListingType::Merch,
                keywords: merch_hits,
            };
        }

        for entry in &tables.subtypes {
            let found = hits(&lower, &entry.keywords);
            if !found.is_empty() {
                return TypeDetection {
                    listing_type: entry.subtype,
                    keywords: found,
                };
            }
        }

        TypeDetection {
            listing_type: ListingType::Unknown,
            keywords: Vec::new(),
        }
    }

    /// Detect the product type a search query is asking for.
    ///
    /// Returns `None` when the query carries no type signal.
    pub fn detect_query_product_type(&self, query: &str) -> Option<ListingType> {
        match self.detect_type(query).listing_type {
            ListingType::Unknown => None,
            other => Some(other),
        }
    }

    /// Whether `text` mentions a keyword for exactly this subtype.
    pub fn has_subtype_keyword(&self, text: &str, subtype: ListingType) -> bool {
        let lower = text.to_lowercase();
        self.config
            .keywords
            .keywords_for(subtype)
            .iter()
            .any(|k| lower.contains(&k.to_lowercase()))
    }

    /// Category gate: may a listing of `listing_type` match a product of
    /// `category`, and with what bonus.
    ///
    /// Figure products never accept merch, and never accept a different named
    /// figure subtype. Untyped listings pass with no bonus.
    pub fn category_compatible(
        &self,
        category: Option<ProductCategory>,
        listing_type: ListingType,
    ) -> Compatibility {
        let weights = &self.config.matching;
        let category = match category {
            Some(c) if c.is_figure() => c,
            _ => return Compatibility::accept(0.0),
        };

        match listing_type {
            ListingType::Merch => Compatibility::REJECT,
            ListingType::Unknown => Compatibility::accept(0.0),
            detected => {
                if let Some(required) = category.required_subtype() {
                    if detected == required {
                        Compatibility::accept(weights.subtype_bonus)
                    } else {
                        Compatibility::REJECT
                    }
                } else {
                    let expected = match category {
                        c if c.is_scale() => ListingType::Scale,
                        ProductCategory::Prize => ListingType::Prize,
                        // figma is the action-figure line the classifier knows
                        _ => ListingType::Figma,
                    };
                    if detected == expected {
                        Compatibility::accept(weights.generic_subtype_bonus)
                    } else {
                        Compatibility::REJECT
                    }
                }
            }
        }
    }
}

fn hits(lower: &str, keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .filter(|k| lower.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}
