use std::fmt;

use serde::{Deserialize, Serialize};

use super::ListingType;

// ---------------------------------------------------------------------------
// ProductCategory — Catalog-side figure family
// ---------------------------------------------------------------------------

/// The figure family a catalog entry belongs to.
///
/// Scale variants share the same matching policy; the ratio is kept only so
/// the catalog round-trips without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Nendoroid,
    Figma,
    #[serde(alias = "pop-up-parade", alias = "popupparade")]
    PopUpParade,
    #[serde(rename = "scale_1_4", alias = "1/4")]
    Scale14,
    #[serde(rename = "scale_1_6", alias = "1/6")]
    Scale16,
    #[serde(rename = "scale_1_7", alias = "1/7")]
    Scale17,
    #[serde(rename = "scale_1_8", alias = "1/8")]
    Scale18,
    Scale,
    Prize,
    #[serde(alias = "action-figure")]
    ActionFigure,
    Other,
}

impl ProductCategory {
    /// Whether this category names a figure (as opposed to generic goods).
    pub fn is_figure(self) -> bool {
        !matches!(self, ProductCategory::Other)
    }

    pub fn is_scale(self) -> bool {
        matches!(
            self,
            ProductCategory::Scale14
                | ProductCategory::Scale16
                | ProductCategory::Scale17
                | ProductCategory::Scale18
                | ProductCategory::Scale
        )
    }

    /// The named subtype a listing must explicitly mention, if any.
    ///
    /// Only nendoroid, figma and POP UP PARADE products demand this; scale and
    /// prize products accept generic figure listings.
    pub fn required_subtype(self) -> Option<ListingType> {
        match self {
            ProductCategory::Nendoroid => Some(ListingType::Nendoroid),
            ProductCategory::Figma => Some(ListingType::Figma),
            ProductCategory::PopUpParade => Some(ListingType::PopUpParade),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Nendoroid => "nendoroid",
            ProductCategory::Figma => "figma",
            ProductCategory::PopUpParade => "pop_up_parade",
            ProductCategory::Scale14 => "scale_1_4",
            ProductCategory::Scale16 => "scale_1_6",
            ProductCategory::Scale17 => "scale_1_7",
            ProductCategory::Scale18 => "scale_1_8",
            ProductCategory::Scale => "scale",
            ProductCategory::Prize => "prize",
            ProductCategory::ActionFigure => "action_figure",
            ProductCategory::Other => "other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Product — Canonical catalog entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub name_ja: Option<String>,
    pub series: Option<String>,
    pub series_ja: Option<String>,
    pub category: Option<ProductCategory>,
}

impl Product {
    /// Create a product with only an id and English name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_ja: None,
            series: None,
            series_ja: None,
            category: None,
        }
    }

    pub fn with_name_ja(mut self, name_ja: impl Into<String>) -> Self {
        self.name_ja = Some(name_ja.into());
        self
    }

    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn with_series_ja(mut self, series_ja: impl Into<String>) -> Self {
        self.series_ja = Some(series_ja.into());
        self
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = Some(category);
        self
    }
}
