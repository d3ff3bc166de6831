use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing — Marketplace item snapshot taken at scrape time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    /// Asking price in yen.
    pub price: i64,
    pub condition: Option<String>,
    pub thumbnail: Option<String>,
    pub category_hint: Option<String>,
}

impl Listing {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            condition: None,
            thumbnail: None,
            category_hint: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_category_hint(mut self, hint: impl Into<String>) -> Self {
        self.category_hint = Some(hint.into());
        self
    }

    /// Name plus category hint, the text fed to the type classifier.
    pub fn classification_text(&self) -> String {
        match self.category_hint.as_deref().map(str::trim) {
            Some(hint) if !hint.is_empty() => format!("{} {}", self.name, hint),
            _ => self.name.clone(),
        }
    }
}
