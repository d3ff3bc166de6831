use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CostBreakdown — Landed cost through a single proxy service
// ---------------------------------------------------------------------------

/// All yen amounts are whole yen; `total_usd` is rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub service: String,
    pub item_price: i64,
    pub fees: i64,
    pub domestic_shipping: i64,
    pub international_shipping: i64,
    /// Domestic plus international shipping.
    pub shipping: i64,
    pub duty: i64,
    pub total: i64,
    pub total_usd: f64,
}

// ---------------------------------------------------------------------------
// CostEstimate — Every service's breakdown plus the cheapest/priciest pick
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub item_price: i64,
    pub weight_kg: f64,
    pub breakdowns: Vec<CostBreakdown>,
    pub cheapest: String,
    pub most_expensive: String,
    pub savings_jpy: i64,
    pub savings_usd: f64,
}

impl CostEstimate {
    /// Look up the breakdown for a service by name (case-insensitive).
    pub fn breakdown(&self, service: &str) -> Option<&CostBreakdown> {
        self.breakdowns
            .iter()
            .find(|b| b.service.eq_ignore_ascii_case(service))
    }

    pub fn cheapest_breakdown(&self) -> Option<&CostBreakdown> {
        self.breakdown(&self.cheapest)
    }
}
