//! Fee schedule: proxy services, shipping tiers, duty and exchange rate.
//!
//! These are real-world figures that drift over time, so they live in
//! configuration and are validated once at load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};

/// Fee parameters for one proxy/intermediary service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFees {
    pub name: String,
    /// Flat per-order fee in yen.
    pub service_fee: i64,
    /// Currency conversion markup as a fraction of the subtotal.
    pub fx_markup: f64,
    /// Payment processing fee as a fraction of the subtotal.
    pub payment_fee: f64,
}

impl ServiceFees {
    pub fn new(name: &str, service_fee: i64, fx_markup: f64, payment_fee: f64) -> Self {
        Self {
            name: name.to_string(),
            service_fee,
            fx_markup,
            payment_fee,
        }
    }
}

/// Parcels up to `max_weight_kg` (inclusive) ship for `cost` yen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingTier {
    pub max_weight_kg: f64,
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostConfig {
    /// Services in comparison order; ties resolve to the earlier one.
    pub services: Vec<ServiceFees>,
    /// Ascending weight breakpoints.
    pub shipping_tiers: Vec<ShippingTier>,
    /// International shipping for parcels heavier than the last tier.
    pub fallback_shipping: i64,
    /// Seller-to-warehouse shipping estimate in yen.
    pub domestic_shipping: i64,
    pub duty_free_threshold_usd: f64,
    pub duty_rate: f64,
    /// Yen per US dollar.
    pub exchange_rate: f64,
    pub default_weight_kg: f64,
    /// Largest item price accepted by the calculator, in yen.
    pub max_item_price: i64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            services: vec![
                ServiceFees::new("Buyee", 300, 0.0, 0.035),
                ServiceFees::new("ZenMarket", 500, 0.0, 0.045),
                ServiceFees::new("FromJapan", 200, 0.02, 0.0),
                ServiceFees::new("Neokyo", 350, 0.0, 0.029),
            ],
            shipping_tiers: vec![
                ShippingTier {
                    max_weight_kg: 0.5,
                    cost: 1500,
                },
                ShippingTier {
                    max_weight_kg: 1.0,
                    cost: 2000,
                },
                ShippingTier {
                    max_weight_kg: 2.0,
                    cost: 3000,
                },
                ShippingTier {
                    max_weight_kg: 5.0,
                    cost: 5500,
                },
            ],
            fallback_shipping: 8000,
            domestic_shipping: 700,
            duty_free_threshold_usd: 800.0,
            duty_rate: 0.045,
            exchange_rate: 155.0,
            default_weight_kg: 0.5,
            max_item_price: 100_000_000,
        }
    }
}

impl CostConfig {
    /// Fail fast on schedules that would produce nonsense totals.
    pub fn validate(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(MarketError::Config("no proxy services configured".into()));
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            let name = service.name.trim();
            if name.is_empty() {
                return Err(MarketError::Config("proxy service with blank name".into()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(MarketError::Config(format!(
                    "duplicate proxy service '{name}'"
                )));
            }
            if service.service_fee < 0 {
                return Err(MarketError::Config(format!(
                    "service '{name}' has negative service fee"
                )));
            }
            for (label, rate) in [("fxMarkup", service.fx_markup), ("paymentFee", service.payment_fee)] {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(MarketError::Config(format!(
                        "service '{name}' has invalid {label} {rate}"
                    )));
                }
            }
        }

        let mut previous = 0.0;
        for tier in &self.shipping_tiers {
            if !tier.max_weight_kg.is_finite() || tier.max_weight_kg <= previous {
                return Err(MarketError::Config(format!(
                    "shipping tiers must ascend; {} kg follows {} kg",
                    tier.max_weight_kg, previous
                )));
            }
            if tier.cost < 0 {
                return Err(MarketError::Config(format!(
                    "shipping tier {} kg has negative cost",
                    tier.max_weight_kg
                )));
            }
            previous = tier.max_weight_kg;
        }

        if self.fallback_shipping < 0 || self.domestic_shipping < 0 {
            return Err(MarketError::Config("shipping costs must be non-negative".into()));
        }
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(MarketError::Config(format!(
                "exchange rate must be positive, got {}",
                self.exchange_rate
            )));
        }
        if !self.duty_rate.is_finite() || self.duty_rate < 0.0 {
            return Err(MarketError::Config(format!(
                "duty rate must be non-negative, got {}",
                self.duty_rate
            )));
        }
        if !self.duty_free_threshold_usd.is_finite() || self.duty_free_threshold_usd < 0.0 {
            return Err(MarketError::Config(
                "duty-free threshold must be non-negative".into(),
            ));
        }
        if !self.default_weight_kg.is_finite() || self.default_weight_kg < 0.0 {
            return Err(MarketError::Config(
                "default weight must be non-negative".into(),
            ));
        }
        if self.max_item_price <= 0 {
            return Err(MarketError::Config(format!(
                "max item price must be positive, got {}",
                self.max_item_price
            )));
        }
        Ok(())
    }

    pub fn service(&self, name: &str) -> Option<&ServiceFees> {
        self.services
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}
