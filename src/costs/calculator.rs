//! Landed-cost calculator.
//!
//! For each configured proxy service the total is composed as
//! `item + domestic shipping + fees + international shipping + duty`, with
//! each multiplicative fee term rounded to whole yen before summing. The
//! rounding order matches real invoices and must not be rearranged.

use log::debug;

use crate::config::MarketConfig;
use crate::costs::schedule::ServiceFees;
use crate::error::{MarketError, Result};
use crate::models::{CostBreakdown, CostEstimate};
use crate::round2;

/// Computes per-service landed cost from a [`MarketConfig`] fee schedule.
pub struct CostCalculator<'a> {
    config: &'a MarketConfig,
}

impl<'a> CostCalculator<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Landed cost through every service, plus the cheapest/priciest pick.
    ///
    /// Rejects a price outside `1..=max_item_price` or a negative/non-finite
    /// weight.
    pub fn calculate(&self, item_price: i64, weight_kg: f64) -> Result<CostEstimate> {
        self.check_inputs(item_price, weight_kg)?;
        let costs = &self.config.costs;

        let breakdowns: Vec<CostBreakdown> = costs
            .services
            .iter()
            .map(|service| self.breakdown(service, item_price, weight_kg))
            .collect::<Result<_>>()?;

        let first = breakdowns
            .first()
            .ok_or_else(|| MarketError::Config("no proxy services configured".into()))?;
        let mut cheapest = first;
        let mut most_expensive = first;
        for b in &breakdowns[1..] {
            if b.total < cheapest.total {
                cheapest = b;
            }
            if b.total > most_expensive.total {
                most_expensive = b;
            }
        }

        let cheapest_name = cheapest.service.clone();
        let most_expensive_name = most_expensive.service.clone();
        let savings_jpy = most_expensive.total - cheapest.total;
        let savings_usd = round2(most_expensive.total_usd - cheapest.total_usd);
        let cheapest_total = cheapest.total;

        let estimate = CostEstimate {
            item_price,
            weight_kg,
            breakdowns,
            cheapest: cheapest_name,
            most_expensive: most_expensive_name,
            savings_jpy,
            savings_usd,
        };
        debug!(
            "landed cost for {item_price} JPY / {weight_kg} kg: cheapest {} ({} JPY)",
            estimate.cheapest, cheapest_total
        );
        Ok(estimate)
    }

    /// [`calculate`](Self::calculate) at the configured default weight.
    pub fn calculate_default(&self, item_price: i64) -> Result<CostEstimate> {
        self.calculate(item_price, self.config.costs.default_weight_kg)
    }

    /// Breakdown for a single named service.
    pub fn breakdown_for(
        &self,
        service_name: &str,
        item_price: i64,
        weight_kg: f64,
    ) -> Result<CostBreakdown> {
        self.check_inputs(item_price, weight_kg)?;
        let service = self
            .config
            .costs
            .service(service_name)
            .ok_or_else(|| MarketError::NotFound(format!("proxy service '{service_name}'")))?;
        self.breakdown(service, item_price, weight_kg)
    }

    /// International shipping for a parcel weight.
    ///
    /// The first tier whose breakpoint is at or above the weight wins;
    /// heavier parcels use the flat fallback.
    pub fn shipping_for(&self, weight_kg: f64) -> i64 {
        let costs = &self.config.costs;
        costs
            .shipping_tiers
            .iter()
            .find(|tier| weight_kg <= tier.max_weight_kg)
            .map_or(costs.fallback_shipping, |tier| tier.cost)
    }

    fn breakdown(
        &self,
        service: &ServiceFees,
        item_price: i64,
        weight_kg: f64,
    ) -> Result<CostBreakdown> {
        let costs = &self.config.costs;

        let subtotal = yen_sum(&[item_price, costs.domestic_shipping])?;
        let fx = round_yen(subtotal as f64 * service.fx_markup);
        let payment = round_yen(subtotal as f64 * service.payment_fee);
        let fees = yen_sum(&[service.service_fee, fx, payment])?;
        let international = self.shipping_for(weight_kg);

        let pre_duty = yen_sum(&[subtotal, fees, international])?;
        let duty = self.duty_for(pre_duty);
        let total = yen_sum(&[pre_duty, duty])?;

        Ok(CostBreakdown {
            service: service.name.clone(),
            item_price,
            fees,
            domestic_shipping: costs.domestic_shipping,
            international_shipping: international,
            shipping: yen_sum(&[costs.domestic_shipping, international])?,
            duty,
            total,
            total_usd: round2(total as f64 / costs.exchange_rate),
        })
    }

    fn check_inputs(&self, item_price: i64, weight_kg: f64) -> Result<()> {
        let max_price = self.config.costs.max_item_price;
        if item_price <= 0 || item_price > max_price {
            return Err(MarketError::InvalidArgument(format!(
                "item price must be between 1 and {max_price} yen, got {item_price}"
            )));
        }
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(MarketError::InvalidArgument(format!(
                "weight must be a non-negative number, got {weight_kg}"
            )));
        }
        Ok(())
    }

    /// Duty in yen on the dollar value above the de minimis threshold.
    ///
    /// `(usd - threshold) * rate` is converted back to yen unrounded and
    /// rounded once, to whole yen. The intermediate dollar amount is never
    /// rounded, so duty moves in 1 yen steps rather than 1 dollar steps.
    fn duty_for(&self, running_total: i64) -> i64 {
        let costs = &self.config.costs;
        let usd = running_total as f64 / costs.exchange_rate;
        if usd <= costs.duty_free_threshold_usd {
            return 0;
        }
        let over = usd - costs.duty_free_threshold_usd;
        round_yen(over * costs.duty_rate * costs.exchange_rate)
    }
}

fn round_yen(amount: f64) -> i64 {
    amount.round() as i64
}

/// Checked sum of yen amounts; overflow is reported instead of wrapping.
fn yen_sum(parts: &[i64]) -> Result<i64> {
    parts
        .iter()
        .try_fold(0i64, |acc, &part| acc.checked_add(part))
        .ok_or_else(|| MarketError::InvalidArgument("landed cost overflows i64 yen".into()))
}
