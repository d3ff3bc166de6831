//! Landed-cost estimation through proxy/intermediary services.

pub mod calculator;
pub mod schedule;

pub use calculator::CostCalculator;
pub use schedule::{CostConfig, ServiceFees, ShippingTier};
