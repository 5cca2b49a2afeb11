use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const GRAMS_PER_KILOGRAM: i64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Shipping charge in currency units per kilogram
    pub shipping_rate_per_kg: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_rate_per_kg: Decimal::from(30),
        }
    }
}

impl PricingConfig {
    /// Build from a configured float rate
    pub fn from_rate_per_kg(rate: f64) -> Result<Self, PricingError> {
        let shipping_rate_per_kg = Decimal::try_from(rate)
            .map_err(|_| PricingError::InvalidRate(rate.to_string()))?;

        if shipping_rate_per_kg < Decimal::ZERO {
            return Err(PricingError::InvalidRate(rate.to_string()));
        }

        Ok(Self { shipping_rate_per_kg })
    }
}

/// Order pricing: line totals and weight-based shipping
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn line_total(&self, unit_price: Decimal, quantity: i32) -> Result<Decimal, PricingError> {
        scale(unit_price, quantity).ok_or_else(|| {
            PricingError::Overflow(format!("{} x {}", quantity, unit_price))
        })
    }

    /// Shipping cost for a parcel weighing `total_weight` grams
    pub fn shipping_cost(&self, total_weight: Decimal) -> Result<Decimal, PricingError> {
        if total_weight <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let kilograms = total_weight / Decimal::from(GRAMS_PER_KILOGRAM);
        kilograms
            .checked_mul(self.config.shipping_rate_per_kg)
            .ok_or_else(|| PricingError::Overflow(format!("shipping for {}g", total_weight)))
    }
}

/// `value` times `quantity`, or `None` when it does not fit a `Decimal`
pub fn scale(value: Decimal, quantity: i32) -> Option<Decimal> {
    value.checked_mul(Decimal::from(quantity))
}

/// Sum that fails instead of panicking once it leaves `Decimal` range
pub fn checked_sum<I>(values: I) -> Result<Decimal, PricingError>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| PricingError::Overflow(format!("{} + {}", acc, value)))
    })
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid shipping rate: {0}")]
    InvalidRate(String),

    #[error("Amount out of range: {0}")]
    Overflow(String),
}
