use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_catalog::pricing::scale;
use tally_catalog::{PricingError, ProductId};
use uuid::Uuid;

/// Shipping view of a cart line, built during pricing. Weight in grams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippableLine {
    pub name: String,
    pub weight: Decimal,
}

impl ShippableLine {
    pub fn new(
        quantity: i32,
        product_name: &str,
        unit_weight: Decimal,
    ) -> Result<Self, PricingError> {
        let weight = scale(unit_weight, quantity).ok_or_else(|| {
            PricingError::Overflow(format!("{} x {}g of {}", quantity, unit_weight, product_name))
        })?;

        Ok(Self {
            name: format!("{}x {}", quantity, product_name),
            weight,
        })
    }
}

/// Parcel summary handed to the carrier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub items: Vec<ShippableLine>,
    pub total_weight: Decimal,
}

impl Manifest {
    pub fn total_weight_kg(&self) -> Decimal {
        self.total_weight / Decimal::from(1000)
    }
}

/// A purchased line on the receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub line_total: Decimal,
}

/// The outcome of a successful checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub remaining_balance: Decimal,
    pub manifest: Option<Manifest>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {} @ {}", line.quantity, line.name, line.line_total.normalize())?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal {}", self.subtotal.normalize())?;
        writeln!(f, "Shipping {}", self.shipping.normalize())?;
        writeln!(f, "Amount {}", self.total.normalize())?;
        write!(f, "Balance {}", self.remaining_balance.normalize())
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for item in &self.items {
            writeln!(f, "{} {}g", item.name, item.weight.normalize())?;
        }
        write!(f, "Total package weight {}kg", self.total_weight_kg().normalize())
    }
}
