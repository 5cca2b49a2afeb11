use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable catalog identity of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Product variants in the catalog. Weights are in grams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductKind {
    /// Perishable goods; shipped when they weigh anything
    Expirable {
        weight: Decimal,
        expires_at: Option<DateTime<Utc>>,
    },
    /// Durable goods that need physical delivery
    Shippable { weight: Decimal },
    /// Digital or over-the-counter goods
    NonShippable,
}

/// Core product structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    quantity: i32,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: i32,
        kind: ProductKind,
    ) -> Result<Self, ProductError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProductError::InvalidField("name must not be empty".to_string()));
        }
        if price < Decimal::ZERO {
            return Err(ProductError::InvalidField(format!(
                "negative price for {}: {}",
                name, price
            )));
        }
        if quantity < 0 {
            return Err(ProductError::InvalidField(format!(
                "negative quantity for {}: {}",
                name, quantity
            )));
        }
        if let Some(weight) = kind.weight() {
            if weight < Decimal::ZERO {
                return Err(ProductError::InvalidField(format!(
                    "negative weight for {}: {}",
                    name, weight
                )));
            }
        }

        Ok(Self {
            id: ProductId::new(),
            name,
            price,
            quantity,
            kind,
        })
    }

    /// Perishable product with an optional best-before timestamp
    pub fn expirable(
        name: impl Into<String>,
        price: Decimal,
        quantity: i32,
        weight: Decimal,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ProductError> {
        Self::new(name, price, quantity, ProductKind::Expirable { weight, expires_at })
    }

    pub fn shippable(
        name: impl Into<String>,
        price: Decimal,
        quantity: i32,
        weight: Decimal,
    ) -> Result<Self, ProductError> {
        Self::new(name, price, quantity, ProductKind::Shippable { weight })
    }

    pub fn non_shippable(
        name: impl Into<String>,
        price: Decimal,
        quantity: i32,
    ) -> Result<Self, ProductError> {
        Self::new(name, price, quantity, ProductKind::NonShippable)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Units currently in stock
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Unit weight in grams, for variants that carry one
    pub fn weight(&self) -> Option<Decimal> {
        self.kind.weight()
    }

    pub fn requires_shipping(&self) -> bool {
        self.kind.weight().is_some_and(|w| w > Decimal::ZERO)
    }

    pub fn can_expire(&self) -> bool {
        matches!(self.kind, ProductKind::Expirable { .. })
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self.kind {
            ProductKind::Expirable { expires_at, .. } => expires_at,
            _ => None,
        }
    }

    /// Expired if the product has an expiry date and `now` is past it
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expiry| now > expiry)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub(crate) fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

impl ProductKind {
    pub fn weight(&self) -> Option<Decimal> {
        match self {
            ProductKind::Expirable { weight, .. } | ProductKind::Shippable { weight } => {
                Some(*weight)
            }
            ProductKind::NonShippable => None,
        }
    }
}

/// Product-related errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Invalid product field: {0}")]
    InvalidField(String),
}
