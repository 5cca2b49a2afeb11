use crate::customer::{Customer, CustomerError};
use crate::models::{Receipt, ReceiptLine, ShippableLine};
use crate::notify::Notifier;
use crate::shipping::ShippingService;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tally_catalog::{
    checked_sum, Catalog, InventoryError, PricingEngine, PricingError, Product, ProductId,
};
use uuid::Uuid;

/// Turns a customer's cart into a paid order
pub struct Checkout {
    pricing: PricingEngine,
    shipping: ShippingService,
    notifier: Arc<dyn Notifier>,
}

impl Checkout {
    pub fn new(
        pricing: PricingEngine,
        shipping: ShippingService,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            pricing,
            shipping,
            notifier,
        }
    }

    /// Validate, price and settle the customer's cart.
    ///
    /// Nothing is mutated until every line has passed validation and the
    /// customer can cover the total. Cart lines are left in place.
    pub fn process_order(
        &self,
        customer: &mut Customer,
        catalog: &mut Catalog,
    ) -> Result<Receipt, CheckoutError> {
        self.process_order_at(customer, catalog, Utc::now())
    }

    /// `process_order` with expiry judged at `now`
    pub fn process_order_at(
        &self,
        customer: &mut Customer,
        catalog: &mut Catalog,
        now: DateTime<Utc>,
    ) -> Result<Receipt, CheckoutError> {
        let result = self.settle(customer, catalog, now);

        if let Err(err) = &result {
            tracing::warn!(customer = %customer.id(), error = %err, "Checkout rejected");
        }
        result
    }

    fn settle(
        &self,
        customer: &mut Customer,
        catalog: &mut Catalog,
        now: DateTime<Utc>,
    ) -> Result<Receipt, CheckoutError> {
        if customer.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let entries = validate(customer, catalog, now)?;

        // Pricing
        let mut lines = Vec::with_capacity(entries.len());
        let mut shippable = Vec::new();

        for (product, quantity) in &entries {
            let line_total = self.pricing.line_total(product.price(), *quantity)?;

            if product.requires_shipping() {
                let unit_weight = product.weight().unwrap_or(Decimal::ZERO);
                shippable.push(ShippableLine::new(*quantity, product.name(), unit_weight)?);
            }

            lines.push(ReceiptLine {
                product_id: product.id(),
                name: product.name().to_string(),
                quantity: *quantity,
                line_total,
            });
        }

        let subtotal = checked_sum(lines.iter().map(|line| line.line_total))?;
        let total_weight = checked_sum(shippable.iter().map(|line| line.weight))?;
        let shipping = self.pricing.shipping_cost(total_weight)?;
        let total = checked_sum([subtotal, shipping])?;

        if customer.balance() < total {
            return Err(CheckoutError::InsufficientFunds {
                required: total,
                available: customer.balance(),
            });
        }

        // Commit
        for line in &lines {
            catalog.reduce_quantity(&line.product_id, line.quantity)?;
        }
        let remaining_balance = customer.debit(total)?;

        let mut receipt = Receipt {
            id: Uuid::new_v4(),
            customer_id: customer.id(),
            lines,
            subtotal,
            shipping,
            total,
            remaining_balance,
            manifest: None,
            created_at: Utc::now(),
        };

        tracing::info!(
            receipt = %receipt.id,
            customer = %customer.id(),
            subtotal = %subtotal,
            shipping = %shipping,
            total = %total,
            "Order settled"
        );
        self.notifier.notify(&receipt.to_string());

        if !shippable.is_empty() {
            receipt.manifest = Some(self.shipping.ship(&shippable));
        }

        Ok(receipt)
    }
}

/// Every cart line against current stock and expiry, in cart order
fn validate(
    customer: &Customer,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Result<Vec<(Product, i32)>, CheckoutError> {
    let mut entries = Vec::with_capacity(customer.cart().len());

    for (product_id, quantity) in customer.cart().iter() {
        let product = lookup(catalog, product_id)?;

        if product.quantity() < *quantity {
            return Err(CheckoutError::InsufficientStock {
                product: product.name().to_string(),
                requested: *quantity,
                available: product.quantity(),
            });
        }
        if product.can_expire() && product.is_expired_at(now) {
            return Err(CheckoutError::Expired(product.name().to_string()));
        }

        entries.push((product.clone(), *quantity));
    }

    Ok(entries)
}

fn lookup<'a>(catalog: &'a Catalog, product_id: &ProductId) -> Result<&'a Product, InventoryError> {
    catalog
        .get(product_id)
        .ok_or_else(|| InventoryError::NotFound(product_id.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },

    #[error("Product expired: {0}")]
    Expired(String),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Customer(#[from] CustomerError),
}
