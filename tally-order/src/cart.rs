use indexmap::IndexMap;
use tally_catalog::{Catalog, ProductId};

/// Requested quantities per product, in the order they were first added
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: IndexMap<ProductId, i32>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Add units of a catalog product, merging with any earlier request.
    ///
    /// Stock is checked against the product's current quantity only, not the
    /// running cart total; checkout re-validates the merged amount.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidArgument(format!(
                "quantity must be positive, got {}",
                quantity
            )));
        }

        let product = catalog
            .get(&product_id)
            .ok_or_else(|| CartError::InvalidArgument(format!("unknown product {}", product_id)))?;

        if product.quantity() < quantity {
            return Err(CartError::OutOfStock {
                product: product.name().to_string(),
                requested: quantity,
                available: product.quantity(),
            });
        }

        if product.can_expire() && product.is_expired() {
            return Err(CartError::Expired(product.name().to_string()));
        }

        let requested = self.items.entry(product_id).or_insert(0);
        *requested = requested.saturating_add(quantity);

        tracing::debug!(
            product = product.name(),
            quantity,
            requested = *requested,
            "Added to cart"
        );
        Ok(())
    }

    /// Drop a line entirely, returning what was requested
    pub fn remove(&mut self, product_id: &ProductId) -> Option<i32> {
        self.items.shift_remove(product_id)
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> Option<i32> {
        self.items.get(product_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &i32)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of stock: {product} requested {requested}, available {available}")]
    OutOfStock {
        product: String,
        requested: i32,
        available: i32,
    },

    #[error("Product expired: {0}")]
    Expired(String),
}
