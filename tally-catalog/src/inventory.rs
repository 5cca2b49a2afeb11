use crate::product::{Product, ProductId};
use std::collections::HashMap;

/// In-memory catalog; the only owner of product stock
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Register a product. Names are unique within a catalog.
    pub fn insert(&mut self, product: Product) -> Result<ProductId, InventoryError> {
        if self.find_by_name(product.name()).is_some() {
            return Err(InventoryError::DuplicateName(product.name().to_string()));
        }

        let id = product.id();
        self.products.insert(id, product);
        Ok(id)
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.values().find(|p| p.name() == name)
    }

    /// Take fulfilled units out of stock
    pub fn reduce_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i32,
    ) -> Result<(), InventoryError> {
        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }

        let product = self.get_mut(product_id)?;

        if product.quantity() < quantity {
            return Err(InventoryError::InsufficientStock {
                product: product.name().to_string(),
                requested: quantity,
                available: product.quantity(),
            });
        }

        let remaining = product.quantity() - quantity;
        product.set_quantity(remaining);
        Ok(())
    }

    /// Put units back on the shelf
    pub fn restock(&mut self, product_id: &ProductId, quantity: i32) -> Result<(), InventoryError> {
        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }

        let product = self.get_mut(product_id)?;
        let restocked = product.quantity().saturating_add(quantity);
        product.set_quantity(restocked);
        Ok(())
    }

    /// Stock count correction (shrinkage, manual recount)
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i32,
    ) -> Result<(), InventoryError> {
        if quantity < 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }

        self.get_mut(product_id)?.set_quantity(quantity);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    fn get_mut(&mut self, product_id: &ProductId) -> Result<&mut Product, InventoryError> {
        self.products
            .get_mut(product_id)
            .ok_or_else(|| InventoryError::NotFound(product_id.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product name already in catalog: {0}")]
    DuplicateName(String),

    #[error("Invalid stock quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn biscuits() -> Product {
        Product::expirable("Biscuits", Decimal::from(150), 3, Decimal::from(700), None).unwrap()
    }

    #[test]
    fn test_stock_lifecycle() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(biscuits()).unwrap();
        assert_eq!(catalog.get(&id).unwrap().quantity(), 3);

        catalog.reduce_quantity(&id, 2).unwrap();
        assert_eq!(catalog.get(&id).unwrap().quantity(), 1);

        catalog.restock(&id, 4).unwrap();
        assert_eq!(catalog.get(&id).unwrap().quantity(), 5);

        catalog.set_quantity(&id, 0).unwrap();
        assert_eq!(catalog.get(&id).unwrap().quantity(), 0);
    }

    #[test]
    fn test_reduce_beyond_stock_leaves_quantity() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(biscuits()).unwrap();

        let result = catalog.reduce_quantity(&id, 4);
        assert!(matches!(
            result,
            Err(InventoryError::InsufficientStock { requested: 4, available: 3, .. })
        ));
        assert_eq!(catalog.get(&id).unwrap().quantity(), 3);
    }

    #[test]
    fn test_reduce_rejects_non_positive_quantity() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(biscuits()).unwrap();

        let negative = catalog.reduce_quantity(&id, -7);
        assert!(matches!(negative, Err(InventoryError::InvalidQuantity(-7))));

        let zero = catalog.reduce_quantity(&id, 0);
        assert!(matches!(zero, Err(InventoryError::InvalidQuantity(0))));
        assert_eq!(catalog.get(&id).unwrap().quantity(), 3);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(biscuits()).unwrap();

        assert!(matches!(catalog.insert(biscuits()), Err(InventoryError::DuplicateName(_))));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_name("Biscuits").is_some());
    }

    #[test]
    fn test_unknown_product() {
        let mut catalog = Catalog::new();
        let result = catalog.restock(&ProductId::new(), 1);
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }
}
