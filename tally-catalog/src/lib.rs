pub mod product;
pub mod pricing;
pub mod inventory;

pub use product::{Product, ProductError, ProductId, ProductKind};
pub use pricing::{checked_sum, PricingConfig, PricingEngine, PricingError};
pub use inventory::{Catalog, InventoryError};
