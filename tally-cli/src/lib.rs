use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tally_catalog::{Catalog, PricingEngine, Product, ProductId};
use tally_order::{Checkout, Customer, Notifier, ShippingService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stderr fmt subscriber. RUST_LOG wins over the configured filter.
pub fn subscriber(default_filter: &str) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Install the global subscriber; call once from main
pub fn init_tracing(default_filter: &str) {
    subscriber(default_filter).init();
}

/// Ids of the demo shelf
pub struct SampleCatalog {
    pub catalog: Catalog,
    pub cheese: ProductId,
    pub biscuits: ProductId,
    pub tv: ProductId,
    pub scratch_card: ProductId,
    pub mobile_card: ProductId,
}

pub fn sample_catalog() -> anyhow::Result<SampleCatalog> {
    let best_before = Utc::now() + Duration::days(30);
    let mut catalog = Catalog::new();

    let cheese = catalog.insert(Product::expirable(
        "Cheese",
        Decimal::from(100),
        5,
        Decimal::from(200),
        Some(best_before),
    )?)?;
    let biscuits = catalog.insert(Product::expirable(
        "Biscuits",
        Decimal::from(150),
        3,
        Decimal::from(700),
        Some(best_before),
    )?)?;
    let tv = catalog.insert(Product::shippable(
        "TV",
        Decimal::from(1000),
        2,
        Decimal::from(5000),
    )?)?;
    let scratch_card =
        catalog.insert(Product::non_shippable("Scratch Card", Decimal::from(50), 10)?)?;
    let mobile_card =
        catalog.insert(Product::non_shippable("Mobile Card", Decimal::from(20), 25)?)?;

    tracing::info!(products = catalog.len(), "Catalog seeded");

    Ok(SampleCatalog {
        catalog,
        cheese,
        biscuits,
        tv,
        scratch_card,
        mobile_card,
    })
}

/// Run a settled order and a rejected one against the sample shelf
pub fn run_demo(pricing: PricingEngine, notifier: Arc<dyn Notifier>) -> anyhow::Result<()> {
    let mut shelf = sample_catalog()?;
    let checkout = Checkout::new(pricing, ShippingService::new(notifier.clone()), notifier.clone());

    let mut ahmed = Customer::new("Ahmed", Decimal::from(1000))?;
    ahmed.cart_mut().add(&shelf.catalog, shelf.cheese, 2)?;
    ahmed.cart_mut().add(&shelf.catalog, shelf.biscuits, 1)?;
    ahmed.cart_mut().add(&shelf.catalog, shelf.scratch_card, 1)?;
    ahmed.cart_mut().add(&shelf.catalog, shelf.mobile_card, 1)?;
    checkout.process_order(&mut ahmed, &mut shelf.catalog)?;

    let mut mona = Customer::new("Mona", Decimal::from(100))?;
    mona.cart_mut().add(&shelf.catalog, shelf.tv, 2)?;
    if let Err(err) = checkout.process_order(&mut mona, &mut shelf.catalog) {
        notifier.notify(&format!("Order for {} declined: {}", mona.name(), err));
    }

    Ok(())
}
