use std::sync::Arc;
use tally_catalog::PricingEngine;
use tally_cli::{init_tracing, run_demo};
use tally_order::StdoutNotifier;

fn main() -> anyhow::Result<()> {
    let config = tally_config::Config::load()?;
    init_tracing(&config.logging.filter);

    let pricing = PricingEngine::new(config.business_rules.pricing_config()?);
    tracing::info!(
        shipping_rate_per_kg = %pricing.config().shipping_rate_per_kg,
        "Starting Tally checkout demo"
    );

    run_demo(pricing, Arc::new(StdoutNotifier))
}
