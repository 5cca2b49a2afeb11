use serde::Deserialize;
use std::env;
use std::path::Path;
use tally_catalog::{PricingConfig, PricingError};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Currency units charged per kilogram shipped
    #[serde(default = "default_shipping_rate")]
    pub shipping_rate_per_kg: f64,
}

fn default_shipping_rate() -> f64 { 30.0 }

impl BusinessRules {
    pub fn pricing_config(&self) -> Result<PricingConfig, PricingError> {
        PricingConfig::from_rate_per_kg(self.shipping_rate_per_kg)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Layer defaults, `<dir>/default`, `<dir>/<run_mode>`, `<dir>/local`
    /// and `TALLY_*` environment variables, later sources winning.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("business_rules.shipping_rate_per_kg", default_shipping_rate())?
            .set_default("logging.filter", default_filter())?
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(run_mode)).required(false))
            // Not checked in
            .add_source(config::File::from(dir.join("local")).required(false))
            // Eg. `TALLY_BUSINESS_RULES__SHIPPING_RATE_PER_KG=45`
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let config = Config::load_from(Path::new("does-not-exist"), "test").unwrap();

        assert_eq!(config.business_rules.shipping_rate_per_kg, 30.0);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_run_mode_overrides_default() {
        let dir = env::temp_dir().join(format!("tally-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("default.toml"),
            "[business_rules]\nshipping_rate_per_kg = 40.0\n",
        )
        .unwrap();
        fs::write(dir.join("staging.toml"), "[logging]\nfilter = \"tally=debug\"\n").unwrap();

        let config = Config::load_from(&dir, "staging").unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(config.business_rules.shipping_rate_per_kg, 40.0);
        assert_eq!(config.logging.filter, "tally=debug");

        let pricing = config.business_rules.pricing_config().unwrap();
        assert_eq!(pricing.shipping_rate_per_kg, Decimal::from(40));
    }
}
