pub mod app_config;

pub use app_config::{BusinessRules, Config, LoggingConfig};
