pub mod app_config;
pub mod config;
pub mod economics;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use economics::{
    chargeable_weight_kg, days_of_stock, freight_cost_per_unit, restock_units, UnitEconomics,
    DEFAULT_VOLUMETRIC_DIVISOR,
};
pub use products::{
    Currency, Financials, Logistics, Product, ProductStatus, ShippingMethod, PENDING_SHIPMENT,
    UNKNOWN_SKU, UNNAMED_PRODUCT,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
