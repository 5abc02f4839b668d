use crate::products::ShippingMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Environment {
    /// Production logs are plain text without ANSI colors.
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Freight mode assumed for records imported from uploaded files.
    pub import_shipping_method: ShippingMethod,
    /// Freight mode assumed for records arriving over the live feed or a form.
    pub feed_shipping_method: ShippingMethod,
    /// Carton volume divisor (cm³ per kg) for chargeable-weight calculations.
    pub volumetric_divisor: f64,
    pub freight_rate_per_kg: f64,
}
