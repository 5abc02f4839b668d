use crate::app_config::{AppConfig, Environment};
use crate::economics::DEFAULT_VOLUMETRIC_DIVISOR;
use crate::products::ShippingMethod;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a valid config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_method = |var: &str, default: &str| -> Result<ShippingMethod, ConfigError> {
        or_default(var, default)
            .parse::<ShippingMethod>()
            .map_err(|reason| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason,
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a finite non-negative number, got {raw}"),
            })
        }
    };

    let env = parse_environment(&or_default("SELLERDESK_ENV", "development"))?;
    let log_level = or_default("SELLERDESK_LOG_LEVEL", "info");

    let import_shipping_method = parse_method("SELLERDESK_IMPORT_SHIPPING_METHOD", "sea")?;
    let feed_shipping_method = parse_method("SELLERDESK_FEED_SHIPPING_METHOD", "air")?;

    let divisor_default = DEFAULT_VOLUMETRIC_DIVISOR.to_string();
    let volumetric_divisor = parse_f64("SELLERDESK_VOLUMETRIC_DIVISOR", &divisor_default)?;
    if volumetric_divisor <= 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SELLERDESK_VOLUMETRIC_DIVISOR".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let freight_rate_per_kg = parse_f64("SELLERDESK_FREIGHT_RATE_PER_KG", "0")?;

    Ok(AppConfig {
        env,
        log_level,
        import_shipping_method,
        feed_shipping_method,
        volumetric_divisor,
        freight_rate_per_kg,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SELLERDESK_ENV".to_string(),
            reason: format!("expected development, test or production, got {other}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
