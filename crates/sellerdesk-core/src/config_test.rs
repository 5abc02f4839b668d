use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SELLERDESK_ENV"));
}

#[test]
fn build_app_config_defaults_from_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.import_shipping_method, ShippingMethod::Sea);
    assert_eq!(cfg.feed_shipping_method, ShippingMethod::Air);
    assert_eq!(cfg.volumetric_divisor, 6000.0);
    assert_eq!(cfg.freight_rate_per_kg, 0.0);
}

#[test]
fn build_app_config_shipping_method_overrides() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_IMPORT_SHIPPING_METHOD", "Rail");
    map.insert("SELLERDESK_FEED_SHIPPING_METHOD", "sea");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.import_shipping_method, ShippingMethod::Rail);
    assert_eq!(cfg.feed_shipping_method, ShippingMethod::Sea);
}

#[test]
fn build_app_config_shipping_method_invalid() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_FEED_SHIPPING_METHOD", "teleport");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SELLERDESK_FEED_SHIPPING_METHOD"
        ),
        "expected InvalidEnvVar(SELLERDESK_FEED_SHIPPING_METHOD), got: {result:?}"
    );
}

#[test]
fn build_app_config_volumetric_divisor_override() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_VOLUMETRIC_DIVISOR", "5000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.volumetric_divisor, 5000.0);
}

#[test]
fn build_app_config_volumetric_divisor_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_VOLUMETRIC_DIVISOR", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SELLERDESK_VOLUMETRIC_DIVISOR"
        ),
        "expected InvalidEnvVar(SELLERDESK_VOLUMETRIC_DIVISOR), got: {result:?}"
    );
}

#[test]
fn build_app_config_freight_rate_invalid() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_FREIGHT_RATE_PER_KG", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SELLERDESK_FREIGHT_RATE_PER_KG"
        ),
        "expected InvalidEnvVar(SELLERDESK_FREIGHT_RATE_PER_KG), got: {result:?}"
    );
}

#[test]
fn build_app_config_freight_rate_negative_rejected() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_FREIGHT_RATE_PER_KG", "-2.5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_log_level_override() {
    let mut map = HashMap::new();
    map.insert("SELLERDESK_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}
