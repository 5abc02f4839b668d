use serde_json::json;

use sellerdesk_core::{Environment, ShippingMethod, DEFAULT_VOLUMETRIC_DIVISOR};
use sellerdesk_ingest::normalize_record;

use super::*;

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        import_shipping_method: ShippingMethod::Sea,
        feed_shipping_method: ShippingMethod::Air,
        volumetric_divisor: DEFAULT_VOLUMETRIC_DIVISOR,
        freight_rate_per_kg: 0.0,
    }
}

#[test]
fn parses_normalize_with_defaults() {
    let cli = Cli::try_parse_from(["sellerdesk", "normalize"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Normalize {
            ref input,
            source: Source::Import,
            pretty: false
        } if input == "-"
    ));
}

#[test]
fn parses_normalize_feed_pretty() {
    let cli = Cli::try_parse_from([
        "sellerdesk",
        "normalize",
        "catalog.json",
        "--source",
        "feed",
        "--pretty",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Normalize {
            ref input,
            source: Source::Feed,
            pretty: true
        } if input == "catalog.json"
    ));
}

#[test]
fn parses_economics_rate() {
    let cli = Cli::try_parse_from(["sellerdesk", "economics", "rows.json", "--rate-per-kg", "4.5"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Economics {
            rate_per_kg: Some(rate),
            ..
        } if (rate - 4.5).abs() < f64::EPSILON
    ));
}

#[test]
fn rejects_unknown_source() {
    let result = Cli::try_parse_from(["sellerdesk", "normalize", "--source", "socket"]);
    assert!(result.is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["sellerdesk"]).is_err());
}

#[test]
fn source_maps_to_record_source() {
    assert_eq!(RecordSource::from(Source::Import), RecordSource::FileImport);
    assert_eq!(RecordSource::from(Source::Feed), RecordSource::LiveFeed);
}

#[test]
fn read_input_reports_missing_file() {
    let err = read_input("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn economics_row_serializes_flat() {
    let config = test_config();
    let opts = NormalizeOptions::from_config(&config, RecordSource::FileImport);
    let product = normalize_record(
        &json!({
            "id": "p-1",
            "sku": "MAT-01",
            "price": 20,
            "financials": { "costOfGoods": 5, "platformFee": 3 },
            "boxLength": 60, "boxWidth": 40, "boxHeight": 50, "boxWeight": 15,
            "itemsPerBox": 20, "stock": 40, "dailySales": 4, "restockCartons": 2
        }),
        &opts,
    );

    let row = report::EconomicsRow::build(&product, config.volumetric_divisor, 3.0);
    let value = serde_json::to_value(&row).expect("serialization failed");

    assert_eq!(value["id"], "p-1");
    assert_eq!(value["sku"], "MAT-01");
    assert_eq!(value["hasSku"], true);
    assert_eq!(value["shipmentPending"], true);
    assert_eq!(value["totalCost"], 8.0);
    assert_eq!(value["profit"], 12.0);
    assert_eq!(value["marginPct"], 60.0);
    assert_eq!(value["chargeableWeightKg"], 20.0);
    assert_eq!(value["freightPerUnit"], 3.0);
    assert_eq!(value["daysOfStock"], 10.0);
    assert_eq!(value["restockUnits"], 40);
}

#[test]
fn economics_row_days_of_stock_null_without_sales() {
    let product = normalize_record(&json!({ "sku": "X" }), &NormalizeOptions::file_import());
    let row = report::EconomicsRow::build(&product, DEFAULT_VOLUMETRIC_DIVISOR, 0.0);
    let value = serde_json::to_value(&row).expect("serialization failed");
    assert!(value["daysOfStock"].is_null());
    assert_eq!(value["freightPerUnit"], 0.0);
}

#[test]
fn economics_row_flags_missing_sku_and_shipped_status() {
    let product = normalize_record(
        &json!({ "name": "Desk lamp", "logistics": { "status": "Delivered" } }),
        &NormalizeOptions::live_feed(),
    );
    let row = report::EconomicsRow::build(&product, DEFAULT_VOLUMETRIC_DIVISOR, 0.0);
    let value = serde_json::to_value(&row).expect("serialization failed");
    assert_eq!(value["sku"], "N/A");
    assert_eq!(value["hasSku"], false);
    assert_eq!(value["shipmentPending"], false);
}
