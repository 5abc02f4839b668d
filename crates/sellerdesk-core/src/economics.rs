//! Spreadsheet-style unit-economics calculators.
//!
//! These read canonical [`Product`] records and rely on every numeric field
//! being a finite, non-negative number. All functions are total: a zero
//! denominator yields `0.0` (or `None` where "no answer" is meaningful)
//! rather than `NaN` or infinity.

use serde::Serialize;

use crate::products::{Financials, Product};

/// Volumetric divisor for carton dimensions in centimetres, yielding kilograms.
/// This is the figure most air and express carriers quote.
pub const DEFAULT_VOLUMETRIC_DIVISOR: f64 = 6000.0;

/// Per-unit profit picture derived from a product's [`Financials`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitEconomics {
    /// Cost of goods plus every landed and selling cost.
    pub total_cost: f64,
    pub profit: f64,
    /// Profit as a percentage of the selling price.
    pub margin_pct: f64,
    /// Profit as a percentage of total cost.
    pub roi_pct: f64,
}

impl UnitEconomics {
    #[must_use]
    pub fn from_financials(financials: &Financials) -> Self {
        let total_cost = financials.cost_of_goods
            + financials.shipping_cost
            + financials.other_cost
            + financials.platform_fee
            + financials.ad_cost;
        let profit = financials.selling_price - total_cost;

        Self {
            total_cost,
            profit,
            margin_pct: percent_of(profit, financials.selling_price),
            roi_pct: percent_of(profit, total_cost),
        }
    }
}

/// `part / whole * 100`, or `0.0` when `whole` is not positive.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Billable weight of one carton: the greater of its gross weight and its
/// volumetric weight (`L × W × H / divisor`).
///
/// A non-positive `divisor` disables the volumetric term.
#[must_use]
pub fn chargeable_weight_kg(product: &Product, divisor: f64) -> f64 {
    let volumetric = if divisor > 0.0 {
        product.box_length * product.box_width * product.box_height / divisor
    } else {
        0.0
    };
    product.box_weight.max(volumetric)
}

/// First-leg freight cost attributed to a single unit.
///
/// Returns `0.0` when the carton quantity is unknown.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn freight_cost_per_unit(product: &Product, divisor: f64, rate_per_kg: f64) -> f64 {
    if product.items_per_box == 0 {
        return 0.0;
    }
    chargeable_weight_kg(product, divisor) * rate_per_kg / product.items_per_box as f64
}

/// How many days current stock lasts at the recorded sales velocity.
///
/// `None` when the product has no recorded daily sales.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn days_of_stock(product: &Product) -> Option<f64> {
    if product.daily_sales > 0.0 {
        Some(product.stock as f64 / product.daily_sales)
    } else {
        None
    }
}

/// Units arriving with the planned restock (cartons × units per carton).
#[must_use]
pub fn restock_units(product: &Product) -> u64 {
    product.restock_cartons.saturating_mul(product.items_per_box)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::{Currency, Logistics, ProductStatus, ShippingMethod};

    fn make_product() -> Product {
        Product {
            id: "p-1".to_string(),
            sku: "SKU-1".to_string(),
            name: "Phone Case".to_string(),
            description: String::new(),
            category: "General".to_string(),
            price: 20.0,
            currency: Currency::Usd,
            stock: 300,
            status: ProductStatus::Active,
            image_url: String::new(),
            marketplaces: Vec::new(),
            last_updated: String::new(),
            note: String::new(),
            supplier: String::new(),
            financials: Financials {
                cost_of_goods: 4.0,
                shipping_cost: 2.0,
                other_cost: 1.0,
                selling_price: 20.0,
                platform_fee: 3.0,
                ad_cost: 2.0,
            },
            logistics: Logistics::pending(ShippingMethod::Sea),
            unit_weight: 0.1,
            box_length: 60.0,
            box_width: 40.0,
            box_height: 50.0,
            box_weight: 15.0,
            items_per_box: 100,
            restock_cartons: 3,
            inbound_id: String::new(),
            daily_sales: 12.0,
        }
    }

    #[test]
    fn unit_economics_sums_costs() {
        let economics = UnitEconomics::from_financials(&make_product().financials);
        assert!((economics.total_cost - 12.0).abs() < 1e-9);
        assert!((economics.profit - 8.0).abs() < 1e-9);
        assert!((economics.margin_pct - 40.0).abs() < 1e-9);
        assert!((economics.roi_pct - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unit_economics_zero_financials_are_zero_not_nan() {
        let economics = UnitEconomics::from_financials(&Financials::default());
        assert_eq!(economics.total_cost, 0.0);
        assert_eq!(economics.profit, 0.0);
        assert_eq!(economics.margin_pct, 0.0);
        assert_eq!(economics.roi_pct, 0.0);
    }

    #[test]
    fn unit_economics_negative_profit() {
        let financials = Financials {
            cost_of_goods: 15.0,
            selling_price: 10.0,
            ..Financials::default()
        };
        let economics = UnitEconomics::from_financials(&financials);
        assert!((economics.profit + 5.0).abs() < 1e-9);
        assert!((economics.margin_pct + 50.0).abs() < 1e-9);
    }

    #[test]
    fn chargeable_weight_uses_volumetric_when_heavier() {
        // 60 × 40 × 50 / 6000 = 20 kg volumetric vs 15 kg gross.
        let product = make_product();
        let weight = chargeable_weight_kg(&product, DEFAULT_VOLUMETRIC_DIVISOR);
        assert!((weight - 20.0).abs() < 1e-9);
    }

    #[test]
    fn chargeable_weight_uses_gross_when_heavier() {
        let mut product = make_product();
        product.box_weight = 25.0;
        let weight = chargeable_weight_kg(&product, DEFAULT_VOLUMETRIC_DIVISOR);
        assert!((weight - 25.0).abs() < 1e-9);
    }

    #[test]
    fn chargeable_weight_ignores_zero_divisor() {
        let product = make_product();
        assert!((chargeable_weight_kg(&product, 0.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn freight_cost_per_unit_splits_carton_cost() {
        let product = make_product();
        let cost = freight_cost_per_unit(&product, DEFAULT_VOLUMETRIC_DIVISOR, 5.0);
        assert!((cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn freight_cost_per_unit_zero_without_carton_quantity() {
        let mut product = make_product();
        product.items_per_box = 0;
        assert_eq!(freight_cost_per_unit(&product, DEFAULT_VOLUMETRIC_DIVISOR, 5.0), 0.0);
    }

    #[test]
    fn days_of_stock_divides_by_velocity() {
        assert_eq!(days_of_stock(&make_product()), Some(25.0));
    }

    #[test]
    fn days_of_stock_none_without_sales() {
        let mut product = make_product();
        product.daily_sales = 0.0;
        assert_eq!(days_of_stock(&product), None);
    }

    #[test]
    fn restock_units_multiplies_cartons() {
        assert_eq!(restock_units(&make_product()), 300);
    }
}
