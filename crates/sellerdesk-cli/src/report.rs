use serde::Serialize;

use sellerdesk_core::{
    chargeable_weight_kg, days_of_stock, freight_cost_per_unit, restock_units, Product,
    UnitEconomics,
};

/// One line of `sellerdesk economics` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicsRow<'a> {
    pub id: &'a str,
    pub sku: &'a str,
    pub name: &'a str,
    /// `false` when the sku is the `"N/A"` placeholder.
    pub has_sku: bool,
    pub shipment_pending: bool,
    #[serde(flatten)]
    pub economics: UnitEconomics,
    pub chargeable_weight_kg: f64,
    pub freight_per_unit: f64,
    /// `null` when the product has no recorded daily sales.
    pub days_of_stock: Option<f64>,
    pub restock_units: u64,
}

impl<'a> EconomicsRow<'a> {
    #[must_use]
    pub fn build(product: &'a Product, divisor: f64, rate_per_kg: f64) -> Self {
        Self {
            id: &product.id,
            sku: &product.sku,
            name: &product.name,
            has_sku: product.has_sku(),
            shipment_pending: product.is_shipment_pending(),
            economics: UnitEconomics::from_financials(&product.financials),
            chargeable_weight_kg: chargeable_weight_kg(product, divisor),
            freight_per_unit: freight_cost_per_unit(product, divisor, rate_per_kg),
            days_of_stock: days_of_stock(product),
            restock_units: restock_units(product),
        }
    }
}
