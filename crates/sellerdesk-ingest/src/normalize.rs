//! Normalization from arbitrary JSON objects to [`sellerdesk_core::Product`].
//!
//! Key lookup is delegated to [`crate::resolve`] and value conversion to
//! [`crate::coerce`]; this module owns the per-field candidate lists and the
//! defaults. Normalization is total: a missing or malformed field is
//! replaced by its default and never fails the record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use sellerdesk_core::{
    AppConfig, Currency, Financials, Logistics, Product, ProductStatus, ShippingMethod,
    PENDING_SHIPMENT, UNKNOWN_SKU, UNNAMED_PRODUCT,
};

use crate::coerce::{coerce_count, coerce_list, coerce_non_negative, coerce_text};
use crate::resolve::{resolve_field, RawRecord};

// ---------------------------------------------------------------------------
// Candidate keys, most specific first
// ---------------------------------------------------------------------------

const ID_KEYS: &[&str] = &[
    "id",
    "productId",
    "product_id",
    "uuid",
    "ID",
    "编号",
    "产品ID",
    "商品ID",
];
const SKU_KEYS: &[&str] = &[
    "sku",
    "SKU",
    "skuCode",
    "sku_code",
    "SKU编码",
    "SKU码",
    "货号",
    "商品编码",
];
const NAME_KEYS: &[&str] = &[
    "name",
    "title",
    "productName",
    "product_name",
    "中文名称",
    "产品名称",
    "商品名称",
    "名称",
    "品名",
];
const DESCRIPTION_KEYS: &[&str] = &[
    "description",
    "desc",
    "body",
    "描述",
    "产品描述",
    "商品描述",
];
const CATEGORY_KEYS: &[&str] = &[
    "category",
    "productType",
    "product_type",
    "类目",
    "分类",
    "品类",
];
const PRICE_KEYS: &[&str] = &[
    "price",
    "Price",
    "unitPrice",
    "unit_price",
    "售价",
    "销售价",
    "价格",
    "单价",
];
const CURRENCY_KEYS: &[&str] = &["currency", "currencyCode", "currency_code", "币种", "货币"];
const STOCK_KEYS: &[&str] = &[
    "stock",
    "inventory",
    "quantity",
    "qty",
    "stockQty",
    "库存",
    "库存数量",
    "数量",
];
const STATUS_KEYS: &[&str] = &[
    "status",
    "listingStatus",
    "listing_status",
    "状态",
    "商品状态",
];
const IMAGE_KEYS: &[&str] = &[
    "imageUrl",
    "image_url",
    "image",
    "img",
    "thumbnail",
    "图片",
    "图片链接",
    "主图",
];
const MARKETPLACE_KEYS: &[&str] = &[
    "marketplaces",
    "marketplace",
    "platforms",
    "channels",
    "平台",
    "站点",
    "销售平台",
];
const NOTE_KEYS: &[&str] = &["note", "notes", "remark", "remarks", "备注"];
const SUPPLIER_KEYS: &[&str] = &["supplier", "vendor", "factory", "供应商", "厂家"];

const FINANCIALS_KEYS: &[&str] = &["financials", "finance", "财务"];
const COST_OF_GOODS_KEYS: &[&str] = &[
    "costOfGoods",
    "cost_of_goods",
    "cogs",
    "purchasePrice",
    "cost",
    "采购价",
    "采购成本",
    "成本",
    "进货价",
];
const SHIPPING_COST_KEYS: &[&str] = &[
    "shippingCost",
    "shipping_cost",
    "freight",
    "头程运费",
    "运费",
];
const OTHER_COST_KEYS: &[&str] = &["otherCost", "other_cost", "miscCost", "其他成本", "杂费"];
const SELLING_PRICE_KEYS: &[&str] = &["sellingPrice", "selling_price", "listPrice", "销售价格"];
const PLATFORM_FEE_KEYS: &[&str] = &[
    "platformFee",
    "platform_fee",
    "commission",
    "referralFee",
    "佣金",
    "平台费",
    "平台佣金",
];
const AD_COST_KEYS: &[&str] = &[
    "adCost",
    "ad_cost",
    "adSpend",
    "advertising",
    "ppc",
    "广告费",
    "广告成本",
];

const LOGISTICS_KEYS: &[&str] = &["logistics", "shipment", "shipping", "物流"];
const METHOD_KEYS: &[&str] = &[
    "method",
    "shippingMethod",
    "shipping_method",
    "transport",
    "运输方式",
    "物流方式",
];
const CARRIER_KEYS: &[&str] = &[
    "carrier",
    "forwarder",
    "logisticsProvider",
    "承运商",
    "物流商",
    "货代",
];
const TRACKING_KEYS: &[&str] = &[
    "trackingNo",
    "tracking_no",
    "trackingNumber",
    "tracking",
    "运单号",
    "物流单号",
    "追踪号",
];
/// Inside a nested logistics object, plain `status` is the shipment status.
const NESTED_LOGISTICS_STATUS_KEYS: &[&str] = &[
    "status",
    "logisticsStatus",
    "shipmentStatus",
    "物流状态",
];
/// At the top level, plain `status` belongs to the listing.
const FLAT_LOGISTICS_STATUS_KEYS: &[&str] = &["logisticsStatus", "shipmentStatus", "物流状态"];
const ORIGIN_KEYS: &[&str] = &["origin", "shipFrom", "ship_from", "起运地", "发货地"];
const DESTINATION_KEYS: &[&str] = &[
    "destination",
    "shipTo",
    "ship_to",
    "destinationWarehouse",
    "目的地",
    "目的仓",
];
const ETD_KEYS: &[&str] = &["etd", "departureDate", "预计离港", "发货日期"];
const ETA_KEYS: &[&str] = &["eta", "arrivalDate", "预计到港", "预计到达"];

const UNIT_WEIGHT_KEYS: &[&str] = &[
    "unitWeight",
    "unit_weight",
    "weight",
    "单品重量",
    "重量",
];
const BOX_LENGTH_KEYS: &[&str] = &[
    "boxLength",
    "box_length",
    "cartonLength",
    "箱长",
    "外箱长",
];
const BOX_WIDTH_KEYS: &[&str] = &["boxWidth", "box_width", "cartonWidth", "箱宽", "外箱宽"];
const BOX_HEIGHT_KEYS: &[&str] = &[
    "boxHeight",
    "box_height",
    "cartonHeight",
    "箱高",
    "外箱高",
];
const BOX_WEIGHT_KEYS: &[&str] = &[
    "boxWeight",
    "box_weight",
    "cartonWeight",
    "grossWeight",
    "箱重",
    "毛重",
    "整箱重量",
];
const ITEMS_PER_BOX_KEYS: &[&str] = &[
    "itemsPerBox",
    "items_per_box",
    "unitsPerCarton",
    "pcsPerCarton",
    "装箱数",
    "每箱数量",
];
const RESTOCK_CARTONS_KEYS: &[&str] = &[
    "restockCartons",
    "restock_cartons",
    "cartons",
    "补货箱数",
    "箱数",
];
const INBOUND_ID_KEYS: &[&str] = &[
    "inboundId",
    "inbound_id",
    "shipmentId",
    "fbaShipmentId",
    "入库单号",
    "货件号",
];
const DAILY_SALES_KEYS: &[&str] = &[
    "dailySales",
    "daily_sales",
    "avgDailySales",
    "salesPerDay",
    "日均销量",
    "日销量",
];

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Where a batch of raw records came from. Each source has its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// A `.json` file uploaded through the import dialog.
    FileImport,
    /// A live-feed message or a product form save.
    LiveFeed,
}

/// Per-call defaults for fields the source payload leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub default_method: ShippingMethod,
    pub default_category: String,
}

impl NormalizeOptions {
    /// Defaults for bulk file imports: sea freight, `"General"` category.
    #[must_use]
    pub fn file_import() -> Self {
        Self {
            default_method: ShippingMethod::Sea,
            default_category: "General".to_string(),
        }
    }

    /// Defaults for live-feed messages and form saves: air freight,
    /// `"Uncategorized"` category.
    #[must_use]
    pub fn live_feed() -> Self {
        Self {
            default_method: ShippingMethod::Air,
            default_category: "Uncategorized".to_string(),
        }
    }

    /// Source defaults with the shipping method taken from configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig, source: RecordSource) -> Self {
        match source {
            RecordSource::FileImport => Self {
                default_method: config.import_shipping_method,
                ..Self::file_import()
            },
            RecordSource::LiveFeed => Self {
                default_method: config.feed_shipping_method,
                ..Self::live_feed()
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalizes one raw JSON value into a [`Product`], stamped with the current time.
///
/// Non-object values normalize as an empty object.
#[must_use]
pub fn normalize_record(raw: &Value, opts: &NormalizeOptions) -> Product {
    normalize_record_at(raw, opts, Utc::now())
}

/// [`normalize_record`] with an explicit normalization timestamp.
#[must_use]
pub fn normalize_record_at(raw: &Value, opts: &NormalizeOptions, now: DateTime<Utc>) -> Product {
    build_product(raw.as_object(), opts, now)
}

/// Normalizes an already-unwrapped raw object. A missing object yields a
/// fully defaulted record.
#[must_use]
pub fn normalize_map(raw: Option<&RawRecord>, opts: &NormalizeOptions) -> Product {
    build_product(raw, opts, Utc::now())
}

fn build_product(raw: Option<&RawRecord>, opts: &NormalizeOptions, now: DateTime<Utc>) -> Product {
    let text = |keys: &[&str]| coerce_text(resolve_field(raw, keys));
    let amount = |keys: &[&str]| coerce_non_negative(resolve_field(raw, keys));
    let count = |keys: &[&str]| coerce_count(resolve_field(raw, keys));

    let price = amount(PRICE_KEYS);

    let id = text(ID_KEYS).unwrap_or_else(|| {
        let id = Uuid::new_v4().to_string();
        tracing::debug!(%id, "record has no identity field; assigned a fresh id");
        id
    });

    let status = text(STATUS_KEYS).map_or(ProductStatus::Draft, |label| {
        ProductStatus::from_label(&label).unwrap_or_else(|| {
            tracing::debug!(%label, "unrecognized product status; defaulting to Draft");
            ProductStatus::Draft
        })
    });

    let currency = text(CURRENCY_KEYS).map_or(Currency::Usd, |label| {
        Currency::from_label(&label).unwrap_or_else(|| {
            tracing::debug!(%label, "unrecognized currency; defaulting to USD");
            Currency::Usd
        })
    });

    Product {
        id,
        sku: text(SKU_KEYS).unwrap_or_else(|| UNKNOWN_SKU.to_string()),
        name: text(NAME_KEYS).unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
        description: text(DESCRIPTION_KEYS).unwrap_or_default(),
        category: text(CATEGORY_KEYS).unwrap_or_else(|| opts.default_category.clone()),
        price,
        currency,
        stock: count(STOCK_KEYS),
        status,
        image_url: text(IMAGE_KEYS).unwrap_or_default(),
        marketplaces: coerce_list(resolve_field(raw, MARKETPLACE_KEYS)),
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        note: text(NOTE_KEYS).unwrap_or_default(),
        supplier: text(SUPPLIER_KEYS).unwrap_or_default(),
        financials: build_financials(raw, price),
        logistics: build_logistics(raw, opts.default_method),
        unit_weight: amount(UNIT_WEIGHT_KEYS),
        box_length: amount(BOX_LENGTH_KEYS),
        box_width: amount(BOX_WIDTH_KEYS),
        box_height: amount(BOX_HEIGHT_KEYS),
        box_weight: amount(BOX_WEIGHT_KEYS),
        items_per_box: count(ITEMS_PER_BOX_KEYS),
        restock_cartons: count(RESTOCK_CARTONS_KEYS),
        inbound_id: text(INBOUND_ID_KEYS).unwrap_or_default(),
        daily_sales: amount(DAILY_SALES_KEYS),
    }
}

/// Financial fields come from a nested `financials` object when present,
/// otherwise from flat top-level columns.
///
/// A missing selling price falls back to `price` so margin calculations
/// never compare against a spurious zero.
fn build_financials(raw: Option<&RawRecord>, price: f64) -> Financials {
    let nested = nested_object(raw, FINANCIALS_KEYS);
    let amount = |keys: &[&str]| coerce_non_negative(resolve_layered(nested, raw, keys));

    Financials {
        cost_of_goods: amount(COST_OF_GOODS_KEYS),
        shipping_cost: amount(SHIPPING_COST_KEYS),
        other_cost: amount(OTHER_COST_KEYS),
        selling_price: resolve_layered(nested, raw, SELLING_PRICE_KEYS)
            .map_or(price, |value| coerce_non_negative(Some(value))),
        platform_fee: amount(PLATFORM_FEE_KEYS),
        ad_cost: amount(AD_COST_KEYS),
    }
}

fn build_logistics(raw: Option<&RawRecord>, default_method: ShippingMethod) -> Logistics {
    let nested = nested_object(raw, LOGISTICS_KEYS);
    let text = |keys: &[&str]| coerce_text(resolve_layered(nested, raw, keys));

    let method = text(METHOD_KEYS).map_or(default_method, |label| {
        ShippingMethod::from_label(&label).unwrap_or_else(|| {
            tracing::debug!(%label, %default_method, "unrecognized shipping method; using default");
            default_method
        })
    });

    // Plain `status` is only a shipment status inside the nested object.
    let status = coerce_text(resolve_field(nested, NESTED_LOGISTICS_STATUS_KEYS))
        .or_else(|| coerce_text(resolve_field(raw, FLAT_LOGISTICS_STATUS_KEYS)))
        .unwrap_or_else(|| PENDING_SHIPMENT.to_string());

    Logistics {
        method,
        carrier: text(CARRIER_KEYS).unwrap_or_default(),
        tracking_no: text(TRACKING_KEYS).unwrap_or_default(),
        status,
        origin: text(ORIGIN_KEYS).unwrap_or_default(),
        destination: text(DESTINATION_KEYS).unwrap_or_default(),
        etd: text(ETD_KEYS).unwrap_or_default(),
        eta: text(ETA_KEYS).unwrap_or_default(),
    }
}

fn nested_object<'a>(raw: Option<&'a RawRecord>, keys: &[&str]) -> Option<&'a RawRecord> {
    resolve_field(raw, keys).and_then(Value::as_object)
}

/// Resolves in the nested object first, then in the enclosing record.
fn resolve_layered<'a>(
    nested: Option<&'a RawRecord>,
    raw: Option<&'a RawRecord>,
    keys: &[&str],
) -> Option<&'a Value> {
    resolve_field(nested, keys).or_else(|| resolve_field(raw, keys))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
