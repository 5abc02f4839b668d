use serde::{Deserialize, Serialize};

/// Placeholder SKU for records that arrive without one.
pub const UNKNOWN_SKU: &str = "N/A";

/// Placeholder display name for records that arrive without one.
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// Logistics status for shipments that have no carrier status yet.
pub const PENDING_SHIPMENT: &str = "Pending";

/// Lifecycle tag of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

impl ProductStatus {
    /// Lenient label lookup used when reading uploaded data.
    ///
    /// Accepts English labels in any case plus the Chinese labels sellers use
    /// in exported spreadsheets. Returns `None` for anything else so the
    /// caller can apply its own default.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "draft" | "草稿" | "待上架" => Some(Self::Draft),
            "active" | "live" | "在售" | "上架" | "已上架" => Some(Self::Active),
            "archived" | "inactive" | "归档" | "已归档" | "下架" | "已下架" => {
                Some(Self::Archived)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Draft => write!(f, "Draft"),
            ProductStatus::Active => write!(f, "Active"),
            ProductStatus::Archived => write!(f, "Archived"),
        }
    }
}

/// ISO 4217 currency code of a listing price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Cny,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

impl Currency {
    /// Lenient code lookup. `RMB` and `人民币` map to [`Currency::Cny`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "USD" | "US$" | "美元" => Some(Self::Usd),
            "CNY" | "RMB" | "人民币" => Some(Self::Cny),
            "EUR" | "€" | "欧元" => Some(Self::Eur),
            "GBP" | "£" | "英镑" => Some(Self::Gbp),
            "JPY" | "日元" => Some(Self::Jpy),
            "CAD" => Some(Self::Cad),
            "AUD" => Some(Self::Aud),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Cny => "CNY",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        };
        f.write_str(code)
    }
}

/// Freight mode for first-leg shipping to the marketplace warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    Air,
    Sea,
    Rail,
}

impl ShippingMethod {
    /// Lenient label lookup for uploaded data; see [`std::str::FromStr`] for
    /// the strict form used by configuration.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "air" | "air freight" | "空运" => Some(Self::Air),
            "sea" | "ocean" | "sea freight" | "海运" => Some(Self::Sea),
            "rail" | "train" | "铁路" | "铁运" | "中欧班列" => Some(Self::Rail),
            _ => None,
        }
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "air" => Ok(Self::Air),
            "sea" => Ok(Self::Sea),
            "rail" => Ok(Self::Rail),
            other => Err(format!(
                "unknown shipping method \"{other}\" (expected air, sea or rail)"
            )),
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingMethod::Air => write!(f, "Air"),
            ShippingMethod::Sea => write!(f, "Sea"),
            ShippingMethod::Rail => write!(f, "Rail"),
        }
    }
}

/// Per-unit cost breakdown feeding the margin and ROI calculators.
///
/// All amounts are in the listing currency and never negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub cost_of_goods: f64,
    pub shipping_cost: f64,
    pub other_cost: f64,
    /// Falls back to the product price when the source carries no explicit
    /// selling price.
    pub selling_price: f64,
    pub platform_fee: f64,
    pub ad_cost: f64,
}

/// First-leg shipment tracking for a product's current inbound batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    pub method: ShippingMethod,
    pub carrier: String,
    pub tracking_no: String,
    /// Free-text carrier status; [`PENDING_SHIPMENT`] until one is known.
    pub status: String,
    pub origin: String,
    pub destination: String,
    pub etd: String,
    pub eta: String,
}

impl Logistics {
    /// An empty shipment record with the given freight mode.
    #[must_use]
    pub fn pending(method: ShippingMethod) -> Self {
        Self {
            method,
            carrier: String::new(),
            tracking_no: String::new(),
            status: PENDING_SHIPMENT.to_string(),
            origin: String::new(),
            destination: String::new(),
            etd: String::new(),
            eta: String::new(),
        }
    }
}

/// The canonical product record every dashboard module reads.
///
/// Every field is always populated. Records are only ever built by the
/// ingest normalizer, which substitutes defaults for anything the source
/// payload lacks, so downstream arithmetic can rely on plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub currency: Currency,
    pub stock: u64,
    pub status: ProductStatus,
    pub image_url: String,
    pub marketplaces: Vec<String>,
    /// RFC 3339 UTC timestamp of the normalization pass that built this record.
    pub last_updated: String,
    pub note: String,
    pub supplier: String,
    pub financials: Financials,
    pub logistics: Logistics,
    /// Unit weight in kilograms.
    pub unit_weight: f64,
    /// Carton dimensions in centimetres.
    pub box_length: f64,
    pub box_width: f64,
    pub box_height: f64,
    /// Gross carton weight in kilograms.
    pub box_weight: f64,
    pub items_per_box: u64,
    pub restock_cartons: u64,
    pub inbound_id: String,
    pub daily_sales: f64,
}

impl Product {
    /// Returns `true` when the source supplied a real SKU.
    #[must_use]
    pub fn has_sku(&self) -> bool {
        self.sku != UNKNOWN_SKU
    }

    /// Returns `true` while the inbound shipment has no carrier status.
    #[must_use]
    pub fn is_shipment_pending(&self) -> bool {
        self.logistics.status == PENDING_SHIPMENT
    }
}
