use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::retailer::Retailer;

/// Sentinel product name used when name extraction fails. Price extraction
/// can still succeed for such a record.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// One observed price for one product at one retailer.
///
/// A `ProductPrice` is only ever constructed after a numeric price has been
/// parsed from the page; there are no partial (name-only) records. Records
/// are append-only for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPrice {
    /// Opaque retailer-agnostic catalog key (UPC or SKU depending on the
    /// deployment). Never parsed or validated beyond non-emptiness.
    pub product_id: String,
    pub retailer: Retailer,
    /// Non-negative price in base currency units (dollars, fractional cents
    /// allowed).
    pub price_amount: f64,
    /// ISO-like currency code. Fixed to `"USD"` in this deployment but kept
    /// as a field for forward compatibility.
    pub currency: String,
    /// Best-effort display name; [`UNKNOWN_PRODUCT_NAME`] when extraction of
    /// the name failed.
    pub product_name: String,
    /// The resolved product-detail page URL that was actually scraped, not
    /// the search/listing URL.
    pub source_url: String,
    pub captured_at: DateTime<Utc>,
}

/// A flagged cross-retailer price spread for one product identifier.
///
/// Created only when at least two [`ProductPrice`] records share a
/// `product_id` and the percentage spread strictly exceeds the reporting
/// threshold. References the full set of records considered, not just the
/// min/max pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceDiscrepancy {
    pub product_id: String,
    /// Every record considered for this identifier at computation time.
    pub constituent_prices: Vec<ProductPrice>,
    /// `max - min`, in the same currency unit as the inputs.
    pub price_difference: f64,
    /// `price_difference / min * 100`.
    pub percentage_difference: f64,
    pub detected_at: DateTime<Utc>,
}
