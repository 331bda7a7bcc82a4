use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One product to track across retailers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Human-readable title used as the retailer search query.
    pub title: String,
    /// Opaque identifier correlating the same physical product across
    /// retailers. Historical config files name this `upc` or `sku`; both are
    /// accepted and treated identically.
    #[serde(alias = "upc", alias = "sku")]
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
struct ProductsFile {
    products: Vec<ProductEntry>,
}

#[derive(Debug, Error)]
pub enum ProductsError {
    #[error("failed to read products file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid products file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the product list from a JSON configuration file of the shape
/// `{ "products": [ { "title": ..., "product_id": ... }, ... ] }`.
///
/// A missing file is not an error: a small built-in demo list is returned so
/// a fresh checkout can run end to end.
///
/// # Errors
///
/// Returns [`ProductsError`] when the file exists but cannot be read or does
/// not parse.
pub fn load_products(path: &Path) -> Result<Vec<ProductEntry>, ProductsError> {
    if !path.exists() {
        return Ok(default_products());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ProductsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file: ProductsFile = serde_json::from_str(&raw).map_err(|source| ProductsError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(file.products)
}

fn default_products() -> Vec<ProductEntry> {
    let entries = [
        ("Apple iPhone 13 Pro", "190199380356"),
        ("Samsung Galaxy S21", "887276559483"),
        ("Sony PlayStation 5", "711719541028"),
        ("Xbox Series X", "889842640809"),
        ("Apple Watch Series 7", "194252058787"),
    ];
    entries
        .into_iter()
        .map(|(title, product_id)| ProductEntry {
            title: title.to_string(),
            product_id: product_id.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let products = load_products(Path::new("/nonexistent/products.json")).unwrap();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].product_id, "190199380356");
    }

    #[test]
    fn parses_product_id_field() {
        let file: ProductsFile = serde_json::from_str(
            r#"{"products": [{"title": "Sony WH-1000XM5", "product_id": "027242923408"}]}"#,
        )
        .unwrap();
        assert_eq!(file.products[0].product_id, "027242923408");
    }

    #[test]
    fn upc_and_sku_aliases_are_accepted() {
        let upc: ProductsFile = serde_json::from_str(
            r#"{"products": [{"title": "A", "upc": "111"}]}"#,
        )
        .unwrap();
        assert_eq!(upc.products[0].product_id, "111");

        let sku: ProductsFile = serde_json::from_str(
            r#"{"products": [{"title": "B", "sku": "222"}]}"#,
        )
        .unwrap();
        assert_eq!(sku.products[0].product_id, "222");
    }
}
