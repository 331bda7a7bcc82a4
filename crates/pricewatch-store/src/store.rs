//! File-backed append-only store for price records and discrepancies.
//!
//! Both collections are held fully in memory and rewritten to disk as a whole
//! JSON array on every mutation, so a crash loses at most the record being
//! written. The write happens while the interior lock is held, which makes
//! each append a single atomic serialization point under concurrent callers.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use pricewatch_core::{PriceDiscrepancy, ProductPrice};

/// File name for the price record array inside the data directory.
pub const PRICES_FILE: &str = "prices.json";
/// File name for the discrepancy record array inside the data directory.
pub const DISCREPANCIES_FILE: &str = "discrepancies.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store serialization error for {path}: {source}")]
    Serde {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

struct Collections {
    prices: Vec<ProductPrice>,
    discrepancies: Vec<PriceDiscrepancy>,
}

/// Append-only store of [`ProductPrice`] and [`PriceDiscrepancy`] records.
///
/// Constructed once at startup and passed by reference to the extraction
/// pipeline and the discrepancy engine. Records are never mutated or deleted
/// during a run.
pub struct PriceStore {
    prices_path: PathBuf,
    discrepancies_path: PathBuf,
    collections: Mutex<Collections>,
}

impl PriceStore {
    /// Open (or initialize) the store under `data_dir`.
    ///
    /// Creates the directory and empty JSON array files when absent, and
    /// loads any existing records into memory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the directory cannot be created or an
    /// existing file cannot be read or parsed.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: data_dir.display().to_string(),
                source,
            })?;

        let prices_path = data_dir.join(PRICES_FILE);
        let discrepancies_path = data_dir.join(DISCREPANCIES_FILE);

        let prices: Vec<ProductPrice> = load_or_init(&prices_path).await?;
        let discrepancies: Vec<PriceDiscrepancy> = load_or_init(&discrepancies_path).await?;

        tracing::debug!(
            prices = prices.len(),
            discrepancies = discrepancies.len(),
            dir = %data_dir.display(),
            "opened price store"
        );

        Ok(Self {
            prices_path,
            discrepancies_path,
            collections: Mutex::new(Collections {
                prices,
                discrepancies,
            }),
        })
    }

    /// Append one price record and durably persist the price collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the rewrite fails; the in-memory append is
    /// rolled back so memory and disk stay consistent.
    pub async fn add_price(&self, price: ProductPrice) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        collections.prices.push(price);
        if let Err(e) = persist(&self.prices_path, &collections.prices).await {
            collections.prices.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Construct a [`PriceDiscrepancy`] with a generated `detected_at`,
    /// append it, and durably persist the discrepancy collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the rewrite fails; the in-memory append is
    /// rolled back.
    pub async fn log_discrepancy(
        &self,
        product_id: &str,
        prices: Vec<ProductPrice>,
        price_difference: f64,
        percentage_difference: f64,
    ) -> Result<(), StoreError> {
        let discrepancy = PriceDiscrepancy {
            product_id: product_id.to_string(),
            constituent_prices: prices,
            price_difference,
            percentage_difference,
            detected_at: Utc::now(),
        };

        let mut collections = self.collections.lock().await;
        collections.discrepancies.push(discrepancy);
        if let Err(e) = persist(&self.discrepancies_path, &collections.discrepancies).await {
            collections.discrepancies.pop();
            return Err(e);
        }
        Ok(())
    }

    /// All price records for `product_id`, in insertion order.
    pub async fn prices_by_identifier(&self, product_id: &str) -> Vec<ProductPrice> {
        let collections = self.collections.lock().await;
        collections
            .prices
            .iter()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect()
    }

    /// Every distinct product identifier present, in first-seen order.
    pub async fn unique_identifiers(&self) -> Vec<String> {
        let collections = self.collections.lock().await;
        let mut seen = HashSet::new();
        collections
            .prices
            .iter()
            .filter(|p| seen.insert(p.product_id.clone()))
            .map(|p| p.product_id.clone())
            .collect()
    }

    /// Total number of stored price records.
    pub async fn price_count(&self) -> usize {
        self.collections.lock().await.prices.len()
    }

    /// All recorded discrepancies, in insertion order.
    pub async fn discrepancies(&self) -> Vec<PriceDiscrepancy> {
        self.collections.lock().await.discrepancies.clone()
    }

    /// Recorded discrepancies for `product_id`, in insertion order.
    pub async fn discrepancies_by_identifier(&self, product_id: &str) -> Vec<PriceDiscrepancy> {
        let collections = self.collections.lock().await;
        collections
            .discrepancies
            .iter()
            .filter(|d| d.product_id == product_id)
            .cloned()
            .collect()
    }
}

async fn load_or_init<T>(path: &Path) -> Result<Vec<T>, StoreError>
where
    T: serde::de::DeserializeOwned + serde::Serialize,
{
    if path.exists() {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
            path: path.display().to_string(),
            source,
        })
    } else {
        let empty: Vec<T> = Vec::new();
        persist(path, &empty).await?;
        Ok(empty)
    }
}

async fn persist<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serde {
        path: path.display().to_string(),
        source,
    })?;
    tokio::fs::write(path, body)
        .await
        .map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
}
