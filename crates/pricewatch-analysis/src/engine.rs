//! Discrepancy detection over accumulated price records.
//!
//! The spread for an identifier is measured across its full price history,
//! not only the latest record per retailer. A discrepancy is recorded when
//! the spread percentage strictly exceeds the threshold; a spread of exactly
//! the threshold is not a discrepancy.

use thiserror::Error;

use pricewatch_core::ProductPrice;
use pricewatch_store::{PriceStore, StoreError};

/// Spread percentage above which a discrepancy is recorded (strict).
pub const DISCREPANCY_THRESHOLD_PCT: f64 = 5.0;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Min/max spread across one identifier's price records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub min: f64,
    pub max: f64,
    /// `max - min`.
    pub difference: f64,
    /// `difference / min * 100`.
    pub percentage: f64,
}

/// Outcome of measuring one identifier's records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpreadMeasurement {
    /// Fewer than two records; a spread needs at least two prices.
    TooFewRecords,
    /// The minimum price is zero (or negative), so the percentage is
    /// undefined; such groups are skipped rather than divided by zero.
    ZeroMinimum,
    Measured(Spread),
}

/// Aggregate result of one analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub identifiers_examined: usize,
    pub discrepancies_found: usize,
    pub skipped_zero_minimum: usize,
}

/// Measure the price spread across a group of records for one identifier.
///
/// Pure and order-independent: any permutation of `prices` yields the same
/// measurement.
#[must_use]
pub fn measure_spread(prices: &[ProductPrice]) -> SpreadMeasurement {
    if prices.len() < 2 {
        return SpreadMeasurement::TooFewRecords;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for price in prices {
        min = min.min(price.price_amount);
        max = max.max(price.price_amount);
    }

    if min <= 0.0 {
        return SpreadMeasurement::ZeroMinimum;
    }

    let difference = max - min;
    SpreadMeasurement::Measured(Spread {
        min,
        max,
        difference,
        percentage: difference / min * 100.0,
    })
}

/// Examine every identifier in the store and record a discrepancy for each
/// whose spread strictly exceeds `threshold_pct`.
///
/// The recorded discrepancy carries the identifier's full constituent record
/// set, so a reader can see every price that produced the spread.
///
/// # Errors
///
/// Returns [`AnalysisError`] when persisting a discrepancy fails.
pub async fn run_analysis(
    store: &PriceStore,
    threshold_pct: f64,
) -> Result<AnalysisSummary, AnalysisError> {
    let mut summary = AnalysisSummary::default();

    for product_id in store.unique_identifiers().await {
        summary.identifiers_examined += 1;
        let prices = store.prices_by_identifier(&product_id).await;

        let spread = match measure_spread(&prices) {
            SpreadMeasurement::Measured(spread) => spread,
            SpreadMeasurement::TooFewRecords => continue,
            SpreadMeasurement::ZeroMinimum => {
                tracing::warn!(%product_id, "zero minimum price, skipping spread check");
                summary.skipped_zero_minimum += 1;
                continue;
            }
        };

        if spread.percentage > threshold_pct {
            tracing::info!(
                %product_id,
                min = spread.min,
                max = spread.max,
                percentage = spread.percentage,
                "price discrepancy detected"
            );
            store
                .log_discrepancy(&product_id, prices, spread.difference, spread.percentage)
                .await?;
            summary.discrepancies_found += 1;
        } else {
            tracing::debug!(
                %product_id,
                percentage = spread.percentage,
                "spread within threshold"
            );
        }
    }

    Ok(summary)
}
