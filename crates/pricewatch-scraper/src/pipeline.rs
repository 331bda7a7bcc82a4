//! Per-invocation pipeline: drive the extraction protocol, persist the
//! record, and absorb every fault so sibling invocations keep running.

use std::time::Duration;

use crate::extract::{extract_price, ExtractionTarget, FailureReason, Outcome};
use crate::page::NavigableDocument;
use crate::retailers::RetailerSpec;
use pricewatch_store::PriceStore;

/// How a single (identifier, retailer) invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// A price record was extracted and durably persisted.
    Persisted,
    /// No record was produced; the run continues regardless.
    Skipped(SkipReason),
}

/// Why an invocation produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The retailer reported no results for the identifier.
    NoResults,
    /// An extraction defect partway through the protocol.
    Extraction(FailureReason),
    /// The page capability faulted (network, selector, evaluation).
    PageFault,
    /// The record was extracted but persisting it failed.
    StoreFault,
}

/// Run one invocation to its terminal state.
///
/// This function never returns an error: every fault is logged and folded
/// into a [`Terminal::Skipped`], which is what isolates invocations from one
/// another.
pub async fn run_extraction<P: NavigableDocument>(
    spec: &RetailerSpec,
    target: &ExtractionTarget,
    page: &mut P,
    store: &PriceStore,
    wait_timeout: Duration,
) -> Terminal {
    let outcome = match extract_price(spec, target, page, wait_timeout).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                retailer = %spec.retailer,
                product_id = %target.product_id,
                error = %e,
                "page fault during extraction"
            );
            return Terminal::Skipped(SkipReason::PageFault);
        }
    };

    let price = match outcome {
        Outcome::Extracted(price) => price,
        Outcome::NoResults => {
            tracing::info!(
                retailer = %spec.retailer,
                product_id = %target.product_id,
                "no results for product"
            );
            return Terminal::Skipped(SkipReason::NoResults);
        }
        Outcome::Failed(reason) => {
            tracing::warn!(
                retailer = %spec.retailer,
                product_id = %target.product_id,
                %reason,
                "extraction failed"
            );
            return Terminal::Skipped(SkipReason::Extraction(reason));
        }
    };

    tracing::info!(
        retailer = %spec.retailer,
        product_id = %price.product_id,
        price = price.price_amount,
        name = %price.product_name,
        "extracted price"
    );

    match store.add_price(price).await {
        Ok(()) => Terminal::Persisted,
        Err(e) => {
            tracing::error!(
                retailer = %spec.retailer,
                product_id = %target.product_id,
                error = %e,
                "failed to persist price record"
            );
            Terminal::Skipped(SkipReason::StoreFault)
        }
    }
}
