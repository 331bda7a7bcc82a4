//! The five-stage extraction driver shared by every retailer.
//!
//! One invocation covers a single (identifier, retailer) pair and runs
//! strictly sequentially: listing wait, empty-result check, candidate
//! resolution, detail-page extraction, parse-and-emit. There is no internal
//! retry; retry-on-failure belongs to the crawling runtime's request policy.

use std::time::Duration;

use chrono::Utc;

use crate::error::PageError;
use crate::page::NavigableDocument;
use crate::retailers::RetailerSpec;
use pricewatch_core::{ProductPrice, UNKNOWN_PRODUCT_NAME};

/// The (identifier, search title) pair an invocation works on.
#[derive(Debug, Clone)]
pub struct ExtractionTarget {
    pub product_id: String,
    /// Human-readable title used as the retailer search query.
    pub title: String,
}

/// Result of one extraction invocation.
#[derive(Debug)]
pub enum Outcome {
    /// A numeric price was parsed; the record is complete.
    Extracted(ProductPrice),
    /// The retailer's "no results" marker was present: this identifier is
    /// simply absent from that retailer this run.
    NoResults,
    /// An extraction defect occurred partway through the protocol.
    Failed(FailureReason),
}

/// Why an invocation failed after search results were present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No candidate listing entry yielded a resolvable detail-page URL.
    NoProductUrl,
    /// No price selector yielded any text on the detail page.
    NoPriceText,
    /// Price text was found but did not match the retailer's price pattern.
    UnparsablePrice,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::NoProductUrl => f.write_str("no product url"),
            FailureReason::NoPriceText => f.write_str("no price text"),
            FailureReason::UnparsablePrice => f.write_str("unparsable price"),
        }
    }
}

/// Run the extraction protocol against a page already positioned on the
/// retailer's search results for `target.title`.
///
/// # Errors
///
/// Returns [`PageError`] only for capability faults (network, selector,
/// evaluation failures). Every expected condition — no results, missing URL,
/// unparsable price — is an `Ok` outcome.
pub async fn extract_price<P: NavigableDocument>(
    spec: &RetailerSpec,
    target: &ExtractionTarget,
    page: &mut P,
    wait_timeout: Duration,
) -> Result<Outcome, PageError> {
    // Stage 1: listing wait. Some layouts render results without the probed
    // container, so a timeout here is not a verdict.
    if !page.wait_for(spec.results_selector, wait_timeout).await? {
        tracing::debug!(
            retailer = %spec.retailer,
            product_id = %target.product_id,
            selector = spec.results_selector,
            "results container did not appear; continuing"
        );
    }

    // Stage 2: empty-result check, before any detail-page navigation.
    if page.has_element(spec.no_results_selector).await? {
        return Ok(Outcome::NoResults);
    }

    // Stage 3: candidate resolution.
    let hrefs = page
        .candidate_hrefs(spec.candidate_selector, spec.candidate_link_selector)
        .await?;
    let index = usize::from(spec.skip_sponsored_first && hrefs.len() >= 2);
    let Some(href) = hrefs.into_iter().nth(index).flatten() else {
        return Ok(Outcome::Failed(FailureReason::NoProductUrl));
    };
    let detail_url = spec.resolve_url(&href);

    // Stage 4: detail-page extraction.
    page.navigate(&detail_url).await?;
    if !page.wait_for(spec.price_wait_selector, wait_timeout).await? {
        tracing::debug!(
            retailer = %spec.retailer,
            product_id = %target.product_id,
            "price element did not appear; trying fallback selectors"
        );
    }

    // Name extraction is never fatal, not even on a capability fault.
    let product_name = match page.text_of(spec.name_selector).await {
        Ok(Some(name)) => name,
        Ok(None) => UNKNOWN_PRODUCT_NAME.to_string(),
        Err(e) => {
            tracing::debug!(
                retailer = %spec.retailer,
                product_id = %target.product_id,
                error = %e,
                "product name extraction failed"
            );
            UNKNOWN_PRODUCT_NAME.to_string()
        }
    };

    // Ordered fallback: first selector yielding non-empty text wins, later
    // ones are never probed.
    let mut price_text = None;
    for selector in spec.price_selectors {
        if let Some(text) = page.text_of(selector).await? {
            price_text = Some(text);
            break;
        }
    }
    let Some(price_text) = price_text else {
        return Ok(Outcome::Failed(FailureReason::NoPriceText));
    };

    // Stage 5: parse and emit.
    let Some(amount) = spec.price_pattern.parse(&price_text) else {
        tracing::debug!(
            retailer = %spec.retailer,
            product_id = %target.product_id,
            text = %price_text,
            "price text did not match the retailer pattern"
        );
        return Ok(Outcome::Failed(FailureReason::UnparsablePrice));
    };

    Ok(Outcome::Extracted(ProductPrice {
        product_id: target.product_id.clone(),
        retailer: spec.retailer,
        price_amount: amount,
        currency: "USD".to_string(),
        product_name,
        source_url: page.current_url().to_string(),
        captured_at: Utc::now(),
    }))
}
