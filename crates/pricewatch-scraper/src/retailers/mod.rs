//! Per-retailer extraction configuration.
//!
//! Every retailer follows the same five-stage extraction protocol; the only
//! differences are selectors, origins, the sponsored-slot rule, and the price
//! text format. Each module below contributes one [`RetailerSpec`] and the
//! shared driver in [`crate::extract`] does the rest, so there is exactly one
//! copy of the protocol to keep correct.

mod amazon;
mod bestbuy;
mod ebay;
mod verizon;
mod walmart;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::parse::PricePattern;
use pricewatch_core::Retailer;

/// Everything retailer-specific the extraction driver needs.
#[derive(Debug, Clone)]
pub struct RetailerSpec {
    pub retailer: Retailer,
    /// Scheme + host used to resolve relative product URLs.
    pub origin: &'static str,
    /// Path-and-query prefix the encoded search term is appended to.
    pub search_path: &'static str,
    /// Results-container element waited for after the search page loads.
    /// Absence within the timeout is non-fatal; some layouts render results
    /// without it.
    pub results_selector: &'static str,
    /// Marker element that means "this identifier is absent from this
    /// retailer this run".
    pub no_results_selector: &'static str,
    /// Listing entries considered as candidates.
    pub candidate_selector: &'static str,
    /// Link inside a candidate holding the detail-page URL.
    pub candidate_link_selector: &'static str,
    /// When set, slot 0 is reliably a sponsored placement: use slot 1
    /// whenever at least two candidates exist.
    pub skip_sponsored_first: bool,
    /// Primary product-name selector on the detail page.
    pub name_selector: &'static str,
    /// Price element waited for on the detail page (non-fatal on timeout).
    pub price_wait_selector: &'static str,
    /// Ordered fallback chain for price text; the first selector yielding
    /// non-empty text wins and later ones are never probed.
    pub price_selectors: &'static [&'static str],
    pub price_pattern: PricePattern,
}

/// Characters left unescaped in search queries, matching JavaScript's
/// `encodeURIComponent` unreserved set.
const SEARCH_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl RetailerSpec {
    /// The configuration for one retailer of the closed set.
    #[must_use]
    pub fn for_retailer(retailer: Retailer) -> Self {
        match retailer {
            Retailer::Amazon => amazon::spec(),
            Retailer::Ebay => ebay::spec(),
            Retailer::Walmart => walmart::spec(),
            Retailer::Verizon => verizon::spec(),
            Retailer::Bestbuy => bestbuy::spec(),
        }
    }

    /// Search-results URL for a product title on this retailer.
    #[must_use]
    pub fn search_url(&self, title: &str) -> String {
        let encoded = utf8_percent_encode(title, SEARCH_QUERY);
        format!("{}{}{encoded}", self.origin, self.search_path)
    }

    /// Resolve a candidate href against this retailer's origin.
    #[must_use]
    pub fn resolve_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{href}", self.origin)
        }
    }
}
