//! Amazon search and product-detail selectors.
//!
//! Candidates are restricted to result items carrying a `data-asin` and not
//! marked as ad holders, so sponsored placements are filtered at selection
//! time rather than by slot index.

use super::RetailerSpec;
use crate::parse::PricePattern;
use pricewatch_core::Retailer;

pub(super) fn spec() -> RetailerSpec {
    RetailerSpec {
        retailer: Retailer::Amazon,
        origin: "https://www.amazon.com",
        search_path: "/s?k=",
        results_selector: ".s-result-item",
        no_results_selector: ".s-no-outline",
        candidate_selector: ".s-result-item[data-asin]:not(.AdHolder)",
        candidate_link_selector: "a.a-link-normal",
        skip_sponsored_first: false,
        name_selector: "#productTitle",
        price_wait_selector: "#price",
        price_selectors: &[
            "#price_inside_buybox",
            "#priceblock_ourprice",
            "#priceblock_dealprice",
            ".a-price .a-offscreen",
            ".a-price",
        ],
        price_pattern: PricePattern::Generic,
    }
}
