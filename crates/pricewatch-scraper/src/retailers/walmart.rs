//! Walmart search and product-detail selectors.

use super::RetailerSpec;
use crate::parse::PricePattern;
use pricewatch_core::Retailer;

pub(super) fn spec() -> RetailerSpec {
    RetailerSpec {
        retailer: Retailer::Walmart,
        origin: "https://www.walmart.com",
        search_path: "/search?q=",
        results_selector: ".search-result-gridview-item",
        no_results_selector: ".zero-results-message",
        candidate_selector: ".search-result-gridview-item",
        candidate_link_selector: "a[link-identifier=\"linkText\"]",
        skip_sponsored_first: false,
        name_selector: "[data-testid=\"product-title\"]",
        price_wait_selector: "[data-testid=\"price-value\"]",
        price_selectors: &[
            "[data-testid=\"price-value\"]",
            ".prod-PriceSection .price-group",
            ".price-characteristic",
        ],
        price_pattern: PricePattern::Generic,
    }
}
