//! Best Buy search and product-detail selectors.

use super::RetailerSpec;
use crate::parse::PricePattern;
use pricewatch_core::Retailer;

pub(super) fn spec() -> RetailerSpec {
    RetailerSpec {
        retailer: Retailer::Bestbuy,
        origin: "https://www.bestbuy.com",
        search_path: "/site/searchpage.jsp?st=",
        results_selector: ".sku-item",
        no_results_selector: ".no-results",
        candidate_selector: ".sku-item",
        candidate_link_selector: ".sku-header a",
        skip_sponsored_first: false,
        name_selector: ".sku-title h1",
        price_wait_selector: ".priceView-customer-price",
        price_selectors: &[
            ".priceView-customer-price span",
            ".priceView-purchase-price",
            ".pb-hero-price span",
        ],
        price_pattern: PricePattern::Generic,
    }
}
