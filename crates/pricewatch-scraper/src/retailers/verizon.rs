//! Verizon search and product-detail selectors.
//!
//! Verizon's detail pages spread prices across the widest set of layouts in
//! the fleet (device, accessory, installment), hence the four-deep fallback
//! chain.

use super::RetailerSpec;
use crate::parse::PricePattern;
use pricewatch_core::Retailer;

pub(super) fn spec() -> RetailerSpec {
    RetailerSpec {
        retailer: Retailer::Verizon,
        origin: "https://www.verizon.com",
        search_path: "/search/?q=",
        results_selector: ".NHaasTX",
        no_results_selector: ".noResults",
        candidate_selector: ".tile",
        candidate_link_selector: "a",
        skip_sponsored_first: false,
        name_selector: "h1",
        price_wait_selector: ".price__amount",
        price_selectors: &[
            ".price__amount",
            ".price-display",
            "div[data-testid=\"accessorypriceid\"]",
            ".device-installment-price",
        ],
        price_pattern: PricePattern::Generic,
    }
}
