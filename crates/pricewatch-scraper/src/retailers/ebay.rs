//! eBay search and listing selectors.
//!
//! The first `.s-item` slot is reliably a sponsored placement, so slot 1 is
//! used whenever at least two candidates exist. Listing prices carry the
//! `"US $"` currency-code prefix, hence the dedicated price pattern.

use super::RetailerSpec;
use crate::parse::PricePattern;
use pricewatch_core::Retailer;

pub(super) fn spec() -> RetailerSpec {
    RetailerSpec {
        retailer: Retailer::Ebay,
        origin: "https://www.ebay.com",
        search_path: "/sch/i.html?_nkw=",
        results_selector: ".s-item",
        no_results_selector: ".srp-save-null-search__heading",
        candidate_selector: ".s-item",
        candidate_link_selector: ".s-item__link",
        skip_sponsored_first: true,
        name_selector: "h1.x-item-title__mainTitle",
        price_wait_selector: ".x-price-primary",
        price_selectors: &[".x-price-primary", ".x-bin-price__content", ".x-price"],
        price_pattern: PricePattern::UsListing,
    }
}
