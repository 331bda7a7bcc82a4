//! Price text parsing.
//!
//! Extracted page text frequently wraps the amount in currency symbols,
//! labels, or strikethrough noise. The rule here is deliberately simple: the
//! first substring matching the pattern wins, and no attempt is made to
//! disambiguate multiple prices in the same text (sale vs. strikethrough).
//! Absence of a match is a normal skip condition, not an error.

use std::sync::LazyLock;

use regex::Regex;

static GENERIC_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([0-9]+(?:\.[0-9]+)?)").expect("valid regex"));

/// eBay listing prices carry a literal currency-code prefix, e.g. `"US $12.34"`.
static US_LISTING_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"US\s*\$([0-9]+(?:\.[0-9]+)?)").expect("valid regex"));

/// Which textual price format a retailer's pages use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePattern {
    /// Optional `$` prefix followed by a decimal number.
    Generic,
    /// Literal `US $` prefix followed by a decimal number.
    UsListing,
}

impl PricePattern {
    /// Parse a numeric amount out of `text`, or `None` when the pattern does
    /// not occur anywhere in it.
    #[must_use]
    pub fn parse(self, text: &str) -> Option<f64> {
        let re = match self {
            PricePattern::Generic => &*GENERIC_PRICE,
            PricePattern::UsListing => &*US_LISTING_PRICE,
        };
        re.captures(text)?.get(1)?.as_str().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_parses_dollar_prefixed_amount() {
        assert_eq!(PricePattern::Generic.parse("$12.34"), Some(12.34));
    }

    #[test]
    fn generic_parses_bare_amount() {
        assert_eq!(PricePattern::Generic.parse("12.34"), Some(12.34));
    }

    #[test]
    fn generic_parses_integer_amount() {
        assert_eq!(PricePattern::Generic.parse("$45"), Some(45.0));
    }

    #[test]
    fn generic_finds_amount_inside_surrounding_text() {
        assert_eq!(
            PricePattern::Generic.parse("Now only $19.99 with free shipping"),
            Some(19.99)
        );
    }

    #[test]
    fn generic_first_match_wins_over_later_prices() {
        // Strikethrough-then-sale text: the first price is taken as-is.
        assert_eq!(
            PricePattern::Generic.parse("$24.99 $19.99"),
            Some(24.99)
        );
    }

    #[test]
    fn generic_stops_at_thousands_separator() {
        // Comma-grouped amounts are not reassembled; the leading group wins.
        assert_eq!(PricePattern::Generic.parse("$1,234.56"), Some(1.0));
    }

    #[test]
    fn generic_returns_none_without_digits() {
        assert_eq!(PricePattern::Generic.parse("See price in cart"), None);
        assert_eq!(PricePattern::Generic.parse(""), None);
    }

    #[test]
    fn us_listing_requires_currency_code_prefix() {
        assert_eq!(PricePattern::UsListing.parse("US $89.95"), Some(89.95));
        assert_eq!(PricePattern::UsListing.parse("US$89.95"), Some(89.95));
        assert_eq!(PricePattern::UsListing.parse("$89.95"), None);
        assert_eq!(PricePattern::UsListing.parse("89.95"), None);
    }

    #[test]
    fn us_listing_first_match_wins() {
        assert_eq!(
            PricePattern::UsListing.parse("US $10.00 to US $15.00"),
            Some(10.0)
        );
    }
}
