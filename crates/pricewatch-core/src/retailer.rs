use serde::{Deserialize, Serialize};

/// The fixed set of retailers the crawler knows how to extract prices from.
///
/// The set is closed on purpose: adding a retailer means writing a new
/// extraction spec, not registering a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    Amazon,
    Ebay,
    Walmart,
    Verizon,
    Bestbuy,
}

impl Retailer {
    /// Every supported retailer, in dispatch order.
    pub const ALL: [Retailer; 5] = [
        Retailer::Amazon,
        Retailer::Ebay,
        Retailer::Walmart,
        Retailer::Verizon,
        Retailer::Bestbuy,
    ];

    /// The lowercase label used in records, logs, and CLI arguments.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Retailer::Amazon => "amazon",
            Retailer::Ebay => "ebay",
            Retailer::Walmart => "walmart",
            Retailer::Verizon => "verizon",
            Retailer::Bestbuy => "bestbuy",
        }
    }
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Retailer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "amazon" => Ok(Retailer::Amazon),
            "ebay" => Ok(Retailer::Ebay),
            "walmart" => Ok(Retailer::Walmart),
            "verizon" => Ok(Retailer::Verizon),
            "bestbuy" | "best-buy" => Ok(Retailer::Bestbuy),
            other => Err(format!(
                "unknown retailer '{other}' (expected one of: amazon, ebay, walmart, verizon, bestbuy)"
            )),
        }
    }
}
