pub mod error;
pub mod extract;
pub mod page;
pub mod parse;
pub mod pipeline;
pub mod retailers;
pub mod static_document;
#[cfg(test)]
mod test_support;

pub use error::PageError;
pub use extract::{extract_price, ExtractionTarget, FailureReason, Outcome};
pub use page::NavigableDocument;
pub use parse::PricePattern;
pub use pipeline::{run_extraction, SkipReason, Terminal};
pub use retailers::RetailerSpec;
pub use static_document::StaticDocument;
