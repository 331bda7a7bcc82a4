//! The navigable-document capability consumed from the crawling runtime.

use std::time::Duration;

use crate::error::PageError;

/// A page the extraction driver can query and navigate.
///
/// The driver only ever talks to a page through this trait, so extraction
/// logic is testable against scripted stubs and the production implementation
/// ([`crate::StaticDocument`]) stays swappable for a browser-backed one.
///
/// Absence of an element is always an `Ok` value (`false` / `None` / an empty
/// list), never an error: expected-absence is a routine skip condition.
/// `Err(PageError)` is reserved for genuine capability faults (network
/// failures, bad selectors, evaluation errors).
#[allow(async_fn_in_trait)]
pub trait NavigableDocument {
    /// Wait for `selector` to appear, up to `timeout`. Returns `Ok(false)`
    /// when the timeout expires without the element appearing; expiry is
    /// "element absent", never invocation cancellation.
    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<bool, PageError>;

    /// Whether at least one element currently matches `selector`.
    async fn has_element(&self, selector: &str) -> Result<bool, PageError>;

    /// Trimmed text content of the first element matching `selector`.
    /// Returns `None` when no element matches, or when the matched element's
    /// text is empty after trimming (an empty hit counts as absent).
    async fn text_of(&self, selector: &str) -> Result<Option<String>, PageError>;

    /// For every element matching `item_selector`, the `href` of the first
    /// link inside it matching `link_selector` (`None` when the item has no
    /// such link).
    async fn candidate_hrefs(
        &self,
        item_selector: &str,
        link_selector: &str,
    ) -> Result<Vec<Option<String>>, PageError>;

    /// Load `url`, replacing the current document.
    async fn navigate(&mut self, url: &str) -> Result<(), PageError>;

    /// The resolved URL of the current document.
    fn current_url(&self) -> &str;
}
