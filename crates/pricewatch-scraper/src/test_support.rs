//! Scripted [`NavigableDocument`] stub for driver and pipeline tests.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::error::PageError;
use crate::page::NavigableDocument;

/// A document whose selector responses are scripted up front.
///
/// Selectors added to the `forbidden` set panic when probed, which lets tests
/// prove that a code path never reaches them.
#[derive(Debug, Default)]
pub(crate) struct StubDocument {
    texts: HashMap<String, String>,
    present: HashSet<String>,
    hrefs: Vec<Option<String>>,
    forbidden: HashSet<String>,
    fail_navigation: bool,
    pub(crate) navigations: Vec<String>,
    current_url: String,
}

impl StubDocument {
    pub(crate) fn new() -> Self {
        Self {
            current_url: "https://stub.invalid/search".to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts.insert(selector.to_string(), text.to_string());
        self
    }

    pub(crate) fn with_present(mut self, selector: &str) -> Self {
        self.present.insert(selector.to_string());
        self
    }

    pub(crate) fn with_hrefs(mut self, hrefs: Vec<Option<String>>) -> Self {
        self.hrefs = hrefs;
        self
    }

    pub(crate) fn forbid(mut self, selector: &str) -> Self {
        self.forbidden.insert(selector.to_string());
        self
    }

    pub(crate) fn failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    fn check_allowed(&self, selector: &str) {
        assert!(
            !self.forbidden.contains(selector),
            "selector {selector:?} must not be probed"
        );
    }

    fn matches(&self, selector: &str) -> bool {
        self.present.contains(selector) || self.texts.contains_key(selector)
    }
}

impl NavigableDocument for StubDocument {
    async fn wait_for(&mut self, selector: &str, _timeout: Duration) -> Result<bool, PageError> {
        self.check_allowed(selector);
        Ok(self.matches(selector))
    }

    async fn has_element(&self, selector: &str) -> Result<bool, PageError> {
        self.check_allowed(selector);
        Ok(self.matches(selector))
    }

    async fn text_of(&self, selector: &str) -> Result<Option<String>, PageError> {
        self.check_allowed(selector);
        Ok(self
            .texts
            .get(selector)
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string))
    }

    async fn candidate_hrefs(
        &self,
        _item_selector: &str,
        _link_selector: &str,
    ) -> Result<Vec<Option<String>>, PageError> {
        Ok(self.hrefs.clone())
    }

    async fn navigate(&mut self, url: &str) -> Result<(), PageError> {
        if self.fail_navigation {
            return Err(PageError::UnexpectedStatus {
                status: 503,
                url: url.to_string(),
            });
        }
        self.navigations.push(url.to_string());
        self.current_url = url.to_string();
        Ok(())
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }
}
