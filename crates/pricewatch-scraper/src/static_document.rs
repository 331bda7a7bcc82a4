//! HTTP-fetched document implementing [`NavigableDocument`].
//!
//! Pages are fetched once per navigation and queried as static HTML. Because
//! the document is fully materialized at navigation time, `wait_for`
//! degenerates to a presence check. `scraper::Html` is not `Send`, so every
//! query parses the stored body locally and drops the parse before returning;
//! only the raw body string lives in the struct.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::PageError;
use crate::page::NavigableDocument;

pub struct StaticDocument {
    client: reqwest::Client,
    current_url: String,
    body: String,
}

impl StaticDocument {
    /// Build a document with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Http`] when the client cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Build a document on a shared client, the cheap path when many
    /// documents run concurrently against the same pool.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            current_url: String::new(),
            body: String::new(),
        }
    }

    fn selector(selector: &str) -> Result<Selector, PageError> {
        Selector::parse(selector).map_err(|_| PageError::InvalidSelector {
            selector: selector.to_string(),
        })
    }

    fn query_has(&self, selector: &str) -> Result<bool, PageError> {
        let sel = Self::selector(selector)?;
        let doc = Html::parse_document(&self.body);
        Ok(doc.select(&sel).next().is_some())
    }

    fn query_text(&self, selector: &str) -> Result<Option<String>, PageError> {
        let sel = Self::selector(selector)?;
        let doc = Html::parse_document(&self.body);
        Ok(doc
            .select(&sel)
            .next()
            .map(|element| element.text().collect::<String>())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()))
    }

    fn query_hrefs(
        &self,
        item_selector: &str,
        link_selector: &str,
    ) -> Result<Vec<Option<String>>, PageError> {
        let item_sel = Self::selector(item_selector)?;
        let link_sel = Self::selector(link_selector)?;
        let doc = Html::parse_document(&self.body);
        Ok(doc
            .select(&item_sel)
            .map(|item| {
                item.select(&link_sel)
                    .next()
                    .and_then(|link| link.value().attr("href"))
                    .map(str::to_string)
            })
            .collect())
    }
}

impl NavigableDocument for StaticDocument {
    async fn wait_for(&mut self, selector: &str, _timeout: Duration) -> Result<bool, PageError> {
        self.query_has(selector)
    }

    async fn has_element(&self, selector: &str) -> Result<bool, PageError> {
        self.query_has(selector)
    }

    async fn text_of(&self, selector: &str) -> Result<Option<String>, PageError> {
        self.query_text(selector)
    }

    async fn candidate_hrefs(
        &self,
        item_selector: &str,
        link_selector: &str,
    ) -> Result<Vec<Option<String>>, PageError> {
        self.query_hrefs(item_selector, link_selector)
    }

    async fn navigate(&mut self, url: &str) -> Result<(), PageError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PageError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        self.current_url = response.url().to_string();
        self.body = response.text().await?;
        Ok(())
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }
}
