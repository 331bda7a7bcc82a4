//! Crawl command: one extraction invocation per (product, retailer) pair.
//!
//! Invocations run concurrently on a shared HTTP client, bounded by the
//! configured concurrency limit. Per-invocation failures are logged and
//! skipped rather than propagated so a single bad pair does not abort the
//! full run; the collected results then feed one discrepancy-analysis pass.

use std::path::Path;
use std::time::Duration;

use futures::{stream, StreamExt};

use pricewatch_analysis::{run_analysis, DISCREPANCY_THRESHOLD_PCT};
use pricewatch_core::{AppConfig, ProductEntry, Retailer};
use pricewatch_scraper::{
    run_extraction, ExtractionTarget, NavigableDocument, RetailerSpec, SkipReason, StaticDocument,
    Terminal,
};
use pricewatch_store::PriceStore;

pub(crate) async fn run_crawl(
    config: &AppConfig,
    store: &PriceStore,
    products_override: Option<&Path>,
    retailer_filter: Option<&str>,
) -> anyhow::Result<()> {
    let products_path = products_override.unwrap_or(&config.products_path);
    let products = pricewatch_core::load_products(products_path)?;
    anyhow::ensure!(!products.is_empty(), "no products configured");

    let retailers: Vec<Retailer> = match retailer_filter {
        Some(label) => vec![label.parse().map_err(anyhow::Error::msg)?],
        None => Retailer::ALL.to_vec(),
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(&config.user_agent)
        .build()?;

    let wait_timeout = Duration::from_secs(config.element_wait_timeout_secs);
    let pairs: Vec<(&ProductEntry, Retailer)> = products
        .iter()
        .flat_map(|product| retailers.iter().map(move |&retailer| (product, retailer)))
        .collect();
    let pair_count = pairs.len();

    tracing::info!(
        products = products.len(),
        retailers = retailers.len(),
        "starting crawl"
    );

    // Collecting the whole stream is the completion barrier: analysis only
    // starts once every invocation has reached its terminal state.
    let terminals: Vec<Terminal> = stream::iter(pairs)
        .map(|(product, retailer)| {
            let client = client.clone();
            async move { crawl_pair(product, retailer, client, store, wait_timeout).await }
        })
        .buffer_unordered(config.max_concurrent_extractions.max(1))
        .collect()
        .await;

    let persisted = terminals
        .iter()
        .filter(|t| matches!(t, Terminal::Persisted))
        .count();
    tracing::info!(
        persisted,
        skipped = pair_count - persisted,
        "crawl finished"
    );
    println!("crawl finished: {persisted} prices recorded, {} skipped", pair_count - persisted);

    let summary = run_analysis(store, DISCREPANCY_THRESHOLD_PCT).await?;
    println!(
        "analyzed {} products, found {} discrepancies",
        summary.identifiers_examined, summary.discrepancies_found
    );

    Ok(())
}

/// Run one (product, retailer) invocation to its terminal state.
///
/// The search-page navigation happens here; the extraction driver takes over
/// on a page already positioned on the results.
async fn crawl_pair(
    product: &ProductEntry,
    retailer: Retailer,
    client: reqwest::Client,
    store: &PriceStore,
    wait_timeout: Duration,
) -> Terminal {
    let spec = RetailerSpec::for_retailer(retailer);
    let target = ExtractionTarget {
        product_id: product.product_id.clone(),
        title: product.title.clone(),
    };

    let mut page = StaticDocument::with_client(client);
    if let Err(e) = page.navigate(&spec.search_url(&target.title)).await {
        tracing::error!(
            %retailer,
            product_id = %target.product_id,
            error = %e,
            "search page navigation failed"
        );
        return Terminal::Skipped(SkipReason::PageFault);
    }

    run_extraction(&spec, &target, &mut page, store, wait_timeout).await
}
