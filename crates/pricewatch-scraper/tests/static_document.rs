//! End-to-end extraction against a mock HTTP retailer.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pricewatch_core::Retailer;
use pricewatch_scraper::{
    extract_price, run_extraction, ExtractionTarget, NavigableDocument, Outcome, PageError,
    RetailerSpec, StaticDocument, Terminal,
};
use pricewatch_store::PriceStore;

const WAIT: Duration = Duration::from_millis(10);

fn target() -> ExtractionTarget {
    ExtractionTarget {
        product_id: "190199380356".to_string(),
        title: "Apple iPhone 13 Pro".to_string(),
    }
}

fn listing_html(detail_url: &str) -> String {
    format!(
        r#"<html><body>
          <div class="s-result-item AdHolder" data-asin="AD1">
            <a class="a-link-normal" href="{detail_url}/sponsored">ad</a>
          </div>
          <div class="s-result-item" data-asin="B0ABC">
            <a class="a-link-normal" href="{detail_url}">Apple iPhone 13 Pro</a>
          </div>
        </body></html>"#
    )
}

const DETAIL_HTML: &str = r#"<html><body>
  <h1 id="productTitle">  Apple iPhone 13 Pro, 128GB, Graphite  </h1>
  <div id="price"></div>
  <span class="a-price"><span class="a-offscreen">$999.99</span></span>
</body></html>"#;

async fn mock_retailer(server: &MockServer) -> String {
    let detail_url = format!("{}/dp/B0ABC", server.uri());
    Mock::given(method("GET"))
        .and(path("/s"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&detail_url)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dp/B0ABC"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_HTML))
        .mount(server)
        .await;
    format!("{}/s?k=Apple%20iPhone%2013%20Pro", server.uri())
}

#[tokio::test]
async fn extracts_a_price_from_a_served_search_and_detail_page() {
    let server = MockServer::start().await;
    let search_url = mock_retailer(&server).await;
    let spec = RetailerSpec::for_retailer(Retailer::Amazon);

    let mut page = StaticDocument::with_client(reqwest::Client::new());
    page.navigate(&search_url).await.unwrap();

    let outcome = extract_price(&spec, &target(), &mut page, WAIT)
        .await
        .unwrap();

    let Outcome::Extracted(price) = outcome else {
        panic!("expected an extracted price, got {outcome:?}");
    };
    assert!((price.price_amount - 999.99).abs() < f64::EPSILON);
    assert_eq!(price.product_name, "Apple iPhone 13 Pro, 128GB, Graphite");
    assert_eq!(price.currency, "USD");
    assert!(price.source_url.ends_with("/dp/B0ABC"));
    assert_eq!(price.retailer, Retailer::Amazon);
}

#[tokio::test]
async fn sponsored_ad_holder_items_are_never_selected() {
    let server = MockServer::start().await;
    let search_url = mock_retailer(&server).await;
    let spec = RetailerSpec::for_retailer(Retailer::Amazon);

    let mut page = StaticDocument::with_client(reqwest::Client::new());
    page.navigate(&search_url).await.unwrap();

    let outcome = extract_price(&spec, &target(), &mut page, WAIT)
        .await
        .unwrap();

    // The ad-holder slot links to /dp/B0ABC/sponsored; selection must land on
    // the organic item instead.
    let Outcome::Extracted(price) = outcome else {
        panic!("expected an extracted price, got {outcome:?}");
    };
    assert!(!price.source_url.contains("sponsored"));
}

#[tokio::test]
async fn no_results_marker_short_circuits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><div class="s-no-outline">No results for your search</div></body></html>"#,
        ))
        .mount(&server)
        .await;
    let spec = RetailerSpec::for_retailer(Retailer::Amazon);

    let mut page = StaticDocument::with_client(reqwest::Client::new());
    page.navigate(&format!("{}/s?k=nothing", server.uri()))
        .await
        .unwrap();

    let outcome = extract_price(&spec, &target(), &mut page, WAIT)
        .await
        .unwrap();
    assert!(matches!(outcome, Outcome::NoResults));
}

#[tokio::test]
async fn non_success_status_is_an_unexpected_status_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut page = StaticDocument::with_client(reqwest::Client::new());
    let err = page
        .navigate(&format!("{}/s?k=anything", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PageError::UnexpectedStatus { status: 404, .. }
    ));
}

#[tokio::test]
async fn pipeline_persists_an_extracted_record() {
    let server = MockServer::start().await;
    let search_url = mock_retailer(&server).await;
    let spec = RetailerSpec::for_retailer(Retailer::Amazon);

    let dir = tempfile::TempDir::new().unwrap();
    let store = PriceStore::open(dir.path()).await.unwrap();

    let mut page = StaticDocument::with_client(reqwest::Client::new());
    page.navigate(&search_url).await.unwrap();

    let terminal = run_extraction(&spec, &target(), &mut page, &store, WAIT).await;

    assert_eq!(terminal, Terminal::Persisted);
    let records = store.prices_by_identifier("190199380356").await;
    assert_eq!(records.len(), 1);
    assert!((records[0].price_amount - 999.99).abs() < f64::EPSILON);
}
