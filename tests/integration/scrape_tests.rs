use crate::{catalog_page, create_test_config, listing};
use census_catalog::output::{read_products, ProductRecord};
use census_catalog::scrape::{scrape, CatalogExtractor, Collector, PageStatus};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("page", page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_scrape_collects_pages_in_order_and_skips_failures() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "1",
        catalog_page(&[
            listing("kent-bundle", "Kent Bundle Pack", "Every Kent census", "£12.50"),
            listing("essex", "Essex Starter", "Essex, 1881", "£5.00"),
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "3",
        catalog_page(&[listing("kent-mega", "Kent Mega Bundle", "", "£1,020.00")]),
    )
    .await;

    let dir = tempdir().unwrap();
    let config = create_test_config(&mock_server.uri(), 3, dir.path());
    let products_path = config.output.products_path.clone();

    let report = scrape(config).await.expect("Scrape failed");

    assert_eq!(report.products.len(), 3);
    assert_eq!(report.pages_fetched(), 2);
    assert_eq!(report.pages_skipped(), 1);
    assert_eq!(report.pages[0].status, PageStatus::Fetched { products: 2 });
    assert!(matches!(report.pages[1].status, PageStatus::Skipped { .. }));
    assert_eq!(report.pages[2].status, PageStatus::Fetched { products: 1 });

    let saved = read_products(Path::new(&products_path)).unwrap();
    assert_eq!(
        saved,
        vec![
            ProductRecord::new("Kent Bundle Pack", "Every Kent census", "£12.50"),
            ProductRecord::new("Essex Starter", "Essex, 1881", "£5.00"),
            ProductRecord::new("Kent Mega Bundle", "", "£1,020.00"),
        ]
    );

    let raw = std::fs::read_to_string(&products_path).unwrap();
    assert!(raw.starts_with("title,description,price\r\n"));
    assert!(raw.contains("\"Essex, 1881\""));
}

#[tokio::test]
async fn test_scrape_without_products_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Maintenance</p></body></html>"),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let config = create_test_config(&mock_server.uri(), 2, dir.path());
    let products_path = config.output.products_path.clone();

    let report = scrape(config).await.expect("Scrape failed");

    assert!(report.products.is_empty());
    assert_eq!(report.pages_fetched(), 2);
    assert!(!Path::new(&products_path).exists());
}

#[tokio::test]
async fn test_scrape_all_pages_failing_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let config = create_test_config(&mock_server.uri(), 3, dir.path());
    let products_path = config.output.products_path.clone();

    let report = scrape(config).await.expect("Scrape failed");

    assert_eq!(report.pages_skipped(), 3);
    assert!(!Path::new(&products_path).exists());
}

#[tokio::test]
async fn test_collector_requests_each_page_once() {
    let mock_server = MockServer::start().await;

    for page in ["1", "2", "3", "4"] {
        mount_page(
            &mock_server,
            page,
            catalog_page(&[listing(page, &format!("Page {} Bundle", page), "", "£1.00")]),
        )
        .await;
    }

    let dir = tempdir().unwrap();
    let config = create_test_config(&mock_server.uri(), 4, dir.path());

    let collector = Collector::new(config).unwrap();
    let report = collector.collect().await;

    let titles: Vec<_> = report.products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Page 1 Bundle", "Page 2 Bundle", "Page 3 Bundle", "Page 4 Bundle"]
    );
    // expect(1) on every mock is verified when the server drops
}

#[tokio::test(start_paused = true)]
async fn test_delay_follows_only_successful_pages() {
    let mock_server = MockServer::start().await;

    for page in ["1", "3", "5"] {
        mount_page(
            &mock_server,
            page,
            catalog_page(&[listing(page, &format!("Page {} Bundle", page), "", "£1.00")]),
        )
        .await;
    }

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("page", "4"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let mut config = create_test_config(&mock_server.uri(), 5, dir.path());
    config.catalog.delay_ms = 1000;

    // No request timeout and no idle-pool timer, so the paused clock only
    // moves for the collector's own sleeps.
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .pool_idle_timeout(None)
        .build()
        .unwrap();
    let extractor = CatalogExtractor::new(&config.extractor).unwrap();
    let collector = Collector::with_extractor(config, client, Box::new(extractor));

    let start = tokio::time::Instant::now();
    let report = collector.collect().await;
    let elapsed = start.elapsed();

    assert_eq!(report.pages_fetched(), 3);
    assert!(matches!(report.pages[1].status, PageStatus::Skipped { .. }));
    assert_eq!(
        report.pages[3].status,
        PageStatus::Skipped {
            error: "empty response body".to_string()
        }
    );

    let expected = Duration::from_millis(1000 * 3);
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(100),
        "expected {:?} of delay, got {:?}",
        expected,
        elapsed
    );
}
