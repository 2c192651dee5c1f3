//! Integration tests for the two-phase crawl
//!
//! These tests use wiremock to create mock HTTP servers and exercise
//! pagination, the author fan-out, and the stopping rules end-to-end.

use quotery::config::{Config, CrawlConfig, OutputConfig};
use quotery::crawl::{run_crawl, FetchError};
use quotery::QuoteryError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing both crawl hosts at the mock server
fn create_test_config(server_url: &str) -> Config {
    Config {
        crawl: CrawlConfig {
            base_url: server_url.to_string(),
            author_base_url: server_url.to_string(),
            user_agent: Some("QuoteryTest/1.0".to_string()),
        },
        output: OutputConfig {
            // The crawl itself never touches these paths
            quotes_path: "./quotes.json".to_string(),
            authors_path: "./authors.json".to_string(),
            database_path: "./quotes.db".to_string(),
        },
    }
}

/// Renders one quote block the way the listing markup nests it
fn quote_block(text: &str, author: &str, slug: &str, tags: &[&str]) -> String {
    let tag_links: Vec<String> = tags
        .iter()
        .map(|tag| format!(r#"<a class="tag" href="/tag/{}/">{}</a>"#, tag, tag))
        .collect();

    format!(
        r#"<div class="quote">
            <span class="text">{}</span>
            <span>by <small class="author">{}</small>
            <a href="/author/{}">(about)</a></span>
            <div class="tags">Tags: {}</div>
        </div>"#,
        text,
        author,
        slug,
        tag_links.join("\n")
    )
}

/// Renders a full listing page from the given quote blocks
fn listing_page(quotes: &[String]) -> String {
    format!(
        r#"<html><head><title>Quotes</title></head><body>
        <div class="col-md-8">{}</div>
        </body></html>"#,
        quotes.join("\n")
    )
}

/// A listing page past the last page of content: valid HTML, zero quotes
fn empty_listing_page() -> String {
    listing_page(&["No quotes found!".to_string()])
}

/// Renders an author profile page
fn author_page(name: &str, born_date: &str, born_location: &str, description: &str) -> String {
    format!(
        r#"<html><head><title>{}</title></head><body>
        <div class="author-details">
            <h3 class="author-title">{}</h3>
            <p>Born: <span class="author-born-date">{}</span>
            <span class="author-born-location">{}</span></p>
            <div class="author-description">{}</div>
        </div>
        </body></html>"#,
        name, name, born_date, born_location, description
    )
}

#[tokio::test]
async fn test_full_crawl_two_listing_pages() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Page 1 is the base URL itself, with two quotes by the same author
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[
                quote_block(
                    "“The world as we have created it is a process of our thinking.”",
                    "Albert Einstein",
                    "Albert-Einstein",
                    &["change", "deep-thoughts"],
                ),
                quote_block(
                    "“Try not to become a man of success.”",
                    "Albert Einstein",
                    "Albert-Einstein",
                    &["success"],
                ),
            ])),
        )
        .mount(&mock_server)
        .await;

    // Page 2 adds one quote by a second author
    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[quote_block(
                "“The person, be it gentleman or lady, who has not pleasure in a good novel, must be intolerably stupid.”",
                "Jane Austen",
                "Jane-Austen",
                &["aliteracy", "books"],
            )])),
        )
        .mount(&mock_server)
        .await;

    // Page 3 has no quote blocks, which ends the walk; it must be probed
    // exactly once
    Mock::given(method("GET"))
        .and(path("/page/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_listing_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Nothing past the empty page is ever requested
    Mock::given(method("GET"))
        .and(path("/page/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_listing_page()))
        .expect(0)
        .mount(&mock_server)
        .await;

    // Einstein is linked from two quotes but his profile is fetched once
    Mock::given(method("GET"))
        .and(path("/author/Albert-Einstein"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Albert Einstein",
            "March 14, 1879",
            "in Ulm, Germany",
            "Theoretical physicist.",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/author/Jane-Austen"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Jane Austen",
            "December 16, 1775",
            "in Steventon Rectory, Hampshire, The United Kingdom",
            "  English novelist.  ",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Run the crawl
    let config = create_test_config(&base_url);
    let report = run_crawl(&config).await.expect("Crawl failed");

    // Quotes arrive in listing order across pages
    assert_eq!(report.quotes.len(), 3);
    assert_eq!(
        report.quotes[0].text,
        "“The world as we have created it is a process of our thinking.”"
    );
    assert_eq!(report.quotes[0].author, "Albert Einstein");
    assert_eq!(report.quotes[0].tags, vec!["change", "deep-thoughts"]);
    assert_eq!(report.quotes[2].author, "Jane Austen");

    // Only the two pages that yielded quotes count as crawled
    assert_eq!(report.pages_crawled, 2);

    // Two distinct authors; completion order is not deterministic
    assert_eq!(report.authors.len(), 2);
    let mut names: Vec<&str> = report
        .authors
        .iter()
        .map(|author| author.full_name.as_str())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Albert Einstein", "Jane Austen"]);

    // Profile fields are trimmed
    let austen = report
        .authors
        .iter()
        .find(|author| author.full_name == "Jane Austen")
        .expect("Jane Austen missing from report");
    assert_eq!(austen.description, "English novelist.");
    assert_eq!(austen.born_date, "December 16, 1775");
}

#[tokio::test]
async fn test_single_listing_page_with_repeated_author() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // One listing page, two quotes by the same author
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[
                quote_block("“First.”", "Marcus Aurelius", "Marcus-Aurelius", &["stoic"]),
                quote_block("“Second.”", "Marcus Aurelius", "Marcus-Aurelius", &[]),
            ])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_listing_page()))
        .mount(&mock_server)
        .await;

    // Two quotes, one profile fetch
    Mock::given(method("GET"))
        .and(path("/author/Marcus-Aurelius"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Marcus Aurelius",
            "April 26, 121",
            "in Rome, Italy",
            "Roman emperor and Stoic philosopher.",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Run the crawl
    let config = create_test_config(&base_url);
    let report = run_crawl(&config).await.expect("Crawl failed");

    assert_eq!(report.quotes.len(), 2);
    assert_eq!(report.pages_crawled, 1);
    assert_eq!(report.authors.len(), 1);
    assert_eq!(report.authors[0].full_name, "Marcus Aurelius");
}

#[tokio::test]
async fn test_listing_error_status_ends_pagination() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[quote_block(
                "“A day without sunshine is like, you know, night.”",
                "Steve Martin",
                "Steve-Martin",
                &["humor"],
            )])),
        )
        .mount(&mock_server)
        .await;

    // The 500 body carries a quote block that must never be parsed; if it
    // were, the fan-out would request this author
    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(listing_page(&[quote_block(
                "“Should not appear.”",
                "Poison Author",
                "Poison-Author",
                &[],
            )])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/author/Poison-Author"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Poison Author",
            "January 1, 1900",
            "in Nowhere",
            "Must never be fetched.",
        )))
        .expect(0) // Error bodies contribute nothing
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/author/Steve-Martin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Steve Martin",
            "August 14, 1945",
            "in Waco, Texas, The United States",
            "Comedian and writer.",
        )))
        .mount(&mock_server)
        .await;

    // Run the crawl: the 500 ends pagination, it does not fail the crawl
    let config = create_test_config(&base_url);
    let report = run_crawl(&config).await.expect("Crawl failed");

    assert_eq!(report.quotes.len(), 1);
    assert_eq!(report.pages_crawled, 1);
    assert_eq!(report.authors.len(), 1);
    assert_eq!(report.authors[0].full_name, "Steve Martin");
}

#[tokio::test]
async fn test_author_fetch_failure_fails_crawl() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // One page, three quotes by three different authors
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[
                quote_block("“One.”", "Author One", "Author-One", &[]),
                quote_block("“Two.”", "Author Two", "Author-Two", &[]),
                quote_block("“Three.”", "Author Three", "Author-Three", &[]),
            ])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/author/Author-One"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Author One",
            "January 1, 1901",
            "in Testville",
            "First.",
        )))
        .mount(&mock_server)
        .await;

    // Profile errors are hard failures, unlike listing errors
    Mock::given(method("GET"))
        .and(path("/author/Author-Two"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/author/Author-Three"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Author Three",
            "March 3, 1903",
            "in Testville",
            "Third.",
        )))
        .mount(&mock_server)
        .await;

    // Run the crawl: one failed profile fails the whole crawl
    let config = create_test_config(&base_url);
    let err = run_crawl(&config).await.expect_err("Crawl should fail");

    match err {
        QuoteryError::Fetch(FetchError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/author/Author-Two"));
        }
        other => panic!("Expected a status error, got: {}", other),
    }
}

#[tokio::test]
async fn test_author_page_without_details_is_skipped() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[
                quote_block("“One.”", "Author One", "Author-One", &[]),
                quote_block("“Two.”", "Author Two", "Author-Two", &[]),
            ])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/author/Author-One"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Author One",
            "January 1, 1901",
            "in Testville",
            "First.",
        )))
        .mount(&mock_server)
        .await;

    // A 200 page without the details block is skipped, not an error
    Mock::given(method("GET"))
        .and(path("/author/Author-Two"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Author</title></head><body>
            <p>No details available.</p>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    // Run the crawl
    let config = create_test_config(&base_url);
    let report = run_crawl(&config).await.expect("Crawl failed");

    assert_eq!(report.quotes.len(), 2);
    assert_eq!(report.authors.len(), 1);
    assert_eq!(report.authors[0].full_name, "Author One");
}
