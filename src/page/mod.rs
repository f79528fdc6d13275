//! Page fetch and summarize flow
//!
//! Fetches a page over HTTP(S), parses it leniently and counts links,
//! first-level headers and paragraphs. Every extraction step runs through a
//! [`Stopwatch`] so its duration is reported.

use crate::error::{AppError, Result};
use crate::instrument::Stopwatch;
use crate::models::PageSummary;
use crate::output::ReportFormatter;
use crate::timed;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

/// Well-formedness check for a fetch target
///
/// Accepts absolute `http`/`https` URLs with a non-empty host.
pub fn validate_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| AppError::validation(format!("'{}' is not a valid URL: {}", trimmed, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::validation(format!(
            "'{}' uses unsupported scheme '{}'; expected http or https",
            trimmed,
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(AppError::validation(format!("'{}' has no host", trimmed))),
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Source of page bodies
#[async_trait]
pub trait PageSource: Send + Sync {
    /// GET `url` and return its body; non-success status is an error
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// reqwest-backed [`PageSource`]
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(Self::user_agent())
            .build()
            .map_err(|e| AppError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    pub fn user_agent() -> String {
        format!("{}/{}", crate::PKG_NAME, crate::VERSION)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::timeout(format!("{} did not answer within {:?}", url, self.timeout))
            } else {
                AppError::from(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_request(format!("{} returned HTTP {}", url, status)));
        }

        let body = response.text().await?;
        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}

/// Parse markup leniently; malformed input still yields a tree
pub fn parse_html(body: &str) -> Html {
    Html::parse_document(body)
}

/// Compiled selectors for the elements the extractors count
#[derive(Debug)]
pub struct PageSelectors {
    links: Selector,
    headers: Selector,
    paragraphs: Selector,
}

impl PageSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            links: compile("a")?,
            headers: compile("h1")?,
            paragraphs: compile("p")?,
        })
    }

    /// Process-wide set, compiled on first use
    pub fn shared() -> Result<&'static PageSelectors> {
        static SHARED: OnceLock<PageSelectors> = OnceLock::new();
        if let Some(selectors) = SHARED.get() {
            return Ok(selectors);
        }
        let selectors = Self::new()?;
        Ok(SHARED.get_or_init(|| selectors))
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AppError::internal(format!("Invalid selector '{}': {}", css, e)))
}

/// One entry per `<a>` element, holding its `href` when present
pub fn collect_all_links(html: &Html, selectors: &PageSelectors) -> Vec<Option<String>> {
    html.select(&selectors.links)
        .map(|a| a.value().attr("href").map(str::to_string))
        .collect()
}

/// Trimmed text of every `<h1>` element
pub fn collect_all_h1_headers(html: &Html, selectors: &PageSelectors) -> Vec<String> {
    html.select(&selectors.headers)
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .collect()
}

pub fn count_paragraphs(html: &Html, selectors: &PageSelectors) -> usize {
    html.select(&selectors.paragraphs).count()
}

/// Run the three extractors, each one timed
pub fn summarize(html: &Html, selectors: &PageSelectors, stopwatch: &Stopwatch<'_>) -> PageSummary {
    let links = timed!(stopwatch, collect_all_links(html, selectors));
    let headers = timed!(stopwatch, collect_all_h1_headers(html, selectors));
    let paragraphs = timed!(stopwatch, count_paragraphs(html, selectors));

    PageSummary {
        links: links.len(),
        headers: headers.len(),
        paragraphs,
    }
}

/// Parse and summarize one page body, printing the counts to `out`
///
/// The whole step is timed as `process_page`.
pub fn process_page<W: Write>(
    body: &str,
    stopwatch: &Stopwatch<'_>,
    formatter: &dyn ReportFormatter,
    out: &mut W,
) -> Result<PageSummary> {
    stopwatch.try_call("process_page", || -> Result<PageSummary> {
        let selectors = PageSelectors::shared()?;
        let summary = {
            let html = parse_html(body);
            summarize(&html, selectors, stopwatch)
        };

        writeln!(out, "{}", formatter.page_count(summary.links, "links"))?;
        writeln!(out, "{}", formatter.page_count(summary.headers, "H1 headers"))?;
        writeln!(out, "{}", formatter.page_count(summary.paragraphs, "paragraphs"))?;
        writeln!(out, "{}", formatter.page_summary(&summary))?;
        Ok(summary)
    })
}
