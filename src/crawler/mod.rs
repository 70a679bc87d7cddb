//! Crawl orchestration
//!
//! Drives pagination discovery, page fetching and record extraction across
//! the listing, one page at a time, with a politeness delay between pages
//! and page-level error isolation.

pub mod fetcher;
pub mod headers;
pub mod pagination;

use chrono::Utc;
use url::Url;

use crate::config::Config;
use crate::crawler::fetcher::PageFetcher;
use crate::models::CrawlResult;
use crate::parser::page::PageScanner;
use crate::utils::error::CrawlerError;
use crate::utils::origin_url;

/// Sequential listing crawler
///
/// Owns the fetcher, the scanner and the accumulating result for the
/// duration of one crawl. Pages are never fetched concurrently; the fixed
/// inter-page delay is an intentional politeness control.
pub struct Crawler {
    fetcher: PageFetcher,
    scanner: PageScanner,
    config: Config,
}

impl Crawler {
    /// Create a new crawler from validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let fetcher = PageFetcher::with_config(
            config.crawler.max_retries,
            config.request_timeout(),
            config.crawler.retry_base_delay_ms,
        )?;

        Ok(Self {
            fetcher,
            scanner: PageScanner::new(),
            config,
        })
    }

    /// Crawl the listing starting at `start_url`, visiting at most
    /// `max_pages` pages.
    ///
    /// Page URLs come from pagination discovery (which degrades to the
    /// single start page on failure). For each page, a fetch or scan failure
    /// is isolated: it logs and yields zero records instead of aborting the
    /// crawl. The politeness delay applies after every page regardless of
    /// outcome, and the crawl stops early the moment a page yields zero
    /// records. An empty page means either the end of real content or
    /// markup the heuristics cannot match; the two are indistinguishable
    /// here.
    ///
    /// The crawl timestamp is captured once, so `scraping_date` is identical
    /// across all records of a run.
    ///
    /// # Errors
    ///
    /// Returns `CrawlerError::InvalidUrl` if `start_url` is not an absolute
    /// URL
    pub async fn crawl(&self, start_url: &str, max_pages: usize) -> Result<CrawlResult, CrawlerError> {
        let started = Utc::now();

        let base = Url::parse(start_url)
            .map_err(|e| CrawlerError::InvalidUrl(format!("{start_url}: {e}")))?;
        let base = origin_url(&base);

        let mut pages = pagination::discover(&self.fetcher, start_url).await;
        pages.truncate(max_pages);

        tracing::info!(pages = pages.len(), "Starting crawl");

        let mut records = CrawlResult::new();

        for (index, url) in pages.iter().enumerate() {
            tracing::info!(
                page = index + 1,
                total = pages.len(),
                url = %url,
                "Scraping listing page"
            );

            let page_records = match self.fetcher.fetch(url).await {
                Ok(html) => self.scanner.scan(&html, &base, started),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Failed to fetch listing page");
                    Vec::new()
                }
            };

            let count = page_records.len();
            records.extend(page_records);

            tokio::time::sleep(self.config.page_delay()).await;

            if count == 0 {
                tracing::warn!(page = index + 1, "No records found on page, stopping");
                break;
            }
        }

        tracing::info!(total = records.len(), "Crawl complete");

        Ok(records)
    }
}
