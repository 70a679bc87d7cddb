//! rfqcrawl - Alibaba sourcing RFQ listing crawler
//!
//! Crawls the paginated buyer-inquiry ("RFQ") listing of the Alibaba sourcing
//! marketplace, extracts a fixed set of structured fields per inquiry using
//! heuristic markup matching, and exports the aggregated results as CSV.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Page fetching, pagination discovery and crawl orchestration
//! - [`parser`] - Heuristic record extraction from listing markup
//! - [`models`] - Core data structures and types
//! - [`storage`] - CSV output
//! - [`utils`] - Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rfqcrawl::prelude::{Config, Crawler};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let start_url = config.crawler.start_url.clone();
//!     let crawler = Crawler::new(config)?;
//!     let records = crawler.crawl(&start_url, 10).await?;
//!     println!("Scraped {} RFQs", records.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod models;
pub mod parser;
pub mod storage;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::fetcher::PageFetcher;
    pub use crate::crawler::Crawler;
    pub use crate::models::{CrawlResult, RfqRecord, CSV_HEADERS};
    pub use crate::parser::page::PageScanner;
    pub use crate::storage::csv::CsvWriter;
    pub use crate::utils::error::{CrawlerError, FetchError};
}

// Direct re-exports for convenience
pub use models::{CrawlResult, RfqRecord};
