//! Configuration management for the rfqcrawl crawler
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Reference start URL: the Alibaba sourcing RFQ search listing
pub const DEFAULT_START_URL: &str =
    "https://sourcing.alibaba.com/rfq/rfq_search_list.htm?country=AE&recently=Y&tracelog=newest";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Crawler configuration
    pub crawler: CrawlerConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Crawler-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Listing page the crawl starts from
    pub start_url: String,

    /// Maximum number of listing pages to visit
    pub max_pages: usize,

    /// Number of fetch attempts per URL
    pub max_retries: u32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Politeness delay between page fetches, in seconds
    pub page_delay_secs: u64,

    /// Base delay in milliseconds for retry backoff
    pub retry_base_delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where the CSV file is written
    pub dir: PathBuf,

    /// Prefix of the timestamp-named CSV file
    pub filename_prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let start_url = std::env::var("RFQCRAWL_START_URL")
            .unwrap_or_else(|_| String::from(DEFAULT_START_URL));

        let max_pages = std::env::var("RFQCRAWL_MAX_PAGES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(50);

        let max_retries = std::env::var("RFQCRAWL_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3);

        let request_timeout_secs = std::env::var("RFQCRAWL_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        let page_delay_secs = std::env::var("RFQCRAWL_PAGE_DELAY")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(2);

        let retry_base_delay_ms = std::env::var("RFQCRAWL_RETRY_BASE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1000);

        let output_dir = std::env::var("RFQCRAWL_OUTPUT_DIR")
            .unwrap_or_else(|_| String::from("."))
            .into();

        let filename_prefix =
            std::env::var("RFQCRAWL_OUTPUT_PREFIX").unwrap_or_else(|_| String::from("rfq"));

        let log_level =
            std::env::var("RFQCRAWL_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("RFQCRAWL_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            crawler: CrawlerConfig {
                start_url,
                max_pages,
                max_retries,
                request_timeout_secs,
                page_delay_secs,
                retry_base_delay_ms,
            },
            output: OutputConfig {
                dir: output_dir,
                filename_prefix,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.crawler.start_url.is_empty() {
            anyhow::bail!("start_url must not be empty");
        }

        if self.crawler.max_pages == 0 {
            anyhow::bail!("max_pages must be greater than 0");
        }

        if self.crawler.max_retries == 0 {
            anyhow::bail!("max_retries must be greater than 0");
        }

        if self.crawler.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.request_timeout_secs)
    }

    /// Get inter-page politeness delay as Duration
    #[must_use]
    pub fn page_delay(&self) -> Duration {
        Duration::from_secs(self.crawler.page_delay_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig {
                start_url: String::from(DEFAULT_START_URL),
                max_pages: 50,
                max_retries: 3,
                request_timeout_secs: 10,
                page_delay_secs: 2,
                retry_base_delay_ms: 1000,
            },
            output: OutputConfig {
                dir: PathBuf::from("."),
                filename_prefix: String::from("rfq"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
