use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rfqcrawl::config::{Config, LoggingConfig, DEFAULT_START_URL};
use rfqcrawl::prelude::{Crawler, CsvWriter};
use rfqcrawl::storage::csv::output_filename;

#[derive(Parser)]
#[command(
    name = "rfqcrawl",
    version,
    about = "Crawl the Alibaba sourcing RFQ listing and export inquiries as CSV",
    long_about = None
)]
struct Cli {
    /// Listing page to start crawling from
    #[arg(long, default_value = DEFAULT_START_URL)]
    start_url: String,

    /// Maximum number of listing pages to visit
    #[arg(long, default_value_t = 10)]
    max_pages: usize,

    /// Directory for the output CSV file
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json), overriding the configured format
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    apply_cli_logging(&mut config.logging, cli.log_format.as_deref(), cli.verbose);
    setup_tracing(&config.logging)?;

    tracing::info!("rfqcrawl starting");

    // Errors are reported to the user; the process still exits normally
    if let Err(e) = run(&cli, config).await {
        tracing::error!(error = %e, "Scraping failed");
        println!("Error: {e}");
    }

    Ok(())
}

/// CLI logging flags take precedence over env/file configuration
fn apply_cli_logging(logging: &mut LoggingConfig, format: Option<&str>, verbose: bool) {
    if let Some(format) = format {
        logging.format = format.to_string();
    }
    if verbose {
        logging.level = String::from("debug");
    }
}

fn setup_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        tracing_subscriber::EnvFilter::new(format!("rfqcrawl={},warn", logging.level));

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    Ok(())
}

async fn run(cli: &Cli, mut config: Config) -> Result<()> {
    config.crawler.start_url = cli.start_url.clone();
    config.crawler.max_pages = cli.max_pages;
    config.output.dir = cli.output_dir.clone();

    let prefix = config.output.filename_prefix.clone();
    let output_dir = config.output.dir.clone();

    tracing::info!(
        start_url = %config.crawler.start_url,
        max_pages = config.crawler.max_pages,
        "Starting RFQ crawl"
    );

    let crawler = Crawler::new(config)?;
    let records = crawler.crawl(&cli.start_url, cli.max_pages).await?;

    let path = output_dir.join(output_filename(&prefix, Local::now()));
    CsvWriter::new(&path).write(&records)?;

    println!("\nScraping completed successfully!");
    println!("Total RFQs scraped: {}", records.len());
    println!("Data saved to: {}", path.display());

    if !records.is_empty() {
        println!("\nFirst {} rows:", records.len().min(5));
        for record in records.iter().take(5) {
            println!(
                "  {} | {} | {} | {} | {}",
                record.rfq_id,
                record.title,
                record.country,
                record.quantity_required,
                record.inquiry_date
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_logging_overrides() {
        let mut logging = LoggingConfig {
            level: String::from("info"),
            format: String::from("text"),
        };

        apply_cli_logging(&mut logging, Some("json"), true);
        assert_eq!(logging.format, "json");
        assert_eq!(logging.level, "debug");
    }

    #[test]
    fn test_configured_logging_kept_without_flags() {
        let mut logging = LoggingConfig {
            level: String::from("trace"),
            format: String::from("json"),
        };

        apply_cli_logging(&mut logging, None, false);
        assert_eq!(logging.format, "json");
        assert_eq!(logging.level, "trace");
    }
}
