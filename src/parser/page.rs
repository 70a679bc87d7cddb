//! Listing page scanner
//!
//! Enumerates candidate record containers on one fetched page and filters
//! them down to real RFQ records via the record extractor.

use chrono::{DateTime, Utc};
use scraper::Html;
use url::Url;

use crate::models::RfqRecord;
use crate::parser::patterns;
use crate::parser::record::{class_matches, RecordExtractor};

/// Scans one fetched listing page for RFQ records.
pub struct PageScanner {
    extractor: RecordExtractor,
}

impl PageScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractor: RecordExtractor::new(),
        }
    }

    /// Extract all RFQ records from a listing page, in document order.
    ///
    /// Candidate containers are `div`/`li` elements whose class matches the
    /// record-container pattern, falling back to a looser pattern when the
    /// strict one finds nothing. Candidates without an href-bearing anchor
    /// are skipped, and extracted records without a title are discarded.
    ///
    /// # Arguments
    ///
    /// * `html` - Raw page markup
    /// * `base_url` - Site origin used to resolve relative hrefs
    /// * `now` - Crawl time, shared by every record of the run
    #[must_use]
    pub fn scan(&self, html: &str, base_url: &Url, now: DateTime<Utc>) -> Vec<RfqRecord> {
        let document = Html::parse_document(html);

        let mut candidates: Vec<_> = document
            .select(&patterns::CANDIDATE_TAGS)
            .filter(|el| class_matches(el, &patterns::CONTAINER_CLASS))
            .collect();

        if candidates.is_empty() {
            tracing::debug!("No strict container matches, trying loose pattern");
            candidates = document
                .select(&patterns::CANDIDATE_TAGS)
                .filter(|el| class_matches(el, &patterns::CONTAINER_CLASS_LOOSE))
                .collect();
        }

        let records: Vec<RfqRecord> = candidates
            .into_iter()
            .filter(|el| el.select(&patterns::ANCHOR).next().is_some())
            .map(|el| self.extractor.extract(&el, base_url, now))
            .filter(RfqRecord::is_valid)
            .collect();

        tracing::debug!(records = records.len(), "Scanned listing page");

        records
    }
}

impl Default for PageScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> Url {
        Url::parse("https://sourcing.alibaba.com/").unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_scan_extracts_records_in_document_order() {
        let html = r#"<html><body><div class="wrapper">
            <div class="rfq-item"><a href="/rfq/a?ID1">First inquiry</a></div>
            <div class="rfq-item"><a href="/rfq/b?ID2">Second inquiry</a></div>
        </div></body></html>"#;

        let records = PageScanner::new().scan(html, &base(), now());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First inquiry");
        assert_eq!(records[0].rfq_id, "1");
        assert_eq!(records[1].title, "Second inquiry");
        assert_eq!(records[1].rfq_id, "2");
    }

    #[test]
    fn test_scan_skips_candidates_without_anchor() {
        let html = r#"<div class="rfq-item"><span>advert block</span></div>
            <div class="rfq-item"><a href="/rfq/a?ID7">Real inquiry</a></div>"#;

        let records = PageScanner::new().scan(html, &base(), now());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rfq_id, "7");
    }

    #[test]
    fn test_scan_never_returns_empty_titles() {
        let html = r#"<div class="rfq-item"><a href="/rfq/a?ID1"></a></div>"#;

        let records = PageScanner::new().scan(html, &base(), now());

        assert!(records.is_empty());
    }

    #[test]
    fn test_loose_fallback_pattern() {
        let html = r#"<li class="result-list"><a href="/rfq/x?ID9">Fallback inquiry</a></li>"#;

        let records = PageScanner::new().scan(html, &base(), now());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Fallback inquiry");
    }

    #[test]
    fn test_no_candidates_yields_empty() {
        let html = "<html><body><p>nothing to see</p></body></html>";

        let records = PageScanner::new().scan(html, &base(), now());

        assert!(records.is_empty());
    }
}
