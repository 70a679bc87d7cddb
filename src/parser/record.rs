//! Heuristic field extraction for a single RFQ candidate node
//!
//! Each of the 16 record fields is located through a prioritized list of
//! attempts (class-name match, text match, positional fallback) with
//! first-match-wins semantics. A miss on one field never aborts the record:
//! the field keeps its default and extraction continues.

use chrono::{DateTime, Utc};
use regex::Regex;
use scraper::ElementRef;
use url::Url;

use crate::models::{RfqRecord, DATE_FORMAT};
use crate::parser::patterns;
use crate::parser::timeparse::normalize_relative_time;
use crate::utils::normalize_whitespace;

/// Concatenated, whitespace-normalized text content of an element
pub(crate) fn element_text(el: &ElementRef) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Whether the element's class attribute matches the given pattern
pub(crate) fn class_matches(el: &ElementRef, pattern: &Regex) -> bool {
    el.value()
        .attr("class")
        .map_or(false, |class| pattern.is_match(class))
}

/// First descendant whose class attribute matches the pattern
fn find_by_class<'a>(node: &ElementRef<'a>, pattern: &Regex) -> Option<ElementRef<'a>> {
    node.select(&patterns::ANY_ELEMENT)
        .find(|el| class_matches(el, pattern))
}

/// First descendant whose own text matches the pattern
///
/// Wrapper elements inherit the text of their children, so an element only
/// counts when no direct child element would match on its own. That keeps
/// the result close to the actual text-bearing element.
fn find_by_text<'a>(node: &ElementRef<'a>, pattern: &Regex) -> Option<ElementRef<'a>> {
    node.select(&patterns::ANY_ELEMENT).find(|el| {
        pattern.is_match(&element_text(el))
            && !el
                .children()
                .filter_map(ElementRef::wrap)
                .any(|child| pattern.is_match(&element_text(&child)))
    })
}

/// Extracts one [`RfqRecord`] from a candidate listing node.
pub struct RecordExtractor;

impl RecordExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract a record from a single candidate node.
    ///
    /// Never fails: a lookup miss for an individual field leaves that field
    /// at its default (empty string, or `"No"` for badge flags).
    ///
    /// # Arguments
    ///
    /// * `node` - Candidate markup element holding one inquiry
    /// * `base_url` - Site origin used to resolve relative hrefs
    /// * `now` - Crawl time, used for `inquiry_date` and `scraping_date`
    #[must_use]
    pub fn extract(&self, node: &ElementRef, base_url: &Url, now: DateTime<Utc>) -> RfqRecord {
        let mut record = RfqRecord::new(now.format(DATE_FORMAT).to_string());

        // Inquiry URL and RFQ ID from the first href-bearing anchor
        if let Some(anchor) = node.select(&patterns::ANCHOR).next() {
            if let Some(href) = anchor.value().attr("href") {
                record.inquiry_url = base_url
                    .join(href)
                    .map(|u| u.to_string())
                    .unwrap_or_else(|_| href.to_string());

                if let Some(cap) = patterns::RFQ_ID.captures(href) {
                    record.rfq_id = cap[1].to_string();
                }
            }
        }

        // Title: class match first, then first anchor text
        record.title = find_by_class(node, &patterns::TITLE_CLASS)
            .or_else(|| node.select(&patterns::ANY_ANCHOR).next())
            .map(|el| element_text(&el))
            .unwrap_or_default();

        if let Some(el) = find_by_class(node, &patterns::BUYER_CLASS) {
            record.buyer_name = element_text(&el);
        }

        if let Some(img) = node.select(&patterns::IMAGE).next() {
            if let Some(src) = img.value().attr("src") {
                record.buyer_image = src.to_string();
            }
        }

        // Inquiry time: raw phrase plus its normalized absolute date
        if let Some(el) = find_by_text(node, &patterns::TIME_TEXT) {
            let text = element_text(&el);
            record.inquiry_date = normalize_relative_time(&text, now);
            record.inquiry_time = text;
        }

        if let Some(el) = find_by_text(node, &patterns::QUOTES_TEXT) {
            if let Some(m) = patterns::INTEGER.find(&element_text(&el)) {
                record.quotes_left = m.as_str().to_string();
            }
        }

        if let Some(el) = find_by_class(node, &patterns::COUNTRY_CLASS) {
            record.country = element_text(&el);
        }

        if let Some(el) = find_by_text(node, &patterns::QUANTITY_TEXT) {
            record.quantity_required = element_text(&el);
        }

        // Badge flags: purely presence-based on descendant class names
        let flag_rules: [(&Regex, &mut String); 5] = [
            (&patterns::EMAIL_FLAG, &mut record.email_confirmed),
            (&patterns::EXPERIENCED_FLAG, &mut record.experienced_buyer),
            (
                &patterns::COMPLETE_ORDER_FLAG,
                &mut record.complete_order_via_rfq,
            ),
            (&patterns::TYPICAL_REPLIES_FLAG, &mut record.typical_replies),
            (&patterns::INTERACTIVE_FLAG, &mut record.interactive_user),
        ];

        for (pattern, field) in flag_rules {
            if find_by_class(node, pattern).is_some() {
                *field = String::from("Yes");
            }
        }

        record
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
