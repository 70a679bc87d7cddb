//! Heuristic matching rules for RFQ listing markup
//!
//! The listing has no stable, documented structure, so elements are located
//! by loose class-name and text patterns rather than fixed selectors. All
//! patterns are case-insensitive and deliberately over-inclusive: a false
//! positive on a presence flag is preferred over a missed field.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::Selector;

// Helper macro to parse selectors safely
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

macro_rules! parse_pattern {
    ($s:expr) => {
        Regex::new($s).expect(concat!("Invalid pattern: ", $s))
    };
}

lazy_static! {
    // Tag selectors
    pub static ref ANY_ELEMENT: Selector = parse_selector!("*");
    pub static ref ANCHOR: Selector = parse_selector!("a[href]");
    pub static ref ANY_ANCHOR: Selector = parse_selector!("a");
    pub static ref IMAGE: Selector = parse_selector!("img[src]");
    pub static ref CANDIDATE_TAGS: Selector = parse_selector!("div, li");
    pub static ref PAGINATION_TAGS: Selector = parse_selector!("div, ul");

    // Record container candidates, tried strict first then loose
    pub static ref CONTAINER_CLASS: Regex = parse_pattern!(r"(?i)rfq|item|card|inquiry|request");
    pub static ref CONTAINER_CLASS_LOOSE: Regex = parse_pattern!(r"(?i)list|item|card");

    // Class-name patterns per field
    pub static ref TITLE_CLASS: Regex = parse_pattern!(r"(?i)title|subject");
    pub static ref BUYER_CLASS: Regex = parse_pattern!(r"(?i)buyer|user|name");
    pub static ref COUNTRY_CLASS: Regex = parse_pattern!(r"(?i)country|flag");

    // Text-content patterns per field
    pub static ref TIME_TEXT: Regex = parse_pattern!(r"(?i)ago|before|hour|day|week|month");
    pub static ref QUOTES_TEXT: Regex = parse_pattern!(r"(?i)quote|left");
    pub static ref QUANTITY_TEXT: Regex = parse_pattern!(r"(?i)piece|pcs|unit|box|kg|ton");

    // Badge flags, presence-based on class names
    pub static ref EMAIL_FLAG: Regex = parse_pattern!(r"(?i)email|confirm|verified");
    pub static ref EXPERIENCED_FLAG: Regex = parse_pattern!(r"(?i)experienced|veteran|star");
    pub static ref COMPLETE_ORDER_FLAG: Regex = parse_pattern!(r"(?i)complete|order|rfq");
    pub static ref TYPICAL_REPLIES_FLAG: Regex = parse_pattern!(r"(?i)typical|reply|response");
    pub static ref INTERACTIVE_FLAG: Regex = parse_pattern!(r"(?i)interactive|active|online");

    // Pagination discovery
    pub static ref PAGINATION_CLASS: Regex = parse_pattern!(r"(?i)pag|page");
    pub static ref PAGE_PARAM: Regex = parse_pattern!(r"p=\d+");
    pub static ref NEXT_TEXT: Regex = parse_pattern!(r"(?i)next|more|»|>");

    // Field value extraction
    pub static ref RFQ_ID: Regex = parse_pattern!(r"ID([^&]+)");
    pub static ref INTEGER: Regex = parse_pattern!(r"\d+");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_patterns() {
        assert!(CONTAINER_CLASS.is_match("rfq-item brief-rfq-item"));
        assert!(CONTAINER_CLASS.is_match("InquiryCard"));
        assert!(CONTAINER_CLASS.is_match("request-row"));
        assert!(!CONTAINER_CLASS.is_match("header-nav"));

        assert!(CONTAINER_CLASS_LOOSE.is_match("result-list"));
        assert!(!CONTAINER_CLASS_LOOSE.is_match("banner"));
    }

    #[test]
    fn test_field_class_patterns() {
        assert!(TITLE_CLASS.is_match("brief-title"));
        assert!(TITLE_CLASS.is_match("Subject-Line"));
        assert!(BUYER_CLASS.is_match("buyer-name"));
        assert!(COUNTRY_CLASS.is_match("country-flag-ae"));
    }

    #[test]
    fn test_text_patterns() {
        assert!(TIME_TEXT.is_match("Posted 1 Hour before"));
        assert!(TIME_TEXT.is_match("12 days ago"));
        assert!(QUOTES_TEXT.is_match("Quotes Left 8"));
        assert!(QUANTITY_TEXT.is_match("500 Pieces"));
        assert!(QUANTITY_TEXT.is_match("2 Kg"));
        assert!(!QUANTITY_TEXT.is_match("some description"));
    }

    #[test]
    fn test_flag_patterns() {
        assert!(EMAIL_FLAG.is_match("icon-email-confirmed"));
        assert!(EXPERIENCED_FLAG.is_match("star-buyer"));
        assert!(COMPLETE_ORDER_FLAG.is_match("complete-order-badge"));
        assert!(TYPICAL_REPLIES_FLAG.is_match("typical-reply-icon"));
        assert!(INTERACTIVE_FLAG.is_match("user-online"));
    }

    #[test]
    fn test_pagination_patterns() {
        assert!(PAGINATION_CLASS.is_match("ui2-pagination"));
        assert!(PAGE_PARAM.is_match("/rfq/search?p=3"));
        assert!(!PAGE_PARAM.is_match("/rfq/search?country=AE"));
        assert!(NEXT_TEXT.is_match("Next"));
        assert!(NEXT_TEXT.is_match("»"));
    }

    #[test]
    fn test_rfq_id_extraction() {
        let href = "/rfq/rfqDetail.htm?spm=a27&ID100923847&country=AE";
        let cap = RFQ_ID.captures(href).unwrap();
        assert_eq!(&cap[1], "100923847");

        let href_tail = "/rfq/rfqDetail.htm?ID100923847";
        let cap = RFQ_ID.captures(href_tail).unwrap();
        assert_eq!(&cap[1], "100923847");
    }
}
