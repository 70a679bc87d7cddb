// Core data structures for the rfqcrawl crawler

use serde::Serialize;

/// Date format used for `inquiry_date` and `scraping_date` fields
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Fixed CSV column headers, in output order
pub const CSV_HEADERS: [&str; 16] = [
    "RFQ ID",
    "Title",
    "Buyer Name",
    "Buyer Image",
    "Inquiry Time",
    "Quotes Left",
    "Country",
    "Quantity Required",
    "Email Confirmed",
    "Experienced Buyer",
    "Complete Order via RFQ",
    "Typical Replies",
    "Interactive User",
    "Inquiry URL",
    "Inquiry Date",
    "Scraping Date",
];

/// One buyer inquiry extracted from a listing page.
///
/// Every field is a plain string so that the CSV output stays rectangular:
/// absent values are empty strings, never omitted columns. The five badge
/// flags hold `"Yes"`/`"No"` and default to `"No"`. A record is built once by
/// the extractor and never mutated afterwards.
///
/// Field declaration order matches the fixed CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfqRecord {
    #[serde(rename = "RFQ ID")]
    pub rfq_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Buyer Name")]
    pub buyer_name: String,
    #[serde(rename = "Buyer Image")]
    pub buyer_image: String,
    #[serde(rename = "Inquiry Time")]
    pub inquiry_time: String,
    #[serde(rename = "Quotes Left")]
    pub quotes_left: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Quantity Required")]
    pub quantity_required: String,
    #[serde(rename = "Email Confirmed")]
    pub email_confirmed: String,
    #[serde(rename = "Experienced Buyer")]
    pub experienced_buyer: String,
    #[serde(rename = "Complete Order via RFQ")]
    pub complete_order_via_rfq: String,
    #[serde(rename = "Typical Replies")]
    pub typical_replies: String,
    #[serde(rename = "Interactive User")]
    pub interactive_user: String,
    #[serde(rename = "Inquiry URL")]
    pub inquiry_url: String,
    #[serde(rename = "Inquiry Date")]
    pub inquiry_date: String,
    #[serde(rename = "Scraping Date")]
    pub scraping_date: String,
}

impl RfqRecord {
    /// Create an empty record carrying the run's scraping date.
    ///
    /// Badge flags start at `"No"`, every other field starts empty.
    #[must_use]
    pub fn new(scraping_date: impl Into<String>) -> Self {
        Self {
            rfq_id: String::new(),
            title: String::new(),
            buyer_name: String::new(),
            buyer_image: String::new(),
            inquiry_time: String::new(),
            quotes_left: String::new(),
            country: String::new(),
            quantity_required: String::new(),
            email_confirmed: String::from("No"),
            experienced_buyer: String::from("No"),
            complete_order_via_rfq: String::from("No"),
            typical_replies: String::from("No"),
            interactive_user: String::from("No"),
            inquiry_url: String::new(),
            inquiry_date: String::new(),
            scraping_date: scraping_date.into(),
        }
    }

    /// A record without a title is not considered a real RFQ.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Result of a full crawl: records in page-visit order, then in-page
/// document order. Duplicate `rfq_id`s across pages are kept as-is.
pub type CrawlResult = Vec<RfqRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = RfqRecord::new("23-08-2026");

        assert_eq!(record.scraping_date, "23-08-2026");
        assert_eq!(record.email_confirmed, "No");
        assert_eq!(record.experienced_buyer, "No");
        assert_eq!(record.complete_order_via_rfq, "No");
        assert_eq!(record.typical_replies, "No");
        assert_eq!(record.interactive_user, "No");
        assert!(record.rfq_id.is_empty());
        assert!(record.title.is_empty());
        assert!(record.inquiry_url.is_empty());
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let mut record = RfqRecord::new("23-08-2026");
        assert!(!record.is_valid());

        record.title = String::from("Wholesale LED strips");
        assert!(record.is_valid());
    }

    #[test]
    fn test_header_count() {
        assert_eq!(CSV_HEADERS.len(), 16);
        assert_eq!(CSV_HEADERS[0], "RFQ ID");
        assert_eq!(CSV_HEADERS[15], "Scraping Date");
    }
}
