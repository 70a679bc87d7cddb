//! Pagination discovery for the RFQ listing
//!
//! Derives the ordered set of listing page URLs to visit from the start
//! page's markup. The site documents no pagination structure, so links are
//! located by class-name and href patterns and the whole step degrades to a
//! single-page plan on any failure.

use scraper::Html;
use url::Url;

use crate::crawler::fetcher::PageFetcher;
use crate::parser::patterns;
use crate::parser::record::{class_matches, element_text};
use crate::utils::origin_url;

/// Discover the ordered listing page URLs reachable from `start_url`.
///
/// The start URL always comes first and no URL is appended twice. Any fetch
/// or parse failure collapses to the single-element plan `[start_url]`;
/// discovery is never fatal.
pub async fn discover(fetcher: &PageFetcher, start_url: &str) -> Vec<String> {
    match fetcher.fetch(start_url).await {
        Ok(html) => {
            let urls = extract_page_links(&html, start_url);
            tracing::debug!(pages = urls.len(), "Discovered listing pages");
            urls
        }
        Err(e) => {
            tracing::warn!(
                url = %start_url,
                error = %e,
                "Pagination discovery failed, falling back to single page"
            );
            vec![start_url.to_string()]
        }
    }
}

/// Collect pagination links from start page markup.
///
/// Looks for a `div`/`ul` pagination container by class pattern and keeps
/// every contained anchor whose href mentions `page` or carries a `p=<n>`
/// query parameter, resolved against the site origin. A whole-page "next"
/// anchor (text `next`/`more`/`»`/`>`) is appended when not already present.
#[must_use]
pub fn extract_page_links(html: &str, start_url: &str) -> Vec<String> {
    let mut urls = vec![start_url.to_string()];

    let Ok(start) = Url::parse(start_url) else {
        return urls;
    };
    let base = origin_url(&start);
    let document = Html::parse_document(html);

    let container = document
        .select(&patterns::PAGINATION_TAGS)
        .find(|el| class_matches(el, &patterns::PAGINATION_CLASS));

    if let Some(container) = container {
        for anchor in container.select(&patterns::ANCHOR) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            if href.to_lowercase().contains("page") || patterns::PAGE_PARAM.is_match(href) {
                if let Ok(resolved) = base.join(href) {
                    let resolved = resolved.to_string();
                    if !urls.contains(&resolved) {
                        urls.push(resolved);
                    }
                }
            }
        }
    }

    // A "next" button may live outside the pagination container
    let next = document
        .select(&patterns::ANCHOR)
        .find(|el| patterns::NEXT_TEXT.is_match(&element_text(el)));

    if let Some(next) = next {
        if let Some(href) = next.value().attr("href") {
            if let Ok(resolved) = base.join(href) {
                let resolved = resolved.to_string();
                if !urls.contains(&resolved) {
                    urls.push(resolved);
                }
            }
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "https://sourcing.alibaba.com/rfq/rfq_search_list.htm?country=AE";

    #[test]
    fn test_start_url_always_first() {
        let urls = extract_page_links("<html><body></body></html>", START);
        assert_eq!(urls, vec![START.to_string()]);
    }

    #[test]
    fn test_extracts_pagination_container_links() {
        let html = r#"<div class="ui2-pagination">
            <a href="/rfq/rfq_search_list.htm?p=2">2</a>
            <a href="/rfq/rfq_search_list.htm?p=3">3</a>
            <a href="/rfq/about.htm">about</a>
        </div>"#;

        let urls = extract_page_links(html, START);

        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], START);
        assert_eq!(
            urls[1],
            "https://sourcing.alibaba.com/rfq/rfq_search_list.htm?p=2"
        );
        assert_eq!(
            urls[2],
            "https://sourcing.alibaba.com/rfq/rfq_search_list.htm?p=3"
        );
    }

    #[test]
    fn test_next_anchor_outside_container() {
        let html = r#"<div class="content">
            <a href="/rfq/rfq_search_list.htm?p=2">Next</a>
        </div>"#;

        let urls = extract_page_links(html, START);

        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls[1],
            "https://sourcing.alibaba.com/rfq/rfq_search_list.htm?p=2"
        );
    }

    #[test]
    fn test_no_duplicate_urls() {
        // The page-2 link appears both in the pagination block and as "Next"
        let html = r#"<ul class="pagination">
            <a href="/rfq/rfq_search_list.htm?p=2">2</a>
        </ul>
        <a href="/rfq/rfq_search_list.htm?p=2">Next »</a>"#;

        let urls = extract_page_links(html, START);

        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_invalid_start_url_degrades() {
        let urls = extract_page_links("<html></html>", "not a url");
        assert_eq!(urls, vec!["not a url".to_string()]);
    }
}
