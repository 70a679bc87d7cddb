//! Heuristic RFQ listing parser
//!
//! The sourcing marketplace exposes no stable markup schema, so extraction
//! works off loose class-name and text patterns ([`patterns`]) applied by a
//! per-field rule list ([`record`]), a page-level scanner ([`page`]) and a
//! relative-time normalizer ([`timeparse`]).

pub mod page;
pub mod patterns;
pub mod record;
pub mod timeparse;

pub use page::PageScanner;
pub use record::RecordExtractor;
pub use timeparse::normalize_relative_time;
