//! Output storage
//!
//! Writes crawl results to disk. CSV is the only supported format.

pub mod csv;

pub use csv::CsvWriter;
