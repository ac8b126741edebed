//! Core library for product-packaging insight extraction.
//!
//! This crate provides:
//! - OCR document model (vision-API full-text responses)
//! - Pattern registry and per-category insight extractors (weights,
//!   packager codes, Nutri-Score, recycling, labels, storage, best-before)
//! - Aggregation into one insight result per document
//! - Barcode helpers for locating product OCR files

pub mod error;
pub mod insights;
pub mod models;
pub mod product;

pub use error::{DocumentError, ExtractionError, LabelscanError, Result};
pub use insights::rules::PatternRegistry;
pub use insights::{InsightAggregator, InsightExtractor};
pub use models::config::LabelscanConfig;
pub use models::document::OcrDocument;
pub use models::insight::{InsightCategory, InsightRecord, Insights};
pub use product::{barcode_from_path, is_barcode, split_barcode};
