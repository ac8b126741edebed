//! Insight extraction module.

mod aggregator;
pub mod rules;

pub use aggregator::{contiguous_text, InsightAggregator};

use crate::error::ExtractionError;
use crate::models::document::OcrDocument;
use crate::models::insight::Insights;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for insight extractors.
pub trait InsightExtractor {
    /// Extract insights from an OCR document.
    ///
    /// Fails with [`ExtractionError::NoText`] when the document has no
    /// usable text; returns `Ok(None)` when nothing was found.
    fn extract(&self, document: &OcrDocument) -> Result<Option<Insights>>;

    /// Extract insights from plain text. `None` when nothing was found.
    fn extract_from_text(&self, text: &str) -> Option<Insights>;
}
