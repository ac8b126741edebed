//! Aggregation of every category extractor into one result per document.

use std::time::Instant;

use tracing::debug;

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::document::OcrDocument;
use crate::models::insight::{InsightCategory, Insights};

use super::rules::{
    BestBeforeDateExtractor, FieldExtractor, LabelExtractor, NutriscoreExtractor,
    PackagerCodeExtractor, PatternRegistry, RecyclingExtractor, StorageExtractor,
    WeightExtractor,
};
use super::{InsightExtractor, Result};

/// Replace every line break with a single space so patterns can span
/// what OCR split into separate lines.
pub fn contiguous_text(text: &str) -> String {
    text.replace('\n', " ")
}

/// Runs every enabled category extractor over a document.
///
/// Holds no per-document state: the same aggregator can be shared across
/// threads and always gives the same result for the same text.
#[derive(Debug, Clone)]
pub struct InsightAggregator<'r> {
    registry: &'r PatternRegistry,
    config: ExtractionConfig,
}

impl<'r> InsightAggregator<'r> {
    /// Create an aggregator running every category.
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self::from_config(registry, &ExtractionConfig::default())
    }

    /// Create an aggregator from extraction settings.
    pub fn from_config(registry: &'r PatternRegistry, config: &ExtractionConfig) -> Self {
        Self {
            registry,
            config: config.clone(),
        }
    }

    /// Restrict extraction to the given categories.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = InsightCategory>) -> Self {
        self.config.categories = categories.into_iter().collect();
        self
    }

    /// Extraction settings in effect.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }
}

impl Default for InsightAggregator<'static> {
    fn default() -> Self {
        Self::new(PatternRegistry::global())
    }
}

impl InsightExtractor for InsightAggregator<'_> {
    fn extract(&self, document: &OcrDocument) -> Result<Option<Insights>> {
        let text = document.raw_text().ok_or(ExtractionError::NoText)?;
        Ok(self.extract_from_text(text))
    }

    fn extract_from_text(&self, text: &str) -> Option<Insights> {
        let start = Instant::now();
        let registry = self.registry;
        let contiguous = contiguous_text(text);
        let mut insights = Insights::default();

        if self.config.is_enabled(InsightCategory::Weights) {
            insights.weights = WeightExtractor::new(registry).extract(text);
        }
        if self.config.is_enabled(InsightCategory::PackagerCodes) {
            insights.packager_codes = PackagerCodeExtractor::new(registry).extract_all(&contiguous);
        }
        if self.config.is_enabled(InsightCategory::Nutriscore) {
            insights.nutriscore = NutriscoreExtractor::new(registry).extract_all(text);
        }
        if self.config.is_enabled(InsightCategory::RecyclingInstructions) {
            insights.recycling_instructions =
                RecyclingExtractor::new(registry).extract_all(&contiguous);
        }
        if self.config.is_enabled(InsightCategory::Labels) {
            insights.labels = LabelExtractor::new(registry).extract_all(&contiguous);
        }
        if self.config.is_enabled(InsightCategory::StorageInstructions) {
            insights.storage_instructions = StorageExtractor::new(registry).extract_all(&contiguous);
        }
        if self.config.is_enabled(InsightCategory::BestBeforeDate) {
            insights.best_before_date = BestBeforeDateExtractor::new(registry).extract_all(text);
        }

        debug!(
            "Extracted {} insight categories from {} chars in {}us",
            insights.len(),
            text.len(),
            start.elapsed().as_micros()
        );

        if insights.is_empty() {
            None
        } else {
            Some(insights)
        }
    }
}
