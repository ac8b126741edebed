//! Label claims such as organic farming mentions.

use crate::models::insight::LabelMention;

use super::patterns::PatternRegistry;
use super::FieldExtractor;

/// Label extractor. Text is lowercased before matching, so reported
/// `text` values are lowercase.
pub struct LabelExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> LabelExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for LabelExtractor<'_> {
    type Output = LabelMention;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let text = text.to_lowercase();
        let mut results = Vec::new();

        for (kind, regexes) in &self.registry.labels {
            for regex in regexes {
                for m in regex.find_iter(&text) {
                    results.push(LabelMention {
                        text: m.as_str().to_string(),
                        kind: *kind,
                    });
                }
            }
        }

        results
    }
}

/// Extract label mentions using the global registry.
pub fn find_labels(text: &str) -> Vec<LabelMention> {
    LabelExtractor::new(PatternRegistry::global()).extract_all(text)
}
