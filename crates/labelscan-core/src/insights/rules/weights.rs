//! Net weight mentions and weight/volume values.

use crate::models::insight::{WeightInsights, WeightMention, WeightValue};

use super::patterns::PatternRegistry;
use super::FieldExtractor;

/// Finds weight phrases such as "Poids net:" or "Net weight:".
pub struct WeightMentionExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> WeightMentionExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for WeightMentionExtractor<'_> {
    type Output = WeightMention;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.registry
            .weight_mentions
            .find_iter(text)
            .map(|m| WeightMention {
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

/// Finds numeric weights and volumes (`250 g`, `1,5 kg`, `33 cl`).
pub struct WeightValueExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> WeightValueExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for WeightValueExtractor<'_> {
    type Output = WeightValue;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.registry
            .weight_values
            .captures_iter(text)
            .into_iter()
            .map(|caps| WeightValue {
                text: caps[0].to_string(),
                value: caps[1].to_string(),
                unit: caps[2].to_string(),
            })
            .collect()
    }
}

/// Runs both weight extractors over the same text.
pub struct WeightExtractor<'r> {
    mentions: WeightMentionExtractor<'r>,
    values: WeightValueExtractor<'r>,
}

impl<'r> WeightExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self {
            mentions: WeightMentionExtractor::new(registry),
            values: WeightValueExtractor::new(registry),
        }
    }

    /// Weight insights, or `None` when neither mentions nor values match.
    pub fn extract(&self, text: &str) -> Option<WeightInsights> {
        WeightInsights {
            values: self.values.extract_all(text),
            mentions: self.mentions.extract_all(text),
        }
        .non_empty()
    }
}

/// Extract weight insights using the global registry.
pub fn find_weights(text: &str) -> Option<WeightInsights> {
    WeightExtractor::new(PatternRegistry::global()).extract(text)
}
