//! Nutri-Score mention detection.

use crate::models::insight::NutriscoreMention;

use super::patterns::PatternRegistry;
use super::FieldExtractor;

pub struct NutriscoreExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> NutriscoreExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for NutriscoreExtractor<'_> {
    type Output = NutriscoreMention;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.registry
            .nutriscore
            .find_iter(text)
            .map(|m| NutriscoreMention {
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

/// Extract Nutri-Score mentions using the global registry.
pub fn find_nutriscore(text: &str) -> Vec<NutriscoreMention> {
    NutriscoreExtractor::new(PatternRegistry::global()).extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_keep_original_case() {
        let texts: Vec<_> = find_nutriscore("NUTRI-SCORE\nA B C D E\nnutriscore")
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["NUTRI-SCORE", "nutriscore"]);
    }

    #[test]
    fn test_no_mention() {
        assert!(find_nutriscore("nutrition facts").is_empty());
    }
}
