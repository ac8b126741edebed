//! Recycling and disposal instructions.

use crate::models::insight::RecyclingInstruction;

use super::patterns::PatternRegistry;
use super::FieldExtractor;

pub struct RecyclingExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> RecyclingExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for RecyclingExtractor<'_> {
    type Output = RecyclingInstruction;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (kind, regexes) in &self.registry.recycling {
            for regex in regexes {
                for m in regex.find_iter(text) {
                    results.push(RecyclingInstruction {
                        text: m.as_str().to_string(),
                        kind: *kind,
                    });
                }
            }
        }

        results
    }
}

/// Extract recycling instructions using the global registry.
pub fn find_recycling_instructions(text: &str) -> Vec<RecyclingInstruction> {
    RecyclingExtractor::new(PatternRegistry::global()).extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insight::RecyclingType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grouped_by_subtype() {
        let results = find_recycling_instructions("Ne pas jeter. Please RECYCLE. Do not throw away");

        let found: Vec<_> = results.iter().map(|r| (r.kind, r.text.as_str())).collect();
        assert_eq!(
            found,
            vec![
                (RecyclingType::Recycling, "RECYCLE"),
                (RecyclingType::ThrowAway, "jeter"),
                (RecyclingType::ThrowAway, "throw away"),
            ]
        );
    }

    #[test]
    fn test_word_must_contain_recycle() {
        let results = find_recycling_instructions("recyclable packaging");
        assert!(results.is_empty());

        let results = find_recycling_instructions("recycled packaging");
        assert_eq!(results.len(), 1);
    }
}
