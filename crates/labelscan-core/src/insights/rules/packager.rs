//! Packager code extraction (French EMB codes and EC health marks).

use crate::models::insight::PackagerCode;

use super::patterns::PatternRegistry;
use super::FieldExtractor;

/// Packager code extractor.
pub struct PackagerCodeExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> PackagerCodeExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for PackagerCodeExtractor<'_> {
    type Output = PackagerCode;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (kind, regex) in &self.registry.packager_codes {
            for m in regex.find_iter(text) {
                results.push(PackagerCode {
                    text: m.as_str().to_string(),
                    kind: *kind,
                });
            }
        }

        results
    }
}

/// Extract packager codes using the global registry.
pub fn find_packager_codes(text: &str) -> Vec<PackagerCode> {
    PackagerCodeExtractor::new(PatternRegistry::global()).extract_all(text)
}
