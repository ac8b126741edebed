//! Storage temperature instructions ("à conserver à +4°C maximum").

use tracing::trace;

use crate::models::insight::{StorageBound, StorageInstruction, StorageType, TemperatureRange};

use super::patterns::PatternRegistry;
use super::temperature::TemperatureParser;
use super::FieldExtractor;

/// Storage instruction extractor. Text is lowercased before matching.
pub struct StorageExtractor<'r> {
    registry: &'r PatternRegistry,
    temperature: TemperatureParser<'r>,
}

impl<'r> StorageExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self {
            registry,
            temperature: TemperatureParser::new(registry),
        }
    }
}

impl FieldExtractor for StorageExtractor<'_> {
    type Output = StorageInstruction;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let text = text.to_lowercase();
        let mut results = Vec::new();

        for (kind, regex) in &self.registry.storage {
            for caps in regex.captures_iter(&text) {
                let group = |i: usize| caps.get(i).and_then(|m| self.temperature.parse(m.as_str()));

                let bound = match kind {
                    StorageType::Max => StorageBound::Max { max: group(1) },
                    StorageType::Between => StorageBound::Between {
                        between: TemperatureRange {
                            min: group(1),
                            max: group(2),
                        },
                    },
                };

                trace!(kind = ?kind, text = &caps[0], "storage instruction");
                results.push(StorageInstruction {
                    text: caps[0].to_string(),
                    bound,
                });
            }
        }

        results
    }
}

/// Extract storage instructions using the global registry.
pub fn find_storage_instructions(text: &str) -> Vec<StorageInstruction> {
    StorageExtractor::new(PatternRegistry::global()).extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insight::{Temperature, TemperatureUnit};
    use pretty_assertions::assert_eq;

    fn celsius(value: &str) -> Option<Temperature> {
        Some(Temperature {
            value: Some(value.to_string()),
            unit: Some(TemperatureUnit::Celsius),
        })
    }

    #[test]
    fn test_max_instruction() {
        assert_eq!(
            find_storage_instructions("À conserver à +4°C maximum"),
            vec![StorageInstruction {
                text: "à conserver à +4°c maximum".to_string(),
                bound: StorageBound::Max { max: celsius("+4") },
            }]
        );
    }

    #[test]
    fn test_between_instruction() {
        assert_eq!(
            find_storage_instructions("A CONSERVER ENTRE 2°C ET 4°C"),
            vec![StorageInstruction {
                text: "a conserver entre 2°c et 4°c".to_string(),
                bound: StorageBound::Between {
                    between: TemperatureRange {
                        min: celsius("2"),
                        max: celsius("4"),
                    },
                },
            }]
        );
    }

    #[test]
    fn test_max_reported_before_between() {
        let results = find_storage_instructions(
            "a conserver entre 0 et +4 c. une fois ouvert, a conserver a 4 c maximum",
        );
        let kinds: Vec<_> = results.iter().map(|r| r.bound.kind()).collect();
        assert_eq!(kinds, vec![StorageType::Max]);

        let results = find_storage_instructions(
            "a conserver entre 0°c et +4°c. une fois ouvert, a conserver a 4°c maximum",
        );
        let kinds: Vec<_> = results.iter().map(|r| r.bound.kind()).collect();
        assert_eq!(kinds, vec![StorageType::Max, StorageType::Between]);
    }

    #[test]
    fn test_no_instruction() {
        assert!(find_storage_instructions("conserver au frais").is_empty());
    }
}
