//! Best-before date mentions.

use crate::models::insight::BestBeforeDate;

use super::patterns::PatternRegistry;
use super::FieldExtractor;

/// Best-before date extractor.
///
/// Each notation is recognized independently, so a single date may be
/// reported once per notation it fits (e.g. `12 Mar 2024` is both `en`
/// and `fr`).
pub struct BestBeforeDateExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> BestBeforeDateExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }
}

impl FieldExtractor for BestBeforeDateExtractor<'_> {
    type Output = BestBeforeDate;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (kind, regex) in &self.registry.best_before_date {
            for m in regex.find_iter(text) {
                results.push(BestBeforeDate {
                    text: m.as_str().to_string(),
                    kind: *kind,
                });
            }
        }

        results
    }
}

/// Extract best-before dates using the global registry.
pub fn find_best_before_date(text: &str) -> Vec<BestBeforeDate> {
    BestBeforeDateExtractor::new(PatternRegistry::global()).extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insight::BestBeforeDateType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_digits_only() {
        assert_eq!(
            find_best_before_date("12/06/2024"),
            vec![BestBeforeDate {
                text: "12/06/2024".to_string(),
                kind: BestBeforeDateType::FullDigits,
            }]
        );
    }

    #[test]
    fn test_english_only() {
        assert_eq!(
            find_best_before_date("12 Jun 2024"),
            vec![BestBeforeDate {
                text: "12 Jun 2024".to_string(),
                kind: BestBeforeDateType::En,
            }]
        );
    }

    #[test]
    fn test_french_month() {
        let dates = find_best_before_date("A consommer de préférence avant le 15 AOU 2025");
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].kind, BestBeforeDateType::Fr);
        assert_eq!(dates[0].text, "15 AOU 2025");
    }

    #[test]
    fn test_shared_month_matches_both_notations() {
        let kinds: Vec<_> = find_best_before_date("08 mar")
            .into_iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(kinds, vec![BestBeforeDateType::En, BestBeforeDateType::Fr]);
    }

    #[test]
    fn test_two_digit_year_and_dot_separator() {
        let dates = find_best_before_date("DLUO 01.02.25");
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].text, "01.02.25");
    }
}
