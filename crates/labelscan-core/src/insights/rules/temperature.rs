//! Decomposition of a temperature fragment into value and unit.

use crate::models::insight::{Temperature, TemperatureUnit};

use super::patterns::PatternRegistry;

pub struct TemperatureParser<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> TemperatureParser<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }

    /// Parse a fragment such as `+4°C` or `- 18 c`.
    ///
    /// Matching is anchored at the start of the fragment; trailing text is
    /// ignored. Returns `None` when the fragment does not start with a
    /// temperature.
    pub fn parse(&self, fragment: &str) -> Option<Temperature> {
        let caps = self.registry.temperature.captures(fragment)?;

        Some(Temperature {
            value: caps.name("value").map(|m| m.as_str().to_string()),
            unit: caps
                .name("unit")
                .and_then(|m| TemperatureUnit::from_letter(m.as_str())),
        })
    }
}

/// Parse a temperature fragment using the global registry.
pub fn parse_temperature(fragment: &str) -> Option<Temperature> {
    TemperatureParser::new(PatternRegistry::global()).parse(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signed_value_with_degree() {
        assert_eq!(
            parse_temperature("+4°C"),
            Some(Temperature {
                value: Some("+4".to_string()),
                unit: Some(TemperatureUnit::Celsius),
            })
        );
    }

    #[test]
    fn test_lowercase_unit_without_degree() {
        let temperature = parse_temperature("-18 c").unwrap();
        assert_eq!(temperature.value.as_deref(), Some("-18"));
        assert_eq!(temperature.unit, Some(TemperatureUnit::Celsius));
    }

    #[test]
    fn test_space_after_sign_is_kept() {
        let temperature = parse_temperature("+ 6°c").unwrap();
        assert_eq!(temperature.value.as_deref(), Some("+ 6"));
    }

    #[test]
    fn test_malformed_fragment() {
        assert_eq!(parse_temperature("°C"), None);
        assert_eq!(parse_temperature("four degrees"), None);
        assert_eq!(parse_temperature(""), None);
    }
}
