//! Insight data models produced by the extraction engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an extracted insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Net weight mentions and weight values.
    Weights,
    /// Packager / traceability codes.
    PackagerCodes,
    /// Nutri-Score mentions.
    Nutriscore,
    /// Recycling and disposal instructions.
    RecyclingInstructions,
    /// Label claims (organic, ...).
    Labels,
    /// Storage temperature instructions.
    StorageInstructions,
    /// Best-before date mentions.
    BestBeforeDate,
}

impl InsightCategory {
    /// All categories, in output order.
    pub const ALL: [Self; 7] = [
        Self::Weights,
        Self::PackagerCodes,
        Self::Nutriscore,
        Self::RecyclingInstructions,
        Self::Labels,
        Self::StorageInstructions,
        Self::BestBeforeDate,
    ];

    /// Name used as the key in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weights => "weights",
            Self::PackagerCodes => "packager_codes",
            Self::Nutriscore => "nutriscore",
            Self::RecyclingInstructions => "recycling_instructions",
            Self::Labels => "labels",
            Self::StorageInstructions => "storage_instructions",
            Self::BestBeforeDate => "best_before_date",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of packager code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagerCodeType {
    /// French "EMB" traceability code (e.g. `EMB 12345A`).
    FrEmb,
    /// French/EC health mark (e.g. `FR 56.251.001 CE`).
    Fr,
}

impl PackagerCodeType {
    pub const ALL: [Self; 2] = [Self::FrEmb, Self::Fr];
}

/// Kind of recycling instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecyclingType {
    Recycling,
    ThrowAway,
}

impl RecyclingType {
    pub const ALL: [Self; 2] = [Self::Recycling, Self::ThrowAway];
}

/// Label claim, named by its taxonomy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelType {
    #[serde(rename = "en:organic")]
    Organic,
}

impl LabelType {
    pub const ALL: [Self; 1] = [Self::Organic];
}

/// Shape of a storage instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// "à conserver à +4°C maximum"
    Max,
    /// "à conserver entre 0°C et 4°C"
    Between,
}

impl StorageType {
    pub const ALL: [Self; 2] = [Self::Max, Self::Between];
}

/// Date notation recognized for a best-before mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestBeforeDateType {
    /// English month abbreviation (`12 Jun 2024`).
    En,
    /// French month abbreviation (`12 Juin 2024`).
    Fr,
    /// Numeric date (`12/06/2024`, `12.06.24`).
    FullDigits,
}

impl BestBeforeDateType {
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::FullDigits];
}

/// Temperature unit of a storage instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
}

impl TemperatureUnit {
    /// Parse a unit letter, ignoring case.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "C" | "c" => Some(Self::Celsius),
            _ => None,
        }
    }
}

/// A weight phrase such as "Net weight:".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMention {
    pub text: String,
}

/// A numeric weight or volume with its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightValue {
    pub text: String,
    /// Numeric text as printed, decimal separator included.
    pub value: String,
    pub unit: String,
}

/// Weight insights of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightInsights {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<WeightValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<WeightMention>,
}

impl WeightInsights {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.mentions.is_empty()
    }

    /// `None` when neither list has an entry.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagerCode {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: PackagerCodeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutriscoreMention {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecyclingInstruction {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RecyclingType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMention {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: LabelType,
}

/// A temperature parsed out of a storage instruction.
///
/// Either field is omitted when its part could not be captured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    /// Numeric text, sign included (`"+4"`, `"-18"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<TemperatureUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Temperature>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Temperature>,
}

/// Temperature bound of a storage instruction, tagged by its `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageBound {
    Max {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<Temperature>,
    },
    Between {
        between: TemperatureRange,
    },
}

impl StorageBound {
    pub fn kind(&self) -> StorageType {
        match self {
            Self::Max { .. } => StorageType::Max,
            Self::Between { .. } => StorageType::Between,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInstruction {
    pub text: String,
    #[serde(flatten)]
    pub bound: StorageBound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestBeforeDate {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: BestBeforeDateType,
}

/// All insights extracted from one OCR document.
///
/// A category is present only when its extractor found something: empty
/// categories are never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightInsights>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packager_codes: Vec<PackagerCode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nutriscore: Vec<NutriscoreMention>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recycling_instructions: Vec<RecyclingInstruction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<LabelMention>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage_instructions: Vec<StorageInstruction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_before_date: Vec<BestBeforeDate>,
}

impl Insights {
    /// Whether `category` holds at least one match.
    pub fn contains(&self, category: InsightCategory) -> bool {
        match category {
            InsightCategory::Weights => self.weights.as_ref().is_some_and(|w| !w.is_empty()),
            InsightCategory::PackagerCodes => !self.packager_codes.is_empty(),
            InsightCategory::Nutriscore => !self.nutriscore.is_empty(),
            InsightCategory::RecyclingInstructions => !self.recycling_instructions.is_empty(),
            InsightCategory::Labels => !self.labels.is_empty(),
            InsightCategory::StorageInstructions => !self.storage_instructions.is_empty(),
            InsightCategory::BestBeforeDate => !self.best_before_date.is_empty(),
        }
    }

    /// Categories holding at least one match, in output order.
    pub fn categories(&self) -> Vec<InsightCategory> {
        InsightCategory::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Number of categories present.
    pub fn len(&self) -> usize {
        self.categories().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One output line: the insights of a document plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub insights: Insights,

    /// Source file, `None` for documents fetched remotely.
    pub file_path: Option<String>,

    /// Product barcode derived from the file path.
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_insights_serialize_to_empty_object() {
        let insights = Insights::default();
        assert!(insights.is_empty());
        assert_eq!(serde_json::to_value(&insights).unwrap(), json!({}));
    }

    #[test]
    fn test_categories_follow_presence() {
        let insights = Insights {
            nutriscore: vec![NutriscoreMention { text: "Nutri-Score".into() }],
            weights: Some(WeightInsights::default()),
            ..Default::default()
        };

        assert_eq!(insights.categories(), vec![InsightCategory::Nutriscore]);
        assert_eq!(insights.len(), 1);
    }

    #[test]
    fn test_storage_instruction_wire_shape() {
        let instruction = StorageInstruction {
            text: "à conserver entre 2°c et 4°c".into(),
            bound: StorageBound::Between {
                between: TemperatureRange {
                    min: Some(Temperature {
                        value: Some("2".into()),
                        unit: Some(TemperatureUnit::Celsius),
                    }),
                    max: Some(Temperature {
                        value: Some("4".into()),
                        unit: Some(TemperatureUnit::Celsius),
                    }),
                },
            },
        };

        assert_eq!(
            serde_json::to_value(&instruction).unwrap(),
            json!({
                "text": "à conserver entre 2°c et 4°c",
                "type": "between",
                "between": {
                    "min": {"value": "2", "unit": "C"},
                    "max": {"value": "4", "unit": "C"},
                },
            })
        );
    }

    #[test]
    fn test_subtype_names() {
        assert_eq!(serde_json::to_value(LabelType::Organic).unwrap(), json!("en:organic"));
        assert_eq!(serde_json::to_value(PackagerCodeType::FrEmb).unwrap(), json!("fr_emb"));
        assert_eq!(
            serde_json::to_value(BestBeforeDateType::FullDigits).unwrap(),
            json!("full_digits")
        );
        assert_eq!(
            serde_json::to_value(InsightCategory::RecyclingInstructions).unwrap(),
            json!("recycling_instructions")
        );
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = InsightRecord {
            insights: Insights {
                packager_codes: vec![PackagerCode {
                    text: "EMB 12345A".into(),
                    kind: PackagerCodeType::FrEmb,
                }],
                ..Default::default()
            },
            file_path: Some("326/385/000/1234/1.json".into()),
            code: Some("3263850001234".into()),
        };

        let line = serde_json::to_string(&record).unwrap();
        let parsed: InsightRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }
}
