//! Rule-based insight extractors, one per category.

pub mod dates;
pub mod labels;
pub mod nutriscore;
pub mod packager;
pub mod patterns;
pub mod recycling;
pub mod storage;
pub mod temperature;
pub mod weights;

pub use dates::{find_best_before_date, BestBeforeDateExtractor};
pub use labels::{find_labels, LabelExtractor};
pub use nutriscore::{find_nutriscore, NutriscoreExtractor};
pub use packager::{find_packager_codes, PackagerCodeExtractor};
pub use patterns::{PatternRegistry, UnitBoundedPattern, WEIGHT_MENTIONS};
pub use recycling::{find_recycling_instructions, RecyclingExtractor};
pub use storage::{find_storage_instructions, StorageExtractor};
pub use temperature::{parse_temperature, TemperatureParser};
pub use weights::{find_weights, WeightExtractor, WeightMentionExtractor, WeightValueExtractor};

/// Trait for field extractors.
///
/// Extractors are total: any text, empty included, yields a possibly empty
/// list of matches in order of appearance.
pub trait FieldExtractor {
    /// The match record this extractor produces.
    type Output;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }
}
