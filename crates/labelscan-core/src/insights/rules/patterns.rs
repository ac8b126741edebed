//! Compiled regex patterns for insight extraction, grouped by category.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::ExtractionError;
use crate::models::insight::{
    BestBeforeDateType, LabelType, PackagerCodeType, RecyclingType, StorageType,
};

/// Weight phrases, matched case-insensitively.
pub const WEIGHT_MENTIONS: &[&str] = &[
    "poids net:",
    "poids net égoutté:",
    "net weight:",
    "peso neto:",
    "peso liquido:",
    "netto gewicht:",
];

const NUTRISCORE: &str = r"(?i)nutri[-\s]?score";

const WEIGHT_VALUE: &str = r"([0-9]+[,.]?[0-9]*)\s*(fl oz|dl|cl|mg|mL|lbs|oz|g|kg|L)";

/// Signed integer, optional degree mark, unit letter.
const TEMPERATURE: &str = r"[+-]?\s*\d+\s*°?c";

const TEMPERATURE_PARTS: &str = r"(?i)^(?P<value>[+-]?\s*\d+)\s*°?(?P<unit>c)";

fn packager_code_pattern(kind: PackagerCodeType) -> &'static str {
    match kind {
        PackagerCodeType::FrEmb => r"EMB ?(\d ?\d ?\d ?\d ?\d)([a-zA-Z]{1,2})?",
        PackagerCodeType::Fr => r"FR [a-zA-Z0-9.\-\s]{2,}? (?:CE|EC)",
    }
}

fn recycling_patterns(kind: RecyclingType) -> &'static [&'static str] {
    match kind {
        RecyclingType::Recycling => &[r"(?i)recycle"],
        RecyclingType::ThrowAway => &[r"(?i)(?:throw away)|(?:jeter)"],
    }
}

// Matched against lowercased text.
fn label_patterns(kind: LabelType) -> &'static [&'static str] {
    match kind {
        LabelType::Organic => &[
            r"ingr[ée]dients?\sbiologiques?",
            r"agriculture ue/non ue biologique",
        ],
    }
}

fn storage_pattern(kind: StorageType) -> String {
    match kind {
        StorageType::Max => format!(r"(?i)[aà] conserver [àa] ({TEMPERATURE}) maximum"),
        StorageType::Between => {
            format!(r"(?i)[aà] conserver entre ({TEMPERATURE}) et ({TEMPERATURE})")
        }
    }
}

fn best_before_date_pattern(kind: BestBeforeDateType) -> &'static str {
    match kind {
        BestBeforeDateType::En => {
            r"(?i)\d\d\s(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)(?:\s\d{4})?"
        }
        BestBeforeDateType::Fr => {
            r"(?i)\d\d\s(?:jan|fev|mar|avr|mai|juin|juil|aou|sep|oct|nov|dec)(?:\s\d{4})?"
        }
        BestBeforeDateType::FullDigits => r"\d{2}[./]\d{2}[./](?:\d{2}){1,2}",
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ExtractionError> {
    Regex::new(pattern).map_err(|source| ExtractionError::InvalidPattern { name, source })
}

fn compile_each<K: Copy, S: AsRef<str>>(
    name: &'static str,
    kinds: &[K],
    pattern: impl Fn(K) -> S,
) -> Result<Vec<(K, Regex)>, ExtractionError> {
    let mut table = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        table.push((kind, compile(name, pattern(kind).as_ref())?));
    }
    Ok(table)
}

fn compile_alternatives<K: Copy>(
    name: &'static str,
    kinds: &[K],
    patterns: impl Fn(K) -> &'static [&'static str],
) -> Result<Vec<(K, Vec<Regex>)>, ExtractionError> {
    let mut table = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let mut regexes = Vec::new();
        for pattern in patterns(kind) {
            regexes.push(compile(name, pattern)?);
        }
        table.push((kind, regexes));
    }
    Ok(table)
}

/// A pattern whose match must be followed by whitespace or the end of text.
///
/// A candidate followed by any other character is rejected and the scan
/// resumes one character after its start, so `25grammes` yields nothing
/// while `25g` at the end of a line matches.
#[derive(Debug, Clone)]
pub struct UnitBoundedPattern {
    regex: Regex,
}

impl UnitBoundedPattern {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// All non-overlapping accepted matches, left to right.
    pub fn captures_iter<'t>(&self, text: &'t str) -> Vec<Captures<'t>> {
        let mut results = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.regex.captures_at(text, pos) else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };

            let bounded = text[m.end()..]
                .chars()
                .next()
                .is_none_or(char::is_whitespace);

            if bounded && !m.is_empty() {
                pos = m.end();
                results.push(caps);
            } else {
                pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            }
        }

        results
    }
}

/// Immutable table of every compiled insight pattern.
///
/// Built once and shared by reference; subtype tables keep their
/// declaration order, which is the order matches are reported in.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    pub nutriscore: Regex,
    pub weight_mentions: Regex,
    pub weight_values: UnitBoundedPattern,
    pub packager_codes: Vec<(PackagerCodeType, Regex)>,
    pub recycling: Vec<(RecyclingType, Vec<Regex>)>,
    pub labels: Vec<(LabelType, Vec<Regex>)>,
    pub storage: Vec<(StorageType, Regex)>,
    pub temperature: Regex,
    pub best_before_date: Vec<(BestBeforeDateType, Regex)>,
}

lazy_static! {
    static ref REGISTRY: PatternRegistry =
        PatternRegistry::new().expect("built-in insight patterns must compile");
}

impl PatternRegistry {
    /// Compile the built-in patterns.
    pub fn new() -> Result<Self, ExtractionError> {
        let mentions = WEIGHT_MENTIONS
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            nutriscore: compile("nutriscore", NUTRISCORE)?,
            weight_mentions: compile("weight_mentions", &format!("(?i){mentions}"))?,
            weight_values: UnitBoundedPattern::new(compile("weight_values", WEIGHT_VALUE)?),
            packager_codes: compile_each(
                "packager_codes",
                &PackagerCodeType::ALL,
                packager_code_pattern,
            )?,
            recycling: compile_alternatives(
                "recycling_instructions",
                &RecyclingType::ALL,
                recycling_patterns,
            )?,
            labels: compile_alternatives("labels", &LabelType::ALL, label_patterns)?,
            storage: compile_each("storage_instructions", &StorageType::ALL, storage_pattern)?,
            temperature: compile("temperature", TEMPERATURE_PARTS)?,
            best_before_date: compile_each(
                "best_before_date",
                &BestBeforeDateType::ALL,
                best_before_date_pattern,
            )?,
        })
    }

    /// Process-wide registry, compiled on first use.
    pub fn global() -> &'static Self {
        &REGISTRY
    }
}
