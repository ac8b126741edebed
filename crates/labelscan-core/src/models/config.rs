//! Configuration structures for the insight pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LabelscanError, Result};

use super::insight::InsightCategory;

/// Main configuration for labelscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelscanConfig {
    /// Insight extraction configuration.
    pub extraction: ExtractionConfig,

    /// OCR document source configuration.
    pub source: SourceConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Insight extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Categories to extract. Categories not listed are never run.
    pub categories: Vec<InsightCategory>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            categories: InsightCategory::ALL.to_vec(),
        }
    }
}

impl ExtractionConfig {
    pub fn is_enabled(&self, category: InsightCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// Where OCR documents are fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Product API base URL, queried as `{url}/{barcode}.json?fields=images`.
    pub product_api_url: String,

    /// Static image base URL holding one OCR JSON per product image.
    pub image_base_url: String,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Glob matched under an input directory.
    pub json_pattern: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            product_api_url: "https://world.openfoodfacts.org/api/v0/product".to_string(),
            image_base_url: "https://static.openfoodfacts.org/images/products".to_string(),
            timeout_secs: 30,
            user_agent: concat!("labelscan/", env!("CARGO_PKG_VERSION")).to_string(),
            json_pattern: "**/*.json".to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print records instead of writing one JSON object per line.
    pub pretty: bool,
}

impl LabelscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            LabelscanError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LabelscanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
