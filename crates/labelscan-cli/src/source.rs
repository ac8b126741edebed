//! OCR document sources: local JSON files or the remote product image store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glob::glob;
use serde::Deserialize;
use tracing::debug;

use labelscan_core::models::config::SourceConfig;
use labelscan_core::{is_barcode, split_barcode, OcrDocument};

/// Where the documents of one `extract` run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// All OCR images of a product, fetched by barcode.
    Remote(String),
    /// A single OCR JSON file.
    File(PathBuf),
    /// Every OCR JSON file under a directory.
    Directory(PathBuf),
}

impl InputSource {
    /// Classify a command-line input.
    pub fn resolve(input: &str) -> anyhow::Result<Self> {
        if is_barcode(input) {
            return Ok(Self::Remote(input.to_string()));
        }

        let path = PathBuf::from(input);
        if path.is_dir() {
            Ok(Self::Directory(path))
        } else if path.is_file() {
            Ok(Self::File(path))
        } else {
            anyhow::bail!("Unrecognized input: {}", input)
        }
    }
}

/// List OCR JSON files under `dir` matching `pattern`, sorted by path.
pub fn local_files(dir: &Path, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let full_pattern = dir.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Non UTF-8 path: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = glob(full_pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    debug!("Found {} files matching {}", files.len(), full_pattern);
    Ok(files)
}

/// Read and parse one OCR JSON file.
pub fn read_document(path: &Path) -> anyhow::Result<OcrDocument> {
    Ok(OcrDocument::from_path(path)?)
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    product: Option<ProductImages>,
}

#[derive(Debug, Deserialize)]
struct ProductImages {
    #[serde(default)]
    images: HashMap<String, serde_json::Value>,
}

/// Client for the product API and the static image store.
pub struct RemoteSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl RemoteSource {
    pub fn new(config: &SourceConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Names of the raw (numbered) images of a product, in upload order.
    pub async fn image_names(&self, barcode: &str) -> anyhow::Result<Vec<String>> {
        let url = format!(
            "{}/{}.json?fields=images",
            self.config.product_api_url.trim_end_matches('/'),
            barcode
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("HTTP {} for {}", response.status(), url);
        }

        let body: ProductResponse = response.json().await?;
        let product = body
            .product
            .ok_or_else(|| anyhow::anyhow!("Product {} not found", barcode))?;

        Ok(numbered_images(product.images.into_keys()))
    }

    /// OCR document of one product image, `None` if the store has none.
    pub async fn fetch_document(
        &self,
        barcode: &str,
        image_name: &str,
    ) -> anyhow::Result<Option<OcrDocument>> {
        let url = self.image_json_url(barcode, image_name);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("HTTP {} for {}", response.status(), url);
        }

        let text = response.text().await?;
        Ok(Some(OcrDocument::from_json(&text)?))
    }

    fn image_json_url(&self, barcode: &str, image_name: &str) -> String {
        let [a, b, c, d] = split_barcode(barcode);
        format!(
            "{}/{}/{}/{}/{}/{}.json",
            self.config.image_base_url.trim_end_matches('/'),
            a,
            b,
            c,
            d,
            image_name
        )
    }
}

/// Keep all-digit image names, sorted numerically.
fn numbered_images(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut names: Vec<(u64, String)> = names
        .into_iter()
        .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|n| n.parse().ok().map(|i| (i, n)))
        .collect();
    names.sort();
    names.into_iter().map(|(_, n)| n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_barcode() {
        assert_eq!(
            InputSource::resolve("3263850001234").unwrap(),
            InputSource::Remote("3263850001234".to_string())
        );
    }

    #[test]
    fn test_resolve_missing_path() {
        assert!(InputSource::resolve("/definitely/not/here").is_err());
    }

    #[test]
    fn test_numbered_images() {
        let names = ["front_fr", "10", "2", "ingredients", "1"].map(String::from);
        assert_eq!(numbered_images(names), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_image_json_url() {
        let source = RemoteSource::new(&SourceConfig::default()).unwrap();
        assert_eq!(
            source.image_json_url("3263850001234", "3"),
            "https://static.openfoodfacts.org/images/products/326/385/000/1234/3.json"
        );
    }
}
