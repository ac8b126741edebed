//! OCR document model, shaped like a vision-API annotation response.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DocumentError, Result};

/// OCR output for one image.
///
/// Only the fields needed for insight extraction are modeled; everything
/// else in the response is ignored when parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrDocument {
    /// Per-image responses. Only the first one is read; `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<OcrResponse>,
}

/// A single annotation response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,
}

/// Full-text transcription of an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl OcrDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, DocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse a document file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }

    /// Wrap a plain transcription in a single-response document.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            responses: vec![OcrResponse {
                full_text_annotation: Some(TextAnnotation {
                    text: Some(text.into()),
                }),
            }],
        }
    }

    /// Full text of the first response, if there is any.
    pub fn raw_text(&self) -> Option<&str> {
        self.responses
            .first()?
            .full_text_annotation
            .as_ref()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}
