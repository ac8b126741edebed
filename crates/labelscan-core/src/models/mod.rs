//! Data models: OCR documents in, insights out.

pub mod config;
pub mod document;
pub mod insight;
