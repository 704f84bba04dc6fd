//! Core types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Closed classification of an uploaded document.
///
/// Assigned by the format classifier and matched exhaustively by the
/// dispatcher, so adding a format is a compile-time-checked change.
/// `Unknown` is a valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    Pdf,
    Docx,
    PlainText,
    Image,
    Unknown,
}

impl FormatCategory {
    /// Human-readable name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatCategory::Pdf => "pdf",
            FormatCategory::Docx => "docx",
            FormatCategory::PlainText => "plain-text",
            FormatCategory::Image => "image",
            FormatCategory::Unknown => "unknown",
        }
    }
}

/// Which strategy produced the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Structural parsing of an embedded text layer (or a direct decode).
    TextLayer,
    /// Optical character recognition of rasterized content.
    Ocr,
}

/// Result of a successful extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The extracted text.
    pub content: String,
    /// Category the dispatcher routed the file under.
    pub category: FormatCategory,
    /// Strategy that produced `content`.
    pub method: ExtractionMethod,
}
