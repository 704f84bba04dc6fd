//! Error types for textmill.
//!
//! All fallible operations in the pipeline return [`Result`]. The taxonomy is
//! deliberately closed: callers match on variants to decide how an upload
//! failure is reported, so an ambiguous or failed extraction must never be
//! downgraded to a successful empty result.
//!
//! System errors (`Io`) bubble up unchanged — a permission error or a
//! disappearing file is a real problem the caller needs to see, not something
//! to wrap into a format error. Application errors carry context and, where a
//! fallback chain was involved, the chained cause of both attempts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failure taxonomy of the extraction pipeline.
///
/// `PdfTextLayerAbsent` is the only chained variant: when a PDF has no usable
/// text layer *and* the OCR fallback also failed, the OCR cause is preserved
/// so a caller can distinguish "no embedded text" from "OCR also broke".
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("DOCX document contains no extractable text")]
    DocxEmptyContent,

    #[error("PDF has no usable text layer")]
    PdfTextLayerAbsent {
        #[source]
        ocr_cause: Option<Box<ExtractError>>,
    },

    #[error("OCR worker initialization failed: {message}")]
    OcrInitFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR produced no text")]
    OcrEmptyResult,

    #[error("content is not valid UTF-8")]
    DecodeFailed {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ExtractError {
    /// Create a `Parsing` error from a message.
    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a `Parsing` error with the underlying parser failure attached.
    pub fn parsing_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parsing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an `OcrInitFailed` error from a message.
    pub fn ocr_init<S: Into<String>>(message: S) -> Self {
        Self::OcrInitFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create an `OcrInitFailed` error with source.
    pub fn ocr_init_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::OcrInitFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
