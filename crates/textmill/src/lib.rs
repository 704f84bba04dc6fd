//! Textmill - document ingestion and text-extraction pipeline.
//!
//! Given an uploaded file (PDF, DOCX, plain text, or image), textmill
//! produces machine-readable text, falling back to optical character
//! recognition when structural parsing fails or yields insufficient content.
//! Temporary OCR artifacts are scoped to a single invocation and cleaned up
//! on every exit path, so the pipeline is safe under concurrent uploads.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use textmill::{extract_file_sync, ExtractionConfig};
//!
//! # fn main() -> textmill::Result<()> {
//! let config = ExtractionConfig::default();
//! let result = extract_file_sync("/uploads/3f2a", "homework.pdf", &config)?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `core::format` — closed classification of an upload into a
//!   [`FormatCategory`] from extension and leading-byte signatures
//! - `core::extractor` — the dispatcher: exhaustive match over the category,
//!   async entry points plus sync wrappers
//! - `extractors` — one strategy per format (PDF text layer, DOCX paragraph
//!   text, verbatim UTF-8, OCR for images)
//! - `ocr` — per-invocation Tesseract worker with scoped temp-file handling
//! - `diagnostics` — best-effort observational logging, never part of the
//!   control flow

#![deny(unsafe_code)]

pub mod core;
pub mod diagnostics;
pub mod error;
pub mod extractors;
pub mod ocr;
pub mod types;

pub use error::{ExtractError, Result};
pub use types::{ExtractionMethod, ExtractionResult, FormatCategory};

pub use crate::core::config::{ExtractionConfig, OcrConfig};
pub use crate::core::extractor::{extract_bytes, extract_bytes_sync, extract_file, extract_file_sync};
pub use crate::core::format::{classify_bytes, classify_file};
pub use crate::ocr::OcrEngine;
