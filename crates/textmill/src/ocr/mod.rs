//! OCR fallback engine and its scoped temp-file handling.

pub mod engine;
pub mod temp;

pub use engine::OcrEngine;
pub use temp::TempArtifact;
