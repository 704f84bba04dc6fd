//! Main extraction entry points.
//!
//! This module is the dispatcher: it reads the upload, logs diagnostics
//! alongside, classifies the bytes, and routes to the matching per-format
//! strategy through an exhaustive match over [`FormatCategory`]. Exactly one
//! extraction attempt is made per call, with at most one internal OCR
//! fallback inside the PDF strategy.

use crate::core::config::ExtractionConfig;
use crate::core::{format, io};
use crate::diagnostics;
use crate::extractors;
use crate::types::{ExtractionResult, FormatCategory};
use crate::Result;
use once_cell::sync::Lazy;
use std::path::Path;

/// Global Tokio runtime backing the synchronous wrappers.
///
/// Lazily initialized and shared across all sync calls.
static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to create global Tokio runtime")
});

/// Extract text from an uploaded file.
///
/// `declared_name` is the filename the client supplied with the upload; the
/// stored `path` may carry a sanitized or opaque name, so classification
/// trusts the declared extension first.
///
/// # Errors
///
/// Returns `ExtractError::FileNotFound` when the path does not exist and the
/// per-format failures described in [`crate::ExtractError`] otherwise. An
/// ambiguous or failed extraction is never reported as empty success.
///
/// # Example
///
/// ```rust,no_run
/// use textmill::{extract_file, ExtractionConfig};
///
/// # async fn example() -> textmill::Result<()> {
/// let config = ExtractionConfig::default();
/// let result = extract_file("/uploads/a1b2c3", "essay.docx", &config).await?;
/// println!("{}", result.content);
/// # Ok(())
/// # }
/// ```
pub async fn extract_file(
    path: impl AsRef<Path>,
    declared_name: &str,
    config: &ExtractionConfig,
) -> Result<ExtractionResult> {
    let path = path.as_ref();

    diagnostics::report_upload(path, declared_name);

    let content = io::read_source_file(path).await?;
    let category = format::classify_bytes(declared_name, &content);

    tracing::debug!(
        declared_name,
        category = category.as_str(),
        size_bytes = content.len(),
        "dispatching extraction"
    );

    dispatch(category, declared_name, content, config).await
}

/// Extract text from an in-memory upload buffer.
pub async fn extract_bytes(
    content: &[u8],
    declared_name: &str,
    config: &ExtractionConfig,
) -> Result<ExtractionResult> {
    diagnostics::report_upload_bytes(declared_name, content);

    let category = format::classify_bytes(declared_name, content);
    dispatch(category, declared_name, content.to_vec(), config).await
}

/// Synchronous wrapper over [`extract_file`].
pub fn extract_file_sync(
    path: impl AsRef<Path>,
    declared_name: &str,
    config: &ExtractionConfig,
) -> Result<ExtractionResult> {
    GLOBAL_RUNTIME.block_on(extract_file(path, declared_name, config))
}

/// Synchronous wrapper over [`extract_bytes`].
pub fn extract_bytes_sync(content: &[u8], declared_name: &str, config: &ExtractionConfig) -> Result<ExtractionResult> {
    GLOBAL_RUNTIME.block_on(extract_bytes(content, declared_name, config))
}

async fn dispatch(
    category: FormatCategory,
    declared_name: &str,
    content: Vec<u8>,
    config: &ExtractionConfig,
) -> Result<ExtractionResult> {
    match category {
        FormatCategory::Pdf => extractors::pdf::extract(content, config).await,
        FormatCategory::Docx => extractors::docx::extract(&content),
        FormatCategory::PlainText => extractors::text::extract(content),
        FormatCategory::Image => extractors::image::extract(content, config).await,
        FormatCategory::Unknown => extractors::text::extract_unknown(declared_name, content),
    }
}
