//! Plain-text and unknown-format extraction.

use crate::types::{ExtractionMethod, ExtractionResult, FormatCategory};
use crate::{ExtractError, Result};

/// Decode a plain-text upload.
///
/// The bytes are returned verbatim as UTF-8: no trimming, no emptiness
/// rejection. An empty file yields empty text; whether that is acceptable is
/// the caller's decision, not this pipeline's.
pub fn extract(content: Vec<u8>) -> Result<ExtractionResult> {
    let text = String::from_utf8(content).map_err(|e| ExtractError::DecodeFailed { source: e })?;

    Ok(ExtractionResult {
        content: text,
        category: FormatCategory::PlainText,
        method: ExtractionMethod::TextLayer,
    })
}

/// Last-resort handling for uploads no classifier rule matched.
///
/// A UTF-8 decode that yields non-empty text is accepted; anything else is
/// an unsupported format, never a silent empty success.
pub fn extract_unknown(declared_name: &str, content: Vec<u8>) -> Result<ExtractionResult> {
    match String::from_utf8(content) {
        Ok(text) if !text.is_empty() => Ok(ExtractionResult {
            content: text,
            category: FormatCategory::Unknown,
            method: ExtractionMethod::TextLayer,
        }),
        _ => Err(ExtractError::UnsupportedFormat(declared_name.to_string())),
    }
}
