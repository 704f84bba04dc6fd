//! DOCX extraction via docx-lite streaming XML parsing.

use crate::types::{ExtractionMethod, ExtractionResult, FormatCategory};
use crate::{ExtractError, Result};
use std::io::Cursor;

/// Extract raw paragraph text from a DOCX upload.
///
/// DOCX gets no OCR fallback: the format is assumed never to be a scanned
/// image, so an empty document is a terminal `DocxEmptyContent` failure
/// rather than an escalation.
pub fn extract(content: &[u8]) -> Result<ExtractionResult> {
    let cursor = Cursor::new(content);
    let doc = docx_lite::parse_document(cursor)
        .map_err(|e| ExtractError::parsing(format!("DOCX parsing failed: {e}")))?;

    let text = doc.extract_text();
    if text.trim().is_empty() {
        return Err(ExtractError::DocxEmptyContent);
    }

    Ok(ExtractionResult {
        content: text,
        category: FormatCategory::Docx,
        method: ExtractionMethod::TextLayer,
    })
}
