//! PDF extraction: structural text layer first, OCR fallback second.

use crate::core::config::ExtractionConfig;
use crate::ocr::OcrEngine;
use crate::types::{ExtractionMethod, ExtractionResult, FormatCategory};
use crate::{ExtractError, Result};

/// Extract text from a PDF upload.
///
/// Attempts text-layer extraction with lopdf. A parse failure, or a layer
/// shorter than `config.min_text_layer_chars` once trimmed, is treated as
/// "no usable text layer" and escalated to OCR with the original file bytes
/// — exactly one fallback attempt. When OCR also fails, both causes are
/// reported together as `PdfTextLayerAbsent` so the caller can tell "no
/// embedded text" apart from "OCR also failed".
pub async fn extract(content: Vec<u8>, config: &ExtractionConfig) -> Result<ExtractionResult> {
    match parse_text_layer(&content) {
        Ok(text) if text.trim().chars().count() >= config.min_text_layer_chars => Ok(ExtractionResult {
            content: text,
            category: FormatCategory::Pdf,
            method: ExtractionMethod::TextLayer,
        }),
        Ok(text) => {
            tracing::debug!(
                chars = text.trim().chars().count(),
                threshold = config.min_text_layer_chars,
                "PDF text layer below threshold, falling back to OCR"
            );
            ocr_fallback(content, config).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "PDF text layer extraction failed, falling back to OCR");
            ocr_fallback(content, config).await
        }
    }
}

async fn ocr_fallback(content: Vec<u8>, config: &ExtractionConfig) -> Result<ExtractionResult> {
    let engine = OcrEngine::new(config);
    match engine.recognize(content).await {
        Ok(text) => Ok(ExtractionResult {
            content: text,
            category: FormatCategory::Pdf,
            method: ExtractionMethod::Ocr,
        }),
        Err(ocr_cause) => Err(ExtractError::PdfTextLayerAbsent {
            ocr_cause: Some(Box::new(ocr_cause)),
        }),
    }
}

fn parse_text_layer(content: &[u8]) -> Result<String> {
    let doc = lopdf::Document::load_mem(content)
        .map_err(|e| ExtractError::parsing_with_source("failed to parse PDF", e))?;

    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages)
        .map_err(|e| ExtractError::parsing_with_source("failed to extract PDF text layer", e))
}
