//! Image extraction: OCR is the only strategy.

use crate::core::config::ExtractionConfig;
use crate::ocr::OcrEngine;
use crate::types::{ExtractionMethod, ExtractionResult, FormatCategory};
use crate::Result;

/// Extract text from an image upload.
///
/// There is no primary non-OCR method for raster content; the upload goes
/// straight to the recognition engine and its errors (`OcrInitFailed`,
/// `OcrEmptyResult`) propagate unchanged.
pub async fn extract(content: Vec<u8>, config: &ExtractionConfig) -> Result<ExtractionResult> {
    let engine = OcrEngine::new(config);
    let text = engine.recognize(content).await?;

    Ok(ExtractionResult {
        content: text,
        category: FormatCategory::Image,
        method: ExtractionMethod::Ocr,
    })
}
