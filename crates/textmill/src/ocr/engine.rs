//! OCR fallback engine.
//!
//! Converts raster content into text through an explicit Tesseract worker
//! lifecycle: write the input bytes to a scoped temp artifact, decode it,
//! construct a fresh worker, configure the language, initialize, recognize,
//! release. Every invocation gets its own worker — per-call startup cost is
//! traded for isolation between concurrent requests.

use crate::core::config::ExtractionConfig;
use crate::ocr::temp::TempArtifact;
use crate::{ExtractError, Result};
use kreuzberg_tesseract::TesseractAPI;
use std::path::{Path, PathBuf};

/// Well-known tessdata locations checked when `TESSDATA_PREFIX` is unset.
const TESSDATA_FALLBACK_PATHS: &[&str] = &[
    "/opt/homebrew/share/tessdata",
    "/opt/homebrew/opt/tesseract/share/tessdata",
    "/usr/local/opt/tesseract/share/tessdata",
    "/usr/share/tesseract-ocr/5/tessdata",
    "/usr/share/tesseract-ocr/4/tessdata",
    "/usr/share/tessdata",
    "/usr/local/share/tessdata",
];

/// Recognition worker factory, built from [`ExtractionConfig`] and passed
/// into each extraction call instead of living as process-global state.
#[derive(Debug, Clone)]
pub struct OcrEngine {
    language: String,
    tessdata_path: Option<PathBuf>,
    temp_dir: PathBuf,
}

impl OcrEngine {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            language: config.ocr.language.clone(),
            tessdata_path: config.ocr.tessdata_path.clone(),
            temp_dir: config.resolved_temp_dir(),
        }
    }

    /// Recognize text in `bytes` (an encoded raster image).
    ///
    /// Runs on the blocking pool: worker initialization plus recognition can
    /// take seconds. Fails with `OcrInitFailed` when the artifact cannot be
    /// decoded or the worker cannot be set up, and `OcrEmptyResult` when
    /// recognition completes but yields only whitespace. The temp artifact is
    /// deleted on every exit path.
    pub async fn recognize(&self, bytes: Vec<u8>) -> Result<String> {
        let engine = self.clone();
        tokio::task::spawn_blocking(move || engine.recognize_blocking(&bytes))
            .await
            .map_err(|e| ExtractError::ocr_init(format!("OCR task panicked: {e}")))?
    }

    fn recognize_blocking(&self, bytes: &[u8]) -> Result<String> {
        let artifact = TempArtifact::write(&self.temp_dir, bytes)?;
        // The guard drops (and deletes the file) whether run_worker returns
        // text, an init failure, or an empty-result failure.
        self.run_worker(artifact.path())
    }

    fn run_worker(&self, artifact: &Path) -> Result<String> {
        let img = std::fs::read(artifact)
            .map_err(ExtractError::Io)
            .and_then(|data| {
                image::load_from_memory(&data)
                    .map_err(|e| ExtractError::ocr_init_with_source("failed to decode image for OCR", e))
            })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let bytes_per_pixel = 3i32;
        let bytes_per_line = width as i32 * bytes_per_pixel;

        if self.language.trim().is_empty() {
            return Err(ExtractError::ocr_init(
                "language cannot be empty; specify a valid code such as 'eng'",
            ));
        }

        let tessdata = self.resolve_tessdata();
        self.validate_traineddata(&tessdata)?;

        let api = TesseractAPI::new()
            .map_err(|e| ExtractError::ocr_init(format!("failed to create worker: {e}")))?;
        api.init(&tessdata, &self.language).map_err(|e| {
            ExtractError::ocr_init(format!(
                "failed to initialize worker for language '{}': {e}",
                self.language
            ))
        })?;

        api.set_image(
            rgb.as_raw(),
            width as i32,
            height as i32,
            bytes_per_pixel,
            bytes_per_line,
        )
        .map_err(|e| ExtractError::ocr_init(format!("failed to load image into worker: {e}")))?;

        api.recognize()
            .map_err(|e| ExtractError::ocr_init(format!("recognition failed: {e}")))?;

        let text = api
            .get_utf8_text()
            .map_err(|e| ExtractError::ocr_init(format!("failed to read recognized text: {e}")))?;

        if text.trim().is_empty() {
            return Err(ExtractError::OcrEmptyResult);
        }

        Ok(text)
    }

    fn resolve_tessdata(&self) -> String {
        if let Some(path) = &self.tessdata_path {
            return path.display().to_string();
        }

        std::env::var("TESSDATA_PREFIX")
            .ok()
            .or_else(|| {
                TESSDATA_FALLBACK_PATHS
                    .iter()
                    .find(|p| Path::new(p).exists())
                    .map(|p| (*p).to_string())
            })
            .unwrap_or_default()
    }

    // A missing traineddata file can crash the worker during init instead of
    // returning an error, so check up front.
    fn validate_traineddata(&self, tessdata: &str) -> Result<()> {
        if tessdata.is_empty() {
            return Ok(());
        }

        for lang in self.language.split('+') {
            let lang = lang.trim();
            if lang.is_empty() {
                continue;
            }
            let traineddata = Path::new(tessdata).join(format!("{lang}.traineddata"));
            if !traineddata.exists() {
                return Err(ExtractError::ocr_init(format!(
                    "language '{}' not found: missing {}",
                    lang,
                    traineddata.display()
                )));
            }
        }

        Ok(())
    }
}
