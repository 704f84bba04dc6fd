//! Configuration loading and management.
//!
//! Configuration can be created programmatically, loaded from a TOML file, or
//! discovered as `textmill.toml` in the current directory hierarchy.

use crate::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main extraction configuration.
///
/// # Example
///
/// ```rust
/// use textmill::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert_eq!(config.min_text_layer_chars, 20);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Minimum number of characters a PDF text layer must contain before it
    /// is accepted without OCR. Anything shorter is treated as "no usable
    /// text layer" and escalated to the OCR fallback.
    #[serde(default = "default_min_text_layer_chars")]
    pub min_text_layer_chars: usize,

    /// OCR worker configuration.
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Directory for per-invocation OCR temp artifacts. Shared process-wide;
    /// created on demand. `None` uses `<system temp>/textmill`.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

/// OCR configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language code (e.g. "eng", "deu").
    #[serde(default = "default_language")]
    pub language: String,

    /// Explicit tessdata directory. `None` resolves via `TESSDATA_PREFIX`
    /// and well-known install locations.
    #[serde(default)]
    pub tessdata_path: Option<PathBuf>,
}

fn default_min_text_layer_chars() -> usize {
    20
}

fn default_language() -> String {
    "eng".to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_text_layer_chars: default_min_text_layer_chars(),
            ocr: OcrConfig::default(),
            temp_dir: None,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            tessdata_path: None,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Parsing` if the file cannot be read or is
    /// invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ExtractError::parsing_with_source(
                format!("failed to read config file {}", path.as_ref().display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            ExtractError::parsing_with_source(format!("invalid TOML in {}", path.as_ref().display()), e)
        })
    }

    /// Discover `textmill.toml` in the current directory or any parent.
    ///
    /// Returns `Ok(None)` when no config file exists.
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir()?;

        loop {
            let candidate = current.join("textmill.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve the shared temp directory for OCR artifacts.
    pub fn resolved_temp_dir(&self) -> PathBuf {
        self.temp_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("textmill"))
    }
}
