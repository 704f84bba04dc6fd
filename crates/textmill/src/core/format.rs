//! Format classification.
//!
//! Determines a [`FormatCategory`] for an upload from its declared filename
//! extension, falling back to a magic-number probe of the leading bytes when
//! the extension is absent or unrecognized. Classification never fails:
//! `Unknown` is always a valid outcome.

use crate::types::FormatCategory;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes read for the magic-number probe. Large enough for
/// every signature `infer` knows about.
const PROBE_LEN: usize = 512;

/// Extension to category mapping. Extensions are matched lowercase.
static EXT_TO_CATEGORY: Lazy<HashMap<&'static str, FormatCategory>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("pdf", FormatCategory::Pdf);

    m.insert("docx", FormatCategory::Docx);
    m.insert("doc", FormatCategory::Docx);

    m.insert("txt", FormatCategory::PlainText);

    m.insert("bmp", FormatCategory::Image);
    m.insert("gif", FormatCategory::Image);
    m.insert("jpg", FormatCategory::Image);
    m.insert("jpeg", FormatCategory::Image);
    m.insert("png", FormatCategory::Image);
    m.insert("tiff", FormatCategory::Image);
    m.insert("tif", FormatCategory::Image);
    m.insert("webp", FormatCategory::Image);

    m
});

/// Classify a file on disk.
///
/// The declared filename's extension wins when recognized; otherwise the
/// file's leading bytes are probed. A file that cannot be read still gets a
/// category (`Unknown` unless the extension already decided).
pub fn classify_file(path: &Path, declared_name: &str) -> FormatCategory {
    if let Some(category) = category_from_extension(declared_name) {
        return category;
    }

    let head = read_leading_bytes(path).unwrap_or_default();
    classify_unrecognized(&head)
}

/// Classify an in-memory buffer with a declared filename.
pub fn classify_bytes(declared_name: &str, content: &[u8]) -> FormatCategory {
    if let Some(category) = category_from_extension(declared_name) {
        return category;
    }

    let head = &content[..content.len().min(PROBE_LEN)];
    classify_unrecognized(head)
}

fn category_from_extension(declared_name: &str) -> Option<FormatCategory> {
    let extension = Path::new(declared_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())?;

    EXT_TO_CATEGORY.get(extension.as_str()).copied()
}

fn classify_unrecognized(head: &[u8]) -> FormatCategory {
    category_from_signature(head).unwrap_or(FormatCategory::Unknown)
}

fn category_from_signature(head: &[u8]) -> Option<FormatCategory> {
    let kind = infer::get(head)?;

    match kind.mime_type() {
        "application/pdf" => Some(FormatCategory::Pdf),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" | "application/msword" => {
            Some(FormatCategory::Docx)
        }
        mime if mime.starts_with("image/") => Some(FormatCategory::Image),
        _ => None,
    }
}

fn read_leading_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = std::fs::File::open(path)?;
    let mut buf = vec![0u8; PROBE_LEN];
    let mut filled = 0;

    // Loop until EOF; a single read may return short on pipes or large files.
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    buf.truncate(filled);
    Ok(buf)
}
