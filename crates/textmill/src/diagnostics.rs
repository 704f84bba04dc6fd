//! Best-effort diagnostic logging of upload characteristics.
//!
//! Strictly observational: every failure while gathering diagnostics (the
//! file disappearing between calls, a read error) is swallowed. Nothing here
//! may abort or alter an extraction outcome.

use std::io::Read;
use std::path::Path;

const PREVIEW_LEN: usize = 16;

/// Log path, byte size, extension, and a hex preview of the leading bytes.
pub fn report_upload(path: &Path, declared_name: &str) {
    let _ = try_report(path, declared_name);
}

/// Bytes-based variant for in-memory extraction.
pub fn report_upload_bytes(declared_name: &str, content: &[u8]) {
    tracing::info!(
        declared_name,
        size_bytes = content.len(),
        extension = extension_of(declared_name),
        head_hex = %hex_preview(content),
        "ingesting upload"
    );
}

fn try_report(path: &Path, declared_name: &str) -> std::io::Result<()> {
    let metadata = std::fs::metadata(path)?;

    let mut head = [0u8; PREVIEW_LEN];
    let mut file = std::fs::File::open(path)?;
    let n = file.read(&mut head)?;

    tracing::info!(
        path = %path.display(),
        declared_name,
        size_bytes = metadata.len(),
        extension = extension_of(declared_name),
        head_hex = %hex_preview(&head[..n]),
        "ingesting upload"
    );

    Ok(())
}

fn extension_of(declared_name: &str) -> &str {
    Path::new(declared_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
}

fn hex_preview(bytes: &[u8]) -> String {
    hex::encode(&bytes[..bytes.len().min(PREVIEW_LEN)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_report_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"Hello world").unwrap();

        // Must not panic or error outward.
        report_upload(&path, "notes.txt");
    }

    #[test]
    fn test_report_missing_file_is_swallowed() {
        report_upload(Path::new("/nonexistent/ghost.pdf"), "ghost.pdf");
    }

    #[test]
    fn test_hex_preview_truncates() {
        let bytes = vec![0xabu8; 64];
        let preview = hex_preview(&bytes);
        assert_eq!(preview.len(), PREVIEW_LEN * 2);
        assert!(preview.starts_with("abab"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("scan.pdf"), "pdf");
        assert_eq!(extension_of("no-extension"), "");
    }
}
