//! Scoped temp-file handling for OCR invocations.

use crate::Result;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// A uniquely-named temporary file owned by one OCR invocation.
///
/// The file is created under the shared temp directory (created on demand;
/// concurrent `create_dir_all` calls are idempotent) and removed when the
/// guard drops — on success, on recognition failure, and on worker
/// initialization failure alike. The name combines a nanosecond timestamp
/// with a UUIDv4 so concurrent invocations never collide.
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Write `bytes` to a fresh artifact under `dir`.
    pub fn write(dir: &Path, bytes: &[u8]) -> Result<Self> {
        std::fs::create_dir_all(dir)?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let name = format!("ocr-{}-{}.img", stamp, Uuid::new_v4().simple());
        let path = dir.join(name);

        std::fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    /// Path of the artifact for the duration of the invocation.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // Nothing to do beyond noting it; the temp dir is shared and the
            // name is unique, so a leaked file cannot affect other calls.
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove OCR temp artifact");
        }
    }
}
