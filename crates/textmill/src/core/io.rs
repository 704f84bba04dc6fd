//! File I/O helpers.

use crate::{ExtractError, Result};
use std::path::Path;
use tokio::fs;

/// Read an upload asynchronously.
///
/// A missing file maps to `ExtractError::FileNotFound`; every other I/O
/// failure bubbles up unchanged as `ExtractError::Io`.
pub async fn read_source_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExtractError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ExtractError::Io(e)
        }
    })
}
