//! Extraction orchestration: configuration, classification, dispatch, I/O.

pub mod config;
pub mod extractor;
pub mod format;
pub mod io;
