//! Per-format extraction strategies.
//!
//! One module per [`FormatCategory`](crate::FormatCategory); the dispatcher
//! in `core::extractor` routes to these through an exhaustive match.

pub mod docx;
pub mod image;
pub mod pdf;
pub mod text;
