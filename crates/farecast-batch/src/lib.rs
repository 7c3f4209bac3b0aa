//! # farecast-batch
//!
//! Batch mode: a comma-separated file whose header must equal the
//! trained ten-column schema exactly, read fully into memory,
//! predicted row by row, and handed back as a self-contained
//! downloadable payload with one appended prediction column.
//!
//! The header is validated *before* any prediction call, so a
//! malformed upload fails fast with a diagnostic naming the offending
//! column instead of surfacing as a model fault.

pub mod reader;
pub mod writer;

pub use reader::read_records;
pub use writer::{to_download_uri, write_augmented};
