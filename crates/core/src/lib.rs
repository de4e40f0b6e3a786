#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod converter;
pub mod stats;

pub use converter::{Conversion, ConvertOptions, convert_line, convert_line_with, convert_text};
pub use stats::{FileStatus, RunSummary};
