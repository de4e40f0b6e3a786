// crates/engine/src/lib.rs
use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod progress;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::progress::ProgressSink;
use crate::stats::{FileReport, RunResult};
use md_img2html_core::FileStatus;

/// Convert every Markdown file under the configured root.
///
/// Files are processed one at a time in walk order. A file that fails to read
/// or write is recorded as [`FileStatus::Failed`] and the run moves on.
///
/// # Errors
///
/// Returns [`EngineError::RootNotFound`] before touching anything when the root
/// does not exist, and [`EngineError::Io`] when the sink fails to emit output.
pub fn run<S>(config: &Config, sink: &mut S) -> Result<RunResult>
where
    S: ProgressSink + ?Sized,
{
    let root = &config.walk.root;
    if !root.exists() {
        return Err(EngineError::RootNotFound(root.clone()));
    }

    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.clone());
    sink.on_start(&absolute)?;

    let files = filesystem::collect_markdown_files(&config.walk);
    sink.on_discovered(files.len())?;

    let mut result = RunResult::new(absolute, files.len());
    for path in files {
        let relative = relative_to(root, &path);
        sink.on_file_start(&relative)?;

        let status = match processor::process_file(&path, &config.convert) {
            Ok(count) => FileStatus::from_count(count),
            Err(err) => {
                log::warn!("{err}");
                FileStatus::Failed {
                    message: err.to_string(),
                }
            }
        };

        let report = FileReport {
            path,
            relative,
            status,
        };
        sink.on_file_done(&report)?;
        result.push(report);
    }

    Ok(result)
}

// The root itself may be a single file, in which case show its name.
fn relative_to(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path
            .file_name()
            .map_or_else(|| path.to_path_buf(), PathBuf::from),
    }
}
