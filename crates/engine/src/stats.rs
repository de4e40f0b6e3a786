use md_img2html_core::{FileStatus, RunSummary};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Path relative to the run root, used for display.
    pub relative: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Everything a run produced, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}

impl RunResult {
    #[must_use]
    pub fn new(root: PathBuf, files_found: usize) -> Self {
        Self {
            root,
            files: Vec::with_capacity(files_found),
            summary: RunSummary::new(files_found),
        }
    }

    pub fn push(&mut self, report: FileReport) {
        self.summary.record(&report.status);
        self.files.push(report);
    }

    /// Reports for files that could not be processed.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|r| matches!(r.status, FileStatus::Failed { .. }))
    }
}
