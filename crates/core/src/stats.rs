use serde::{Deserialize, Serialize};

/// What happened to a single file during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was rewritten with `images` replacements.
    Converted { images: usize },
    /// Nothing matched; the file was not written.
    Unchanged,
    /// Reading or writing failed; the file counts as zero conversions.
    Failed { message: String },
}

impl FileStatus {
    /// Status for a successfully processed file with `images` replacements.
    #[must_use]
    pub const fn from_count(images: usize) -> Self {
        if images == 0 {
            Self::Unchanged
        } else {
            Self::Converted { images }
        }
    }

    /// Number of images this file contributes to the run total.
    #[must_use]
    pub const fn images(&self) -> usize {
        match self {
            Self::Converted { images } => *images,
            Self::Unchanged | Self::Failed { .. } => 0,
        }
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Markdown files discovered under the root.
    pub files_found: usize,
    /// Files rewritten on disk.
    pub files_modified: usize,
    /// Files that could not be read or written.
    pub files_failed: usize,
    /// Total replacements across all modified files.
    pub images_converted: usize,
}

impl RunSummary {
    #[must_use]
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            ..Self::default()
        }
    }

    /// Fold one file's status into the counters.
    pub fn record(&mut self, status: &FileStatus) {
        match status {
            FileStatus::Converted { images } => {
                self.files_modified += 1;
                self.images_converted += *images;
            }
            FileStatus::Unchanged => {}
            FileStatus::Failed { .. } => self.files_failed += 1,
        }
    }
}
