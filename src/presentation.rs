// src/presentation.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use md_img2html_core::{FileStatus, RunSummary};
use md_img2html_engine::progress::ProgressSink;
use md_img2html_engine::stats::{FileReport, RunResult};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

const RULE: &str = "============================================================";

/// Streams the human-readable report while the engine runs.
pub struct TextReporter<W: Write> {
    out: W,
    found: usize,
}

impl<W: Write> TextReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out, found: 0 }
    }

    /// Print the closing summary block. Nothing is printed when no file was found.
    ///
    /// # Errors
    /// Returns an error if writing to the output fails.
    pub fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        if self.found == 0 {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Conversion complete!")?;
        writeln!(self.out, "Files modified: {}", summary.files_modified)?;
        writeln!(self.out, "Total images converted: {}", summary.images_converted)?;
        if summary.files_failed > 0 {
            writeln!(self.out, "Files failed: {}", summary.files_failed)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for TextReporter<W> {
    fn on_start(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Starting conversion in directory: {}", root.display())?;
        writeln!(self.out, "{RULE}")
    }

    fn on_discovered(&mut self, count: usize) -> io::Result<()> {
        self.found = count;
        if count == 0 {
            writeln!(self.out, "No markdown files found.")
        } else {
            writeln!(self.out, "Found {count} markdown file(s)\n")
        }
    }

    fn on_file_start(&mut self, relative: &Path) -> io::Result<()> {
        writeln!(self.out, "Processing: {}", relative.display())
    }

    fn on_file_done(&mut self, report: &FileReport) -> io::Result<()> {
        match &report.status {
            FileStatus::Converted { images } => {
                writeln!(self.out, "  ✓ Converted {images} image(s)")
            }
            FileStatus::Unchanged => writeln!(self.out, "  - No images found"),
            FileStatus::Failed { message } => {
                writeln!(self.out, "  ✗ Error processing file: {message}")
            }
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'a str,
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    result: &'a RunResult,
}

/// Write the whole run as one pretty-printed JSON document.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    let report = JsonReport {
        version: crate::VERSION,
        generated_at: Local::now(),
        result,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("failed to serialize report")?;
    writeln!(out).context("failed to write report")?;
    Ok(())
}
