// crates/engine/src/progress.rs
use crate::stats::FileReport;
use std::io;
use std::path::Path;

/// Receives run events as they happen, in file order.
///
/// All methods default to doing nothing. An error returned from any of them
/// stops the run.
pub trait ProgressSink {
    /// The root was validated; `root` is its absolute form.
    fn on_start(&mut self, _root: &Path) -> io::Result<()> {
        Ok(())
    }

    /// Discovery finished with `count` Markdown files.
    fn on_discovered(&mut self, _count: usize) -> io::Result<()> {
        Ok(())
    }

    /// About to process the file at `relative` (relative to the root).
    fn on_file_start(&mut self, _relative: &Path) -> io::Result<()> {
        Ok(())
    }

    /// The file finished with the status in `report`.
    fn on_file_done(&mut self, _report: &FileReport) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {}
