use crate::error::{EngineError, Result};
use md_img2html_core::{ConvertOptions, convert_text};
use std::fs;
use std::path::Path;

/// Convert the images of a single Markdown file in place.
///
/// The file is read as UTF-8 and rewritten only when at least one image was
/// converted; an unchanged file is never opened for writing.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] when the file cannot be read or is not
/// valid UTF-8, and [`EngineError::FileWrite`] when the rewrite fails.
pub fn process_file(path: &Path, options: &ConvertOptions) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let converted = convert_text(&content, options);
    if !converted.changed() {
        log::debug!("{}: no images", path.display());
        return Ok(0);
    }

    fs::write(path, converted.text.as_bytes()).map_err(|source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{}: rewrote {} image(s)", path.display(), converted.count);

    Ok(converted.count)
}
