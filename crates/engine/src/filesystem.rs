use crate::config::WalkOptions;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_SUFFIX: &[u8] = b".md";

/// Whether `path` names a Markdown file (`*.md`, case-sensitive).
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(MARKDOWN_SUFFIX))
}

/// Sequential recursive directory walk collecting Markdown files.
///
/// Entries are sorted by file name inside each directory, so the order is
/// stable between runs. Only regular files are returned, including symlinks
/// that resolve to one; a directory whose name ends in `.md` is descended
/// into, never processed. Symlinked directories are only entered with
/// `follow_links`. Entries that cannot be read are logged and skipped.
#[must_use]
pub fn collect_markdown_files(options: &WalkOptions) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(&options.root);

    builder
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .git_global(options.git_ignore)
        .git_exclude(options.git_ignore)
        .ignore(options.git_ignore)
        .parents(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        if is_markdown(entry.path()) && resolves_to_file(&entry) {
            files.push(entry.into_path());
        }
    }

    log::info!(
        "Discovered {} markdown file(s) under {}",
        files.len(),
        options.root.display()
    );
    files
}

// Without `follow_links` the walker reports symlinks as such; a link to a
// regular file still counts, a link to a directory does not.
fn resolves_to_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}
