use derive_builder::Builder;
use md_img2html_core::ConvertOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Include hidden files and directories.
    #[builder(default = "true")]
    pub hidden: bool,
    /// Honour `.gitignore`, `.ignore` and git exclude files.
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            hidden: true,
            git_ignore: false,
            max_depth: None,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub convert: ConvertOptions,
}
