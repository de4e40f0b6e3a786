// src/config.rs
use crate::args::Args;
pub use md_img2html_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use md_img2html_core::ConvertOptions;
use md_img2html_engine::error::EngineError;

impl TryFrom<&Args> for Config {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let walk = WalkOptionsBuilder::default()
            .root(args.path.clone())
            .hidden(!args.skip_hidden)
            .git_ignore(args.gitignore)
            .max_depth(args.max_depth)
            .follow_links(args.follow)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        ConfigBuilder::default()
            .walk(walk)
            .convert(ConvertOptions {
                escape_attributes: args.escape_attributes,
            })
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}
