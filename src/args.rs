// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ファイルごとの進捗とサマリをテキストで逐次表示
    #[default]
    Text,
    /// 実行結果をまとめて JSON で出力
    Json,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "md_img2html",
    version = crate::VERSION,
    about = "Markdown の画像記法 ![alt](url) を <img> タグへ変換します"
)]
pub struct Args {
    /// 対象ディレクトリ（省略時はカレントディレクトリ）
    #[arg(value_name = "DIRECTORY", default_value = ".", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "出力")]
    pub format: OutputFormat,

    /// alt/src 内の & " < > を HTML エスケープする
    #[arg(long, help_heading = "変換")]
    pub escape_attributes: bool,

    /// 隠しファイル・隠しディレクトリを走査しない
    #[arg(long, help_heading = "走査")]
    pub skip_hidden: bool,

    /// .gitignore / .ignore を尊重する
    #[arg(long, help_heading = "走査")]
    pub gitignore: bool,

    /// 最大探索深さ
    #[arg(long, value_name = "N", help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// シンボリックリンクを辿る
    #[arg(short = 'L', long, help_heading = "走査")]
    pub follow: bool,

    /// ログ出力を詳細にする（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,
}
