// src/main.rs
use clap::Parser;
use md_img2html::args::{Args, OutputFormat};
use md_img2html::config::Config;
use md_img2html::{logging, presentation};
use md_img2html_engine::error::EngineError;
use md_img2html_engine::progress::NullSink;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match args.format {
        OutputFormat::Text => run_text(&config),
        OutputFormat::Json => run_json(&config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<EngineError>() {
                Some(EngineError::RootNotFound(_)) => {
                    eprintln!("Error: Directory '{}' does not exist", args.path.display());
                }
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run_text(config: &Config) -> anyhow::Result<()> {
    let mut reporter = presentation::TextReporter::new(io::stdout().lock());
    let result = md_img2html_engine::run(config, &mut reporter)?;
    reporter.finish(&result.summary)?;
    Ok(())
}

fn run_json(config: &Config) -> anyhow::Result<()> {
    let result = md_img2html_engine::run(config, &mut NullSink)?;
    let mut out = io::stdout().lock();
    presentation::write_json(&mut out, &result)?;
    out.flush()?;
    Ok(())
}
