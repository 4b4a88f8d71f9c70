//! Montage CLI library
//!
//! This module contains the core CLI logic for the Montage expression tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use montage::{MontageError, PipelineBuilder, pipeline::Pipeline};

/// Run the Montage CLI application
///
/// This function parses the expression given on the command line (or read
/// from `--file`) and writes a report of the resulting pipeline to the
/// output file, or standard output when none is given. `--grammar` and
/// `--describe` print grammar rules instead.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MontageError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Unknown grammar productions
pub fn run(args: &Args) -> Result<(), MontageError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let canvas = app_config
        .canvas()
        .with_overrides(args.width, args.height);
    let builder = PipelineBuilder::new(app_config.with_canvas(canvas));

    let report = if args.grammar {
        builder.grammar().to_string()
    } else if let Some(production) = &args.describe {
        format!("{production} ::= {}\n", builder.describe(production)?)
    } else {
        let pipeline = match (&args.file, &args.expression) {
            (Some(path), _) => {
                info!(input_path = path; "Processing expression file");
                builder.parse_file(path)?
            }
            (None, Some(expression)) => {
                info!("Processing expression");
                builder.parse(expression)?
            }
            (None, None) => {
                return Err(MontageError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "no expression given",
                )));
            }
        };
        info!(layers = pipeline.len(); "Expression parsed successfully");
        format_report(&pipeline, args.verbose)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            info!(output_file = path; "Report written");
        }
        None => io::stdout().write_all(report.as_bytes())?,
    }

    Ok(())
}

/// One line per layer, optionally followed by the full pipeline structure.
fn format_report(pipeline: &Pipeline, verbose: bool) -> String {
    let mut report = format!(
        "{} layer(s) on a {} canvas\n",
        pipeline.len(),
        pipeline.canvas()
    );
    for (index, layer) in pipeline.iter().enumerate() {
        report.push_str(&format!("  [{index}] {layer}\n"));
    }
    if verbose {
        report.push_str(&format!("{pipeline:#?}\n"));
    }
    report
}
