//! Command-line argument definitions for the Montage CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the expression to parse, the canvas it
//! is parsed for, grammar queries and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Montage expression tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Expression to parse
    #[arg(
        help = "Expression to parse, e.g. \"img.jpg:scale(50%);round(10px)\"",
        required_unless_present_any = ["file", "grammar", "describe"],
        conflicts_with = "file"
    )]
    pub expression: Option<String>,

    /// Path to a file containing the expression
    #[arg(short, long)]
    pub file: Option<String>,

    /// Path to write the report to instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Canvas width in pixels, overriding the configuration
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels, overriding the configuration
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the full grammar and exit
    #[arg(long)]
    pub grammar: bool,

    /// Print the rule of one grammar production and exit
    #[arg(long, value_name = "PRODUCTION")]
    pub describe: Option<String>,

    /// Include the parsed pipeline structure in the report
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
