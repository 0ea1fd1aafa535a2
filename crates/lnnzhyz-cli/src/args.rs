//! Command-line argument definitions for the LNNZHYZ CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the input language,
//! the output format, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use lnnzhyz::Language;

/// What the CLI writes to its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Inline SVG image
    #[default]
    Svg,
    /// Raw SVG path data
    Path,
    /// Textual notation of the compiled characters
    Notation,
}

/// Command-line arguments for the LNNZHYZ renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input text, `-` for standard input
    #[arg(default_value = "-")]
    pub input: String,

    /// Language of the input text (mandarin, shidinn)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Path to the output file, `-` for standard output
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
