//! CLI logic for the LNNZHYZ script renderer.
//!
//! This module contains the core CLI logic: reading romanized text, running
//! it through the [`ScriptBuilder`] pipeline and writing the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use lnnzhyz::{LnnzhyzError, ScriptBuilder, notation};

/// Path standing for standard input or standard output.
const STDIO: &str = "-";

/// Run the LNNZHYZ CLI application
///
/// This function processes the input text through the compiler and layout
/// engine and writes the requested output format.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LnnzhyzError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Compile errors
/// - Draw errors
pub fn run(args: &Args) -> Result<(), LnnzhyzError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:? = args.format;
        "Processing text"
    );

    // Load configuration; the command line overrides the configured language
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(language) = args.language {
        app_config.input_mut().set_language(language);
    }
    let language = app_config.input().language();

    let source = read_input(&args.input)?;

    let builder = ScriptBuilder::new(app_config);
    let text = builder.compile(language, &source)?;
    let output = match args.format {
        OutputFormat::Svg => builder.render_svg(&text)?,
        OutputFormat::Path => builder.draw(&text)?.d().to_string(),
        OutputFormat::Notation => notation::serialize_text(&text),
    };

    write_output(&args.output, &output)?;

    info!(output_file = args.output; "Output written successfully");

    Ok(())
}

fn read_input(path: &str) -> io::Result<String> {
    if path == STDIO {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(path: &str, output: &str) -> io::Result<()> {
    if path == STDIO {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{output}")?;
        stdout.flush()
    } else {
        fs::write(path, output)
    }
}
