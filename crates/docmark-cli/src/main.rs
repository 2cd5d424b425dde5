//! Converts a hast JSON document to HTML or Markdown

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use docmark::{ConvertOptions, Converter, FallbackStrategy, Format, HeadingStyle};
use log::{info, LevelFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fallback {
    /// Rebuild headings, paragraphs, lists and tables
    Structured,
    /// Plain text with short title lines promoted to headings
    PlainText,
}

impl From<Fallback> for FallbackStrategy {
    fn from(fallback: Fallback) -> Self {
        match fallback {
            Fallback::Structured => FallbackStrategy::Structured,
            Fallback::PlainText => FallbackStrategy::PlainText,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "docmark", version, about)]
struct Args {
    /// Output format: `html` or `md`
    format: String,

    /// The hast JSON document to convert
    input: PathBuf,

    /// Where to write the converted document
    output: PathBuf,

    /// Strategy used when the document cannot be converted structurally
    #[arg(long, value_enum, default_value_t = Fallback::Structured)]
    fallback: Fallback,

    /// Underline level 1 and 2 headings instead of prefixing `#`
    #[arg(long)]
    setext: bool,

    /// Log more, repeat for debug output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_module("docmark", level)
        .format_timestamp(None)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error during conversion: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let format: Format = args.format.parse()?;

    let mut options = ConvertOptions {
        fallback: args.fallback.into(),
        ..Default::default()
    };
    if args.setext {
        options.markdown.heading_style = HeadingStyle::Setext;
    }

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let conversion = Converter::with_options(options).convert_source(&source, format)?;
    if conversion.is_degraded() {
        info!("output was reconstructed by the {:?} fallback", args.fallback);
    }

    fs::write(&args.output, conversion.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "✓ Converted {} to {}",
        args.input.display(),
        args.format.to_uppercase()
    );
    println!("✓ Output saved to {}", args.output.display());
    Ok(())
}
