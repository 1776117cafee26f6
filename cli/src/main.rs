//! xlheaders CLI - bulk header reader for Excel workbooks
//!
//! Reads and outputs the header row of every sheet in the given workbooks,
//! optionally followed by the first row of content.

mod logger;

use clap::{Parser, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use xlheaders::{InspectOptions, OutputFormat, QuoteStyle};

/// Parse Excel workbooks for their headers
#[derive(Parser)]
#[command(
    name = "xlheaders",
    author = "iyulab",
    version,
    about = "Parse Excel workbooks for the headers",
    long_about = "xlheaders - bulk header reader for Excel workbooks.\n\n\
                  Prints the header row of every sheet, optionally followed by the first\n\
                  body row, as CSV records, an indented listing or JSON lines."
)]
struct Cli {
    /// Workbook files
    #[arg(value_name = "WORKBOOKS", required = true)]
    filenames: Vec<PathBuf>,

    /// Append the next row of content data to the header output
    #[arg(short = 'b', long = "include-body")]
    include_body: bool,

    /// The number of cells to allocate for the headers (CSV output) [default: 20]
    #[arg(short = 'p', long = "pad-body", value_name = "N")]
    pad_body: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field quoting for CSV output
    #[arg(long, value_enum, default_value = "always")]
    quote: Quote,

    /// Show the last computed value of formula cells instead of the formula
    #[arg(long)]
    cached_values: bool,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Output format
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One CSV record per workbook
    Csv,
    /// Indented listing
    Classic,
    /// One JSON object per workbook
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Classic => OutputFormat::Classic,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// CSV quoting
#[derive(Clone, Copy, ValueEnum)]
enum Quote {
    /// Quote every field
    Always,
    /// Quote only fields that need it
    Necessary,
}

impl From<Quote> for QuoteStyle {
    fn from(quote: Quote) -> Self {
        match quote {
            Quote::Always => QuoteStyle::Always,
            Quote::Necessary => QuoteStyle::Necessary,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logger::init();
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = InspectOptions::new()
        .with_format(cli.format.into())
        .with_body(cli.include_body)
        .with_pad_columns(cli.pad_body)
        .with_quote(cli.quote.into())
        .with_cached_values(cli.cached_values);

    match cli.output {
        Some(path) => {
            let file = BufWriter::new(File::create(&path)?);
            inspect_with_progress(&cli.filenames, &options, file)?;

            println!(
                "{} Wrote headers of {} workbook(s) to {}",
                "✓".green().bold(),
                cli.filenames.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            xlheaders::inspect_files(&cli.filenames, &options, stdout.lock())?;
        }
    }

    Ok(())
}

/// Inspect each file in turn, ticking a progress bar on stderr.
fn inspect_with_progress<W: Write>(
    files: &[PathBuf],
    options: &InspectOptions,
    out: W,
) -> xlheaders::Result<()> {
    let pb = create_progress(files.len());
    let mut renderer = options.renderer(out);

    for path in files {
        pb.set_message(display_name(path));
        if let Err(e) = xlheaders::inspect_file(path, options, renderer.as_mut()) {
            pb.abandon();
            return Err(e);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn create_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.blue} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}
