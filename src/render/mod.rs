//! Output rendering for sheet headers.
//!
//! The driver replays every workbook through a [`Renderer`] in a fixed
//! order:
//!
//! 1. [`Renderer::filename`]
//! 2. per sheet: [`Renderer::sheet_name`], [`Renderer::header_row`],
//!    [`Renderer::header_cell`] for each header cell,
//!    [`Renderer::body_row`], then [`Renderer::body_cell`] for each body
//!    cell when body inclusion is on
//! 3. [`Renderer::done`]
//!
//! # Example
//!
//! ```
//! use xlheaders::render::{renderer, OutputFormat, RenderOptions};
//!
//! let mut out = Vec::new();
//! {
//!     let mut r = renderer(OutputFormat::Classic, &RenderOptions::default(), &mut out);
//!     r.filename("file.xlsx")?;
//!     r.sheet_name("Sheet1")?;
//!     r.done()?;
//! }
//! assert_eq!(String::from_utf8(out).unwrap(), "[file.xlsx]\nSheet1:\n\n");
//! # Ok::<(), xlheaders::Error>(())
//! ```

mod classic;
mod delimited;
mod json;
mod options;

pub use classic::ClassicRenderer;
pub use delimited::DelimitedRenderer;
pub use json::JsonRenderer;
pub use options::{QuoteStyle, RenderOptions, DEFAULT_PAD_COLUMNS};

use crate::error::{Error, Result};
use crate::model::{Cell, Row};
use std::io::Write;
use std::str::FromStr;

/// Sink for the sheet/row/cell events of one or more workbooks.
///
/// `value` arguments are the cell's text, or an empty string for blank
/// cells; `index` is the 0-based position in the row.
pub trait Renderer {
    /// Start a workbook. Discards anything accumulated for a previous one.
    fn filename(&mut self, name: &str) -> Result<()>;

    /// Start a sheet.
    fn sheet_name(&mut self, name: &str) -> Result<()>;

    /// Called before the header cells.
    fn header_row(&mut self, _row: &Row) -> Result<()> {
        Ok(())
    }

    /// One header cell, in column order.
    fn header_cell(&mut self, value: &str, cell: &Cell, index: usize) -> Result<()>;

    /// Called before the body cells; must not change output when body
    /// inclusion is off.
    fn body_row(&mut self, _row: &Row) -> Result<()> {
        Ok(())
    }

    /// One body cell, in column order.
    fn body_cell(&mut self, value: &str, cell: &Cell, index: usize) -> Result<()>;

    /// Finish the workbook: terminate its record and reset state.
    fn done(&mut self) -> Result<()>;
}

/// Output format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One delimited record per workbook
    #[default]
    Csv,
    /// Indented listing
    Classic,
    /// One JSON object per workbook
    Json,
}

impl OutputFormat {
    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Classic => "classic",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "classic" => Ok(OutputFormat::Classic),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnsupportedFormat(format!("output format '{}'", other))),
        }
    }
}

/// Build the renderer for `format`, writing to `out`.
pub fn renderer<'a, W: Write + 'a>(
    format: OutputFormat,
    options: &RenderOptions,
    out: W,
) -> Box<dyn Renderer + 'a> {
    match format {
        OutputFormat::Csv => Box::new(DelimitedRenderer::new(out, options)),
        OutputFormat::Classic => Box::new(ClassicRenderer::new(out, options)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out, options)),
    }
}
