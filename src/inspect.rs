//! Driver: replays workbooks through a renderer.

use crate::error::{Error, Result};
use crate::model::Sheet;
use crate::render::{self, OutputFormat, QuoteStyle, RenderOptions, Renderer};
use crate::workbook::{ReadOptions, WorkbookReader};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Everything that shapes one inspection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Renderer variant
    pub format: OutputFormat,

    /// Renderer settings (body inclusion, padding, quoting)
    pub render: RenderOptions,

    /// Cell value settings
    pub read: ReadOptions,
}

impl InspectOptions {
    /// Create default options: CSV, header only, pad 20.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Append the first body row.
    pub fn with_body(mut self, include: bool) -> Self {
        self.render = self.render.with_body(include);
        self
    }

    /// Override the delimited pad column count.
    pub fn with_pad_columns(mut self, pad: Option<usize>) -> Self {
        self.render = self.render.with_pad_columns(pad);
        self
    }

    /// Set the quoting policy for delimited output.
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.render = self.render.with_quote(quote);
        self
    }

    /// Show formula results instead of formula text.
    pub fn with_cached_values(mut self, cached: bool) -> Self {
        self.read = self.read.with_cached_values(cached);
        self
    }

    /// Build the renderer these options select.
    pub fn renderer<'a, W: Write + 'a>(&self, out: W) -> Box<dyn Renderer + 'a> {
        render::renderer(self.format, &self.render, out)
    }
}

/// Render every workbook in `paths`, in order, to `out`.
///
/// Stops at the first workbook that fails; records already written for
/// earlier workbooks stay in `out`.
///
/// # Example
///
/// ```no_run
/// use xlheaders::{inspect_files, InspectOptions};
///
/// let options = InspectOptions::new().with_body(true);
/// inspect_files(&["a.xlsx", "b.xlsx"], &options, std::io::stdout())?;
/// # Ok::<(), xlheaders::Error>(())
/// ```
pub fn inspect_files<P, W>(paths: &[P], options: &InspectOptions, out: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    if paths.is_empty() {
        return Err(Error::NoInput);
    }

    let mut renderer = options.renderer(out);
    for path in paths {
        inspect_file(path.as_ref(), options, renderer.as_mut())?;
    }
    Ok(())
}

/// Replay one workbook through `renderer`.
///
/// Read failures come back as [`Error::Workbook`] naming `path`.
pub fn inspect_file(path: &Path, options: &InspectOptions, renderer: &mut dyn Renderer) -> Result<()> {
    debug!("inspecting {}", path.display());
    renderer.filename(&path.display().to_string())?;

    {
        let reader = WorkbookReader::open(path, options.read).map_err(|e| e.in_workbook(path))?;
        for sheet in reader.sheets() {
            let sheet = sheet.map_err(|e| e.in_workbook(path))?;
            render_sheet(&sheet, options.render.include_body, renderer)?;
        }
    }

    renderer.done()
}

/// Replay one sheet: name, header row and cells, body row and cells.
pub fn render_sheet(sheet: &Sheet, include_body: bool, renderer: &mut dyn Renderer) -> Result<()> {
    renderer.sheet_name(&sheet.name)?;

    renderer.header_row(&sheet.header)?;
    for (index, cell) in sheet.header.iter().enumerate() {
        renderer.header_cell(&cell.text(), cell, index)?;
    }

    renderer.body_row(&sheet.body)?;
    if include_body {
        for (index, cell) in sheet.body.iter().enumerate() {
            renderer.body_cell(&cell.text(), cell, index)?;
        }
    }

    Ok(())
}
