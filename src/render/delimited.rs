//! Delimited (CSV) renderer: one record per workbook.

use crate::error::Result;
use crate::model::{Cell, Row};
use std::io::Write;

use super::options::{QuoteStyle, RenderOptions};
use super::Renderer;

/// Collects one record per file and writes it when the file is done.
///
/// The record holds the file name, then per sheet the sheet name, the
/// header values and, with body inclusion, pad fields followed by the body
/// values.
pub struct DelimitedRenderer<W: Write> {
    writer: csv::Writer<W>,
    record: Vec<String>,
    include_body: bool,
    num_cols_pad: usize,
}

impl<W: Write> DelimitedRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W, options: &RenderOptions) -> Self {
        let quote_style = match options.quote {
            QuoteStyle::Always => csv::QuoteStyle::Always,
            QuoteStyle::Necessary => csv::QuoteStyle::Necessary,
        };

        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .quote_style(quote_style)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        Self {
            writer,
            record: Vec::new(),
            include_body: options.include_body,
            num_cols_pad: options.num_cols_pad,
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::error::Error::Io(e.into_error()))
    }

    fn push(&mut self, value: &str) {
        self.record.push(value.to_string());
    }
}

impl<W: Write> Renderer for DelimitedRenderer<W> {
    fn filename(&mut self, name: &str) -> Result<()> {
        self.record.clear();
        self.push(name);
        Ok(())
    }

    fn sheet_name(&mut self, name: &str) -> Result<()> {
        self.push(name);
        Ok(())
    }

    fn header_cell(&mut self, value: &str, _cell: &Cell, _index: usize) -> Result<()> {
        self.push(value);
        Ok(())
    }

    fn body_row(&mut self, _row: &Row) -> Result<()> {
        if self.include_body && self.record.len() < self.num_cols_pad {
            self.record.resize(self.num_cols_pad, String::new());
        }
        Ok(())
    }

    fn body_cell(&mut self, value: &str, _cell: &Cell, _index: usize) -> Result<()> {
        if self.include_body {
            self.push(value);
        }
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        if !self.record.is_empty() {
            self.writer.write_record(&self.record)?;
            self.writer.flush()?;
        }
        self.record.clear();
        Ok(())
    }
}
