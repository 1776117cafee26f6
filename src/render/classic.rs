//! Indented human-readable renderer.

use crate::error::Result;
use crate::model::Cell;
use std::io::Write;

use super::options::RenderOptions;
use super::Renderer;

/// Writes straight to the sink, one line per event:
///
/// ```text
/// [file.xlsx]
/// Sheet1:
///   Name
///   Age
///   >  Alice
///   >  30
///
/// ```
pub struct ClassicRenderer<W: Write> {
    out: W,
    include_body: bool,
}

impl<W: Write> ClassicRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W, options: &RenderOptions) -> Self {
        Self {
            out,
            include_body: options.include_body,
        }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ClassicRenderer<W> {
    fn filename(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "[{}]", name)?;
        Ok(())
    }

    fn sheet_name(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "{}:", name)?;
        Ok(())
    }

    fn header_cell(&mut self, value: &str, _cell: &Cell, _index: usize) -> Result<()> {
        // Blank header cells produce no line
        if !value.is_empty() {
            writeln!(self.out, "  {}", value)?;
        }
        Ok(())
    }

    fn body_cell(&mut self, value: &str, _cell: &Cell, _index: usize) -> Result<()> {
        if self.include_body {
            writeln!(self.out, "  >  {}", value)?;
        }
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
