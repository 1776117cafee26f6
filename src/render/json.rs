//! JSON-lines renderer: one compact object per workbook.

use crate::error::Result;
use crate::model::Cell;
use serde::Serialize;
use std::io::Write;

use super::options::RenderOptions;
use super::Renderer;

/// Header summary of one workbook.
#[derive(Debug, Clone, Default, Serialize)]
struct FileRecord {
    file: String,
    sheets: Vec<SheetRecord>,
}

/// Header (and optional body) values of one sheet.
#[derive(Debug, Clone, Default, Serialize)]
struct SheetRecord {
    name: String,
    header: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Vec<String>>,
}

/// Emits `{"file":…,"sheets":[{"name":…,"header":[…],"body":[…]}]}` per file.
pub struct JsonRenderer<W: Write> {
    out: W,
    include_body: bool,
    current: Option<FileRecord>,
}

impl<W: Write> JsonRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W, options: &RenderOptions) -> Self {
        Self {
            out,
            include_body: options.include_body,
            current: None,
        }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn current_sheet(&mut self) -> Option<&mut SheetRecord> {
        self.current.as_mut().and_then(|file| file.sheets.last_mut())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn filename(&mut self, name: &str) -> Result<()> {
        self.current = Some(FileRecord {
            file: name.to_string(),
            sheets: Vec::new(),
        });
        Ok(())
    }

    fn sheet_name(&mut self, name: &str) -> Result<()> {
        let body = self.include_body.then(Vec::new);
        if let Some(file) = self.current.as_mut() {
            file.sheets.push(SheetRecord {
                name: name.to_string(),
                header: Vec::new(),
                body,
            });
        }
        Ok(())
    }

    fn header_cell(&mut self, value: &str, _cell: &Cell, _index: usize) -> Result<()> {
        if let Some(sheet) = self.current_sheet() {
            sheet.header.push(value.to_string());
        }
        Ok(())
    }

    fn body_cell(&mut self, value: &str, _cell: &Cell, _index: usize) -> Result<()> {
        if let Some(body) = self.current_sheet().and_then(|s| s.body.as_mut()) {
            body.push(value.to_string());
        }
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        if let Some(record) = self.current.take() {
            serde_json::to_writer(&mut self.out, &record)?;
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
