//! Row and sheet model structures.

use super::{Cell, CellValue};
use serde::{Deserialize, Serialize};

/// A row of cells, one per column from column 1 to the sheet width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based row index
    pub index: u32,

    /// Cells in column order
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a row of `width` blank cells.
    pub fn blank(index: u32, width: u32) -> Self {
        Self {
            index,
            cells: (1..=width).map(|column| Cell::blank(index, column)).collect(),
        }
    }

    /// Create a row of `width` cells, filling in the given (column, value) pairs.
    ///
    /// Values beyond the width are dropped; a later value for the same
    /// column replaces an earlier one.
    pub fn from_values(index: u32, width: u32, values: Vec<(u32, CellValue)>) -> Self {
        let mut row = Self::blank(index, width);
        for (column, value) in values {
            if let Some(cell) = column
                .checked_sub(1)
                .and_then(|i| row.cells.get_mut(i as usize))
            {
                cell.value = Some(value);
            }
        }
        row
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Textual values, blank cells as empty strings.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(Cell::text).collect()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// A worksheet reduced to its header row and first body row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name as shown on its tab
    pub name: String,

    /// Row 1
    pub header: Row,

    /// Row 2 (all blank when the sheet has no second row)
    pub body: Row,
}

impl Sheet {
    /// Create a sheet from its name and two leading rows.
    pub fn new(name: impl Into<String>, header: Row, body: Row) -> Self {
        Self {
            name: name.into(),
            header,
            body,
        }
    }

    /// Number of columns in use.
    pub fn width(&self) -> usize {
        self.header.len()
    }
}
