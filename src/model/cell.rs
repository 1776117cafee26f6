//! Cell model structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar stored in a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// Shared, inline or formula-result string
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Date-formatted number, as ISO 8601
    Date(String),
    /// Error literal such as `#DIV/0!`
    Error(String),
    /// Formula source, including the leading `=`
    Formula(String),
}

impl CellValue {
    /// Whether this value renders as an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) | CellValue::Date(s) | CellValue::Error(s) | CellValue::Formula(s) => {
                s.is_empty()
            }
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Date(s) | CellValue::Error(s) | CellValue::Formula(s) => {
                f.write_str(s)
            }
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
        }
    }
}

/// Integral values print without a fractional part (`30`, not `30.0`).
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A cell at a fixed position in a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// 1-based row index
    pub row: u32,

    /// 1-based column index
    pub column: u32,

    /// Cell value; `None` for blank cells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CellValue>,
}

impl Cell {
    /// Create a blank cell.
    pub fn blank(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            value: None,
        }
    }

    /// Create a cell holding a value.
    pub fn with_value(row: u32, column: u32, value: CellValue) -> Self {
        Self {
            row,
            column,
            value: Some(value),
        }
    }

    /// Check if the cell has no value, or a value that renders empty.
    pub fn is_blank(&self) -> bool {
        self.value.as_ref().is_none_or(CellValue::is_empty)
    }

    /// Textual value, or an empty string for blank cells.
    pub fn text(&self) -> String {
        self.value.as_ref().map(|v| v.to_string()).unwrap_or_default()
    }

    /// A1-style reference of this cell.
    pub fn reference(&self) -> String {
        format!("{}{}", column_name(self.column), self.row)
    }
}

/// Convert a 1-based column index to its letter name (1 -> "A", 27 -> "AA").
pub fn column_name(column: u32) -> String {
    let mut n = column;
    let mut name = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        name.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

/// Parse an A1-style reference into 1-based (row, column).
///
/// The row part is optional so that bare column names ("AB") also parse;
/// it comes back as 0 in that case. `$` anchors are ignored.
pub fn parse_reference(reference: &str) -> Option<(u32, u32)> {
    let mut column: u32 = 0;
    let mut digits = String::new();

    for c in reference.chars().filter(|&c| c != '$') {
        if c.is_ascii_alphabetic() && digits.is_empty() {
            let value = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
            column = column.checked_mul(26)?.checked_add(value)?;
        } else if c.is_ascii_digit() {
            digits.push(c);
        } else {
            return None;
        }
    }

    if column == 0 {
        return None;
    }

    let row = if digits.is_empty() {
        0
    } else {
        digits.parse().ok()?
    };

    Some((row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(CellValue::Text("Name".into()).to_string(), "Name");
        assert_eq!(CellValue::Number(30.0).to_string(), "30");
        assert_eq!(CellValue::Number(-2.5).to_string(), "-2.5");
        assert_eq!(CellValue::Number(0.001).to_string(), "0.001");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::Formula("=A1+1".into()).to_string(), "=A1+1");
    }

    #[test]
    fn test_blank_cells() {
        assert!(Cell::blank(1, 1).is_blank());
        assert!(Cell::with_value(1, 1, CellValue::Text(String::new())).is_blank());
        assert!(!Cell::with_value(1, 1, CellValue::Number(0.0)).is_blank());
        assert_eq!(Cell::blank(1, 2).text(), "");
    }

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(1), "A");
        assert_eq!(column_name(26), "Z");
        assert_eq!(column_name(27), "AA");
        assert_eq!(column_name(703), "AAA");
        assert_eq!(Cell::blank(2, 28).reference(), "AB2");
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("A1"), Some((1, 1)));
        assert_eq!(parse_reference("C2"), Some((2, 3)));
        assert_eq!(parse_reference("$AB$12"), Some((12, 28)));
        assert_eq!(parse_reference("XFD1048576"), Some((1048576, 16384)));
        assert_eq!(parse_reference("AB"), Some((0, 28)));
        assert_eq!(parse_reference("12"), None);
        assert_eq!(parse_reference("A1B"), None);
    }

    #[test]
    fn test_cell_roundtrip() {
        let cell = Cell::with_value(1, 2, CellValue::Number(30.0));
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"row":1,"column":2,"value":{"type":"number","value":30.0}}"#);

        let parsed: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cell);
    }
}
