//! Workbook source: the sheets of an Excel workbook, reduced to their
//! header row and first body row.
//!
//! Supports the Office Open XML flavors (.xlsx, .xlsm, .xltx, .xltm).
//!
//! # Example
//!
//! ```no_run
//! use xlheaders::workbook::{ReadOptions, WorkbookReader};
//!
//! let reader = WorkbookReader::open("spreadsheet.xlsx", ReadOptions::default())?;
//! for name in reader.sheet_names() {
//!     println!("Sheet: {}", name);
//! }
//! # Ok::<(), xlheaders::Error>(())
//! ```

mod reader;
mod shared_strings;
mod styles;

pub use reader::{ReadOptions, WorkbookReader};
