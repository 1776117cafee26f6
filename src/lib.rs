//! # xlheaders
//!
//! Bulk reader for the header rows of Excel workbooks.
//!
//! For every sheet of every workbook given, reads row 1 (and optionally
//! row 2) and renders it as delimited records, an indented listing or
//! JSON lines. Useful for getting an overview of column names across many
//! files without opening each one.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xlheaders::{inspect_files, InspectOptions, OutputFormat};
//!
//! // One CSV record per workbook on stdout
//! inspect_files(&["q1.xlsx", "q2.xlsx"], &InspectOptions::default(), std::io::stdout())?;
//!
//! // Indented listing including the first body row
//! let options = InspectOptions::new()
//!     .with_format(OutputFormat::Classic)
//!     .with_body(true);
//! inspect_files(&["q1.xlsx"], &options, std::io::stdout())?;
//! # Ok::<(), xlheaders::Error>(())
//! ```
//!
//! ## Reading sheets directly
//!
//! ```no_run
//! use xlheaders::workbook::{ReadOptions, WorkbookReader};
//!
//! let reader = WorkbookReader::open("data.xlsx", ReadOptions::default())?;
//! for sheet in reader.sheets() {
//!     let sheet = sheet?;
//!     println!("{}: {}", sheet.name, sheet.header.texts().join(" | "));
//! }
//! # Ok::<(), xlheaders::Error>(())
//! ```

pub mod container;
pub mod detect;
pub mod error;
pub mod inspect;
pub mod model;
pub mod render;
pub mod workbook;

// Re-exports
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use detect::{detect_format_from_bytes, detect_format_from_path, WorkbookFormat};
pub use error::{Error, Result};
pub use inspect::{inspect_file, inspect_files, render_sheet, InspectOptions};
pub use model::{Cell, CellValue, Row, Sheet};
pub use render::{OutputFormat, QuoteStyle, RenderOptions, Renderer};
pub use workbook::{ReadOptions, WorkbookReader};
