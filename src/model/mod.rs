//! Workbook model: sheets reduced to their header and first body row.
//!
//! The reader fills these structures from the worksheet XML and the
//! renderers consume them cell by cell.

mod cell;
mod sheet;

pub use cell::*;
pub use sheet::*;
