//! Error types for the xlheaders library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xlheaders operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading workbooks or rendering headers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file or output operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a workbook we can recognize.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The file format is recognized but not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the workbook.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required workbook part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Error writing delimited output.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Error writing JSON output.
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    /// No input workbooks were given.
    #[error("No input workbooks given")]
    NoInput,

    /// A workbook failed to open or read; carries the offending path.
    #[error("{}: {source}", path.display())]
    Workbook {
        /// Path of the workbook being processed.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the path of the workbook being processed.
    pub fn in_workbook(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::Workbook { .. } => self,
            other => Error::Workbook {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
