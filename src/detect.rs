//! Format detection for spreadsheet workbooks.

use crate::container::decode_xml_bytes;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE2 compound document magic, used by legacy .xls files.
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Content types of the workbook part, most specific first.
const CONTENT_TYPES: [(&str, WorkbookFormat); 4] = [
    (
        "application/vnd.ms-excel.template.macroEnabled.main+xml",
        WorkbookFormat::Xltm,
    ),
    (
        "application/vnd.ms-excel.sheet.macroEnabled.main+xml",
        WorkbookFormat::Xlsm,
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml",
        WorkbookFormat::Xltx,
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
        WorkbookFormat::Xlsx,
    ),
];

/// Detected workbook flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// Excel workbook (.xlsx)
    Xlsx,
    /// Macro-enabled workbook (.xlsm)
    Xlsm,
    /// Workbook template (.xltx)
    Xltx,
    /// Macro-enabled template (.xltm)
    Xltm,
}

impl WorkbookFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "xlsx",
            WorkbookFormat::Xlsm => "xlsm",
            WorkbookFormat::Xltx => "xltx",
            WorkbookFormat::Xltm => "xltm",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "Excel Workbook",
            WorkbookFormat::Xlsm => "Excel Macro-Enabled Workbook",
            WorkbookFormat::Xltx => "Excel Template",
            WorkbookFormat::Xltm => "Excel Macro-Enabled Template",
        }
    }
}

impl std::fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the workbook format from a file path.
///
/// # Example
///
/// ```no_run
/// use xlheaders::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.xlsx")?;
/// println!("Detected format: {}", format);
/// # Ok::<(), xlheaders::Error>(())
/// ```
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<WorkbookFormat> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 8];
    let n = read_prefix(&mut reader, &mut magic)?;
    check_magic(&magic[..n])?;

    reader.rewind()?;
    detect_format_from_reader(reader)
}

/// Detect the workbook format from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<WorkbookFormat> {
    check_magic(data)?;
    detect_format_from_reader(std::io::Cursor::new(data))
}

/// Detect the workbook format from a reader positioned at a ZIP archive.
pub fn detect_format_from_reader<R: Read + Seek>(reader: R) -> Result<WorkbookFormat> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let content_types = match archive.by_name("[Content_Types].xml") {
        Ok(mut file) => {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            decode_xml_bytes(&bytes)?
        }
        Err(_) => {
            return Err(Error::MissingComponent("[Content_Types].xml".to_string()));
        }
    };

    for (content_type, format) in CONTENT_TYPES {
        if content_types.contains(content_type) {
            return Ok(format);
        }
    }

    detect_by_folder_structure(&archive)
}

/// Fallback detection by checking folder structure.
fn detect_by_folder_structure<R: Read + Seek>(archive: &zip::ZipArchive<R>) -> Result<WorkbookFormat> {
    if archive.file_names().any(|n| n.starts_with("xl/")) {
        Ok(WorkbookFormat::Xlsx)
    } else {
        Err(Error::UnknownFormat)
    }
}

fn check_magic(data: &[u8]) -> Result<()> {
    if is_zip_file(data) {
        Ok(())
    } else if data.len() >= OLE_MAGIC.len() && data[..OLE_MAGIC.len()] == OLE_MAGIC {
        Err(Error::UnsupportedFormat(
            "legacy binary workbook (.xls)".to_string(),
        ))
    } else {
        Err(Error::UnknownFormat)
    }
}

fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}
