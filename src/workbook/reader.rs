//! Workbook reader implementation.

use crate::container::OoxmlContainer;
use crate::detect::{detect_format_from_bytes, detect_format_from_path, WorkbookFormat};
use crate::error::{Error, Result};
use crate::model::{parse_reference, CellValue, Row, Sheet};
use log::{debug, warn};
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

use super::shared_strings::SharedStrings;
use super::styles::Styles;

/// Default location of the workbook part.
const DEFAULT_WORKBOOK_PART: &str = "xl/workbook.xml";

/// Column count of a worksheet (A..XFD).
const MAX_COLUMNS: u32 = 16_384;

/// Options controlling how cell values are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Report the cached result of formula cells instead of their source
    pub cached_values: bool,
}

impl ReadOptions {
    /// Create default read options (formulas shown as `=source`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Report formula results instead of formula text.
    pub fn with_cached_values(mut self, cached: bool) -> Self {
        self.cached_values = cached;
        self
    }
}

/// Sheet entry from workbook.xml.
#[derive(Debug, Clone)]
struct SheetInfo {
    name: String,
    rel_id: String,
}

/// Reader exposing the sheets of one workbook, in tab order.
pub struct WorkbookReader {
    container: OoxmlContainer,
    format: WorkbookFormat,
    workbook_part: String,
    shared_strings: SharedStrings,
    styles: Styles,
    sheets: Vec<SheetInfo>,
    relationships: crate::container::Relationships,
    date1904: bool,
    options: ReadOptions,
}

impl WorkbookReader {
    /// Open a workbook file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xlheaders::workbook::{ReadOptions, WorkbookReader};
    ///
    /// let reader = WorkbookReader::open("report.xlsx", ReadOptions::default())?;
    /// for sheet in reader.sheets() {
    ///     let sheet = sheet?;
    ///     println!("{}: {:?}", sheet.name, sheet.header.texts());
    /// }
    /// # Ok::<(), xlheaders::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self> {
        let path = path.as_ref();
        // Sniff the signature and ZIP directory before loading the whole file
        let format = detect_format_from_path(path)?;
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container, format, options)
    }

    /// Create a reader from the bytes of a workbook file.
    pub fn from_bytes(data: Vec<u8>, options: ReadOptions) -> Result<Self> {
        let format = detect_format_from_bytes(&data)?;
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container, format, options)
    }

    fn from_container(
        container: OoxmlContainer,
        format: WorkbookFormat,
        options: ReadOptions,
    ) -> Result<Self> {
        let workbook_part = container
            .read_package_relationships()?
            .first_of_kind("officeDocument")
            .map(|rel| OoxmlContainer::resolve_path("", &rel.target))
            .unwrap_or_else(|| DEFAULT_WORKBOOK_PART.to_string());

        let workbook_xml = container.read_xml(&workbook_part)?;
        let (sheets, date1904) = Self::parse_workbook(&workbook_xml)?;
        let relationships = container.read_relationships(&workbook_part)?;

        let shared_strings = match relationships.first_of_kind("sharedStrings") {
            Some(rel) => {
                let part = OoxmlContainer::resolve_path(&workbook_part, &rel.target);
                SharedStrings::parse(&container.read_xml(&part)?)?
            }
            None => SharedStrings::default(),
        };

        let styles = relationships
            .first_of_kind("styles")
            .map(|rel| OoxmlContainer::resolve_path(&workbook_part, &rel.target))
            .and_then(|part| container.read_xml(&part).ok())
            .map(|xml| Styles::parse(&xml))
            .unwrap_or_default();

        debug!(
            "workbook part {} ({}): {} sheets, {} shared strings",
            workbook_part,
            format.extension(),
            sheets.len(),
            shared_strings.len()
        );

        Ok(Self {
            container,
            format,
            workbook_part,
            shared_strings,
            styles,
            sheets,
            relationships,
            date1904,
            options,
        })
    }

    /// Parse workbook.xml for the sheet list and the date system flag.
    fn parse_workbook(xml: &str) -> Result<(Vec<SheetInfo>, bool)> {
        let mut sheets = Vec::new();
        let mut date1904 = false;

        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    match e.local_name().as_ref() {
                        b"sheet" => {
                            let mut name = String::new();
                            let mut rel_id = String::new();

                            for attr in e.attributes().flatten() {
                                let key = attr.key;
                                if key.as_ref() == b"name" {
                                    name = attr
                                        .unescape_value()
                                        .map_err(|e| Error::XmlParse(e.to_string()))?
                                        .to_string();
                                } else if key.prefix().is_some()
                                    && key.local_name().as_ref() == b"id"
                                {
                                    rel_id = String::from_utf8_lossy(&attr.value).to_string();
                                }
                            }

                            if !name.is_empty() {
                                sheets.push(SheetInfo { name, rel_id });
                            }
                        }
                        b"workbookPr" => {
                            date1904 = attribute(e, b"date1904")
                                .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok((sheets, date1904))
    }

    /// Read the header and first body row of the sheet at `index`.
    pub fn read_sheet(&self, index: usize) -> Result<Sheet> {
        let info = self.sheets.get(index).ok_or_else(|| {
            Error::InvalidData(format!(
                "sheet index {} out of range ({} sheets)",
                index,
                self.sheets.len()
            ))
        })?;

        let rows = match self.relationships.get(&info.rel_id) {
            Some(rel) => {
                let part = OoxmlContainer::resolve_path(&self.workbook_part, &rel.target);
                let xml = self.container.read_xml(&part)?;
                self.parse_sheet(&xml)?
            }
            None => {
                warn!(
                    "sheet '{}' has no part for relationship '{}'; treating it as empty",
                    info.name, info.rel_id
                );
                LeadingRows::default()
            }
        };

        debug!("sheet '{}': {} columns", info.name, rows.width);

        Ok(Sheet::new(
            info.name.clone(),
            Row::from_values(1, rows.width, rows.header),
            Row::from_values(2, rows.width, rows.body),
        ))
    }

    /// Iterate over the sheets in tab order, reading each on demand.
    pub fn sheets(&self) -> impl Iterator<Item = Result<Sheet>> + '_ {
        (0..self.sheets.len()).map(move |index| self.read_sheet(index))
    }

    /// Scan a worksheet part.
    ///
    /// Every cell counts toward the sheet width, but values are only
    /// resolved for rows 1 and 2.
    fn parse_sheet(&self, xml: &str) -> Result<LeadingRows> {
        let mut rows = LeadingRows::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut row_index: u32 = 0;
        let mut column: u32 = 0;
        let mut pending: Option<PendingCell> = None;
        let mut capture = Capture::None;
        let mut in_inline = false;
        let mut in_phonetic = false;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::XmlParse(e.to_string()))?;
            if matches!(event, Event::Eof) {
                break;
            }

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    match e.local_name().as_ref() {
                        b"row" => {
                            row_index = attribute(e, b"r")
                                .and_then(|r| r.parse().ok())
                                .unwrap_or(row_index.saturating_add(1));
                            column = 0;
                        }
                        b"c" => {
                            let reference = attribute(e, b"r");
                            column = reference
                                .as_deref()
                                .and_then(parse_reference)
                                .map(|(_, col)| col)
                                .unwrap_or(column + 1);
                            if column > MAX_COLUMNS {
                                return Err(Error::InvalidData(format!(
                                    "cell {} is past the last column XFD",
                                    reference.unwrap_or_else(|| format!("#{column}"))
                                )));
                            }
                            rows.width = rows.width.max(column);

                            if row_index <= 2 && !is_empty {
                                pending = Some(PendingCell {
                                    column,
                                    cell_type: attribute(e, b"t"),
                                    style: attribute(e, b"s").and_then(|s| s.parse().ok()),
                                    ..PendingCell::default()
                                });
                            }
                        }
                        b"v" if pending.is_some() && !is_empty => capture = Capture::Value,
                        b"f" if pending.is_some() && !is_empty => capture = Capture::Formula,
                        b"is" if pending.is_some() && !is_empty => in_inline = true,
                        b"rPh" if !is_empty => in_phonetic = true,
                        b"t" if in_inline && !in_phonetic && !is_empty => {
                            capture = Capture::Inline
                        }
                        _ => {}
                    }
                }
                Event::Text(ref e) => {
                    let target = match (pending.as_mut(), capture) {
                        (Some(cell), Capture::Value) => Some(&mut cell.value),
                        (Some(cell), Capture::Formula) => Some(&mut cell.formula),
                        (Some(cell), Capture::Inline) => Some(&mut cell.inline),
                        _ => None,
                    };
                    if let Some(target) = target {
                        let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                        target.push_str(&text);
                    }
                }
                Event::CData(ref e) => {
                    if let (Some(cell), Capture::Inline) = (pending.as_mut(), capture) {
                        cell.inline.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Event::End(ref e) => match e.local_name().as_ref() {
                    b"c" => {
                        if let Some(cell) = pending.take() {
                            let column = cell.column;
                            if let Some(value) = self.resolve_cell_value(cell) {
                                match row_index {
                                    1 => rows.header.push((column, value)),
                                    2 => rows.body.push((column, value)),
                                    _ => {}
                                }
                            }
                        }
                        capture = Capture::None;
                        in_inline = false;
                    }
                    b"v" | b"f" | b"t" => capture = Capture::None,
                    b"is" => in_inline = false,
                    b"rPh" => in_phonetic = false,
                    _ => {}
                },
                _ => {}
            }
            drop(event);
            buf.clear();
        }

        Ok(rows)
    }

    /// Turn the raw pieces of a `<c>` element into a value.
    fn resolve_cell_value(&self, cell: PendingCell) -> Option<CellValue> {
        if !cell.formula.is_empty() && !self.options.cached_values {
            return Some(CellValue::Formula(format!("={}", cell.formula)));
        }

        let text = |s: String| (!s.is_empty()).then_some(CellValue::Text(s));

        match cell.cell_type.as_deref() {
            Some("s") => {
                let index = cell.value.trim().parse::<usize>().ok()?;
                match self.shared_strings.get(index) {
                    Some(s) => text(s.to_string()),
                    None => {
                        warn!("shared string index {} out of range", index);
                        None
                    }
                }
            }
            Some("inlineStr") => text(cell.inline),
            Some("str") => text(cell.value),
            Some("b") => {
                let v = cell.value.trim();
                (!v.is_empty()).then(|| CellValue::Bool(v == "1" || v.eq_ignore_ascii_case("true")))
            }
            Some("e") => (!cell.value.is_empty()).then_some(CellValue::Error(cell.value)),
            Some("d") => (!cell.value.is_empty()).then_some(CellValue::Date(cell.value)),
            _ => {
                let raw = cell.value.trim();
                if raw.is_empty() {
                    return None;
                }
                match raw.parse::<f64>() {
                    Ok(n) if cell.style.is_some_and(|s| self.styles.is_date_style(s)) => {
                        Some(match Styles::serial_to_date(n, self.date1904) {
                            Some(date) => CellValue::Date(date),
                            None => CellValue::Number(n),
                        })
                    }
                    Ok(n) => Some(CellValue::Number(n)),
                    Err(_) => Some(CellValue::Text(raw.to_string())),
                }
            }
        }
    }

    /// Detected workbook flavor.
    pub fn format(&self) -> WorkbookFormat {
        self.format
    }

    /// Whether the workbook uses the 1904 date system.
    pub fn is_date1904(&self) -> bool {
        self.date1904
    }

    /// Get the number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get sheet names in tab order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

impl std::fmt::Debug for WorkbookReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkbookReader")
            .field("format", &self.format)
            .field("sheets", &self.sheet_names())
            .finish()
    }
}

/// Values of rows 1 and 2 plus the sheet width.
#[derive(Debug, Default)]
struct LeadingRows {
    width: u32,
    header: Vec<(u32, CellValue)>,
    body: Vec<(u32, CellValue)>,
}

/// Raw pieces of a `<c>` element collected while scanning.
#[derive(Debug, Default)]
struct PendingCell {
    column: u32,
    cell_type: Option<String>,
    style: Option<usize>,
    value: String,
    formula: String,
    inline: String,
}

/// Which child element's text is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    None,
    Value,
    Formula,
    Inline,
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
</Types>"#;

    const PACKAGE_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

    const WORKBOOK_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/sheet2.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
  <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

    const SHARED_STRINGS: &str = r#"<sst><si><t>Name</t></si><si><t>Age</t></si><si><t>Alice</t></si></sst>"#;

    const STYLES: &str = r#"<styleSheet><cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14"/></cellXfs></styleSheet>"#;

    fn workbook_xml(date1904: bool) -> String {
        format!(
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <workbookPr date1904="{}"/>
  <sheets>
    <sheet name="People" sheetId="1" r:id="rId1"/>
    <sheet name="Q&amp;A" sheetId="2" r:id="rId2"/>
  </sheets>
</workbook>"#,
            if date1904 { "1" } else { "0" }
        )
    }

    fn build(sheet1: &str, sheet2: &str, date1904: bool) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        let workbook = workbook_xml(date1904);
        let parts: [(&str, &str); 8] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("xl/workbook.xml", &workbook),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/sharedStrings.xml", SHARED_STRINGS),
            ("xl/styles.xml", STYLES),
            ("xl/worksheets/sheet1.xml", sheet1),
            ("xl/worksheets/sheet2.xml", sheet2),
        ];
        for (name, content) in parts {
            zip.start_file(name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    fn sheet(rows: &str) -> String {
        format!("<worksheet><sheetData>{}</sheetData></worksheet>", rows)
    }

    fn open(sheet1: &str, options: ReadOptions) -> WorkbookReader {
        let data = build(&sheet(sheet1), &sheet(""), false);
        WorkbookReader::from_bytes(data, options).unwrap()
    }

    #[test]
    fn test_sheet_names_in_order() {
        let reader = open("", ReadOptions::default());
        assert_eq!(reader.sheet_names(), vec!["People", "Q&A"]);
        assert_eq!(reader.sheet_count(), 2);
        assert_eq!(reader.format(), WorkbookFormat::Xlsx);
        assert!(!reader.is_date1904());
    }

    #[test]
    fn test_header_and_body() {
        let reader = open(
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>
               <row r="2"><c r="A2" t="s"><v>2</v></c><c r="B2"><v>30</v></c></row>
               <row r="3"><c r="A3"><v>1</v></c></row>"#,
            ReadOptions::default(),
        );

        let sheet = reader.read_sheet(0).unwrap();
        assert_eq!(sheet.name, "People");
        assert_eq!(sheet.header.texts(), vec!["Name", "Age"]);
        assert_eq!(sheet.body.texts(), vec!["Alice", "30"]);
        assert_eq!(sheet.body.cells[1].value, Some(CellValue::Number(30.0)));
    }

    #[test]
    fn test_gaps_and_width_from_later_rows() {
        let reader = open(
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Name</t></is></c><c r="C1" t="inlineStr"><is><t>Age</t></is></c></row>
               <row r="5"><c r="E5"><v>9</v></c></row>"#,
            ReadOptions::default(),
        );

        let sheet = reader.read_sheet(0).unwrap();
        assert_eq!(sheet.header.texts(), vec!["Name", "", "Age", "", ""]);
        // No row 2: the body is blank but as wide as the sheet
        assert_eq!(sheet.body.len(), 5);
        assert!(sheet.body.iter().all(|c| c.is_blank()));
        assert_eq!(sheet.body.cells[4].reference(), "E2");
    }

    #[test]
    fn test_cells_without_references() {
        let reader = open(
            r#"<row><c t="str"><v>a</v></c><c/><c t="str"><v>c</v></c></row>
               <row><c t="b"><v>1</v></c></row>"#,
            ReadOptions::default(),
        );

        let sheet = reader.read_sheet(0).unwrap();
        assert_eq!(sheet.header.texts(), vec!["a", "", "c"]);
        assert_eq!(sheet.body.texts(), vec!["TRUE", "", ""]);
    }

    #[test]
    fn test_formula_text_and_cached_values() {
        let rows = r#"<row r="1"><c r="A1"><f>SUM(B2:B9)</f><v>42</v></c><c r="B1" t="str"><f>"x"&amp;"y"</f><v>xy</v></c></row>"#;

        let sheet = open(rows, ReadOptions::default()).read_sheet(0).unwrap();
        assert_eq!(sheet.header.texts(), vec!["=SUM(B2:B9)", "=\"x\"&\"y\""]);

        let sheet = open(rows, ReadOptions::new().with_cached_values(true))
            .read_sheet(0)
            .unwrap();
        assert_eq!(sheet.header.texts(), vec!["42", "xy"]);
    }

    #[test]
    fn test_shared_formula_follower_uses_cached_value() {
        let rows = r#"<row r="1"><c r="A1"><f t="shared" ref="A1:B1" si="0">C1*2</f><v>2</v></c><c r="B1"><f t="shared" si="0"/><v>4</v></c></row>"#;
        let sheet = open(rows, ReadOptions::default()).read_sheet(0).unwrap();
        assert_eq!(sheet.header.texts(), vec!["=C1*2", "4"]);
    }

    #[test]
    fn test_dates_errors_and_whitespace() {
        let reader = open(
            r#"<row r="1"><c r="A1" s="1"><v>44197</v></c><c r="B1" t="e"><v>#DIV/0!</v></c><c r="C1" t="inlineStr"><is><t xml:space="preserve"> Total </t></is></c></row>"#,
            ReadOptions::default(),
        );

        let sheet = reader.read_sheet(0).unwrap();
        assert_eq!(sheet.header.texts(), vec!["2021-01-01", "#DIV/0!", " Total "]);
    }

    #[test]
    fn test_date1904_workbook() {
        let data = build(
            &sheet(r#"<row r="1"><c r="A1" s="1"><v>42735</v></c></row>"#),
            &sheet(""),
            true,
        );
        let reader = WorkbookReader::from_bytes(data, ReadOptions::default()).unwrap();
        assert!(reader.is_date1904());
        assert_eq!(reader.read_sheet(0).unwrap().header.texts(), vec!["2021-01-01"]);
    }

    #[test]
    fn test_empty_sheet_and_absolute_target() {
        let reader = open("", ReadOptions::default());
        let sheet = reader.read_sheet(1).unwrap();
        assert_eq!(sheet.name, "Q&A");
        assert!(sheet.header.is_empty());
        assert!(sheet.body.is_empty());
    }

    #[test]
    fn test_sheet_index_out_of_range() {
        let reader = open("", ReadOptions::default());
        assert!(matches!(reader.read_sheet(2), Err(Error::InvalidData(_))));
        assert_eq!(reader.sheets().count(), 2);
    }

    #[test]
    fn test_malformed_sheet_is_an_error() {
        let data = build("<worksheet><sheetData><row></sheetData>", &sheet(""), false);
        let reader = WorkbookReader::from_bytes(data, ReadOptions::default()).unwrap();
        assert!(matches!(reader.read_sheet(0), Err(Error::XmlParse(_))));
    }

    #[test]
    fn test_huge_date_serial_stays_a_number() {
        let reader = open(
            r#"<row r="1"><c r="A1" s="1"><v>1e13</v></c><c r="B1" s="1"><v>2958465</v></c></row>"#,
            ReadOptions::default(),
        );

        let sheet = reader.read_sheet(0).unwrap();
        assert_eq!(sheet.header.cells[0].value, Some(CellValue::Number(1e13)));
        assert_eq!(sheet.header.texts(), vec!["10000000000000", "9999-12-31"]);
    }

    #[test]
    fn test_column_past_xfd_is_rejected() {
        let reader = open(
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c></row>
               <row r="7"><c r="ZZZZZZ7"><v>1</v></c></row>"#,
            ReadOptions::default(),
        );
        match reader.read_sheet(0) {
            Err(Error::InvalidData(msg)) => assert!(msg.contains("ZZZZZZ7")),
            other => panic!("unexpected result: {other:?}"),
        }

        let reader = open(
            r#"<row r="1"><c r="XFD1" t="s"><v>0</v></c></row>"#,
            ReadOptions::default(),
        );
        let sheet = reader.read_sheet(0).unwrap();
        assert_eq!(sheet.header.len(), 16_384);
        assert_eq!(sheet.header.cells[16_383].text(), "Name");
    }

    #[test]
    fn test_open_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("people.xlsx");
        std::fs::write(&path, build(&sheet(""), &sheet(""), false)).unwrap();

        let reader = WorkbookReader::open(&path, ReadOptions::default()).unwrap();
        assert_eq!(reader.sheet_names(), vec!["People", "Q&A"]);

        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "Name,Age\n").unwrap();
        assert!(matches!(
            WorkbookReader::open(&text, ReadOptions::default()),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_not_a_workbook() {
        let result = WorkbookReader::from_bytes(b"Name,Age\n".to_vec(), ReadOptions::default());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }
}
