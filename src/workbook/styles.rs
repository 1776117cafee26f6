//! Cell style parsing, used to tell dates apart from plain numbers.

use std::collections::HashMap;

/// Days between the 1900 and 1904 date system epochs.
const EPOCH_1904_OFFSET: f64 = 1462.0;

/// Serial of 9999-12-31, the last day Excel can display.
const MAX_DATE_SERIAL: f64 = 2_958_465.0;

/// Number format information parsed from xl/styles.xml.
#[derive(Debug, Default)]
pub struct Styles {
    /// Custom number formats: numFmtId -> formatCode
    num_fmts: HashMap<u32, String>,
    /// Cell formats: style index (`s` attribute) -> numFmtId
    cell_xfs: Vec<u32>,
}

impl Styles {
    /// Parse styles from xl/styles.xml content.
    ///
    /// Styles only drive date detection, so malformed XML degrades to
    /// "no date formats" instead of failing the workbook.
    pub fn parse(xml: &str) -> Self {
        let mut styles = Self::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut in_num_fmts = false;
        let mut in_cell_xfs = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"numFmts" => in_num_fmts = true,
                    b"cellXfs" => in_cell_xfs = true,
                    b"xf" if in_cell_xfs => styles.cell_xfs.push(num_fmt_id_of(e)),
                    _ => {}
                },
                Ok(quick_xml::events::Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"numFmt" if in_num_fmts => {
                        let mut id: Option<u32> = None;
                        let mut format_code = String::new();
                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"numFmtId" => {
                                    id = String::from_utf8_lossy(&attr.value).parse().ok();
                                }
                                b"formatCode" => {
                                    format_code =
                                        attr.unescape_value().unwrap_or_default().to_string();
                                }
                                _ => {}
                            }
                        }
                        if let Some(id) = id {
                            styles.num_fmts.insert(id, format_code);
                        }
                    }
                    b"xf" if in_cell_xfs => styles.cell_xfs.push(num_fmt_id_of(e)),
                    _ => {}
                },
                Ok(quick_xml::events::Event::End(ref e)) => match e.local_name().as_ref() {
                    b"numFmts" => in_num_fmts = false,
                    b"cellXfs" => in_cell_xfs = false,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => {
                    log::warn!("ignoring malformed styles part: {}", e);
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        styles
    }

    /// Get the numFmtId for a cell style index.
    pub fn get_num_fmt_id(&self, style_index: usize) -> Option<u32> {
        self.cell_xfs.get(style_index).copied()
    }

    /// Whether a cell with this style index holds a date serial.
    pub fn is_date_style(&self, style_index: usize) -> bool {
        self.get_num_fmt_id(style_index)
            .is_some_and(|id| self.is_date_format(id))
    }

    /// Check if a numFmtId represents a date format.
    pub fn is_date_format(&self, num_fmt_id: u32) -> bool {
        // Built-in: 14-22 dates, 45-47 times
        if (14..=22).contains(&num_fmt_id) || (45..=47).contains(&num_fmt_id) {
            return true;
        }

        self.num_fmts
            .get(&num_fmt_id)
            .is_some_and(|code| Self::is_date_format_code(code))
    }

    /// Check if a format code string represents a date format.
    ///
    /// Looks for d/m/y/h/s tokens outside of `[...]` sections, quoted
    /// literals and backslash escapes.
    fn is_date_format_code(format_code: &str) -> bool {
        let mut in_bracket = false;
        let mut in_quote = false;
        let mut escaped = false;

        for c in format_code.chars() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' if !in_quote => escaped = true,
                '"' => in_quote = !in_quote,
                '[' if !in_quote => in_bracket = true,
                ']' if !in_quote => in_bracket = false,
                _ if in_bracket || in_quote => {}
                // Only the first section decides; "0;[Red]-0" stays numeric
                ';' => return false,
                _ => {
                    if matches!(c.to_ascii_lowercase(), 'd' | 'm' | 'y' | 'h' | 's') {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Convert an Excel serial date to an ISO 8601 string.
    ///
    /// `date1904` selects the Mac epoch used by workbooks flagged with
    /// `workbookPr date1904="1"`.
    pub fn serial_to_date(serial: f64, date1904: bool) -> Option<String> {
        if !serial.is_finite() || serial < 0.0 {
            return None;
        }

        let serial = if date1904 {
            serial + EPOCH_1904_OFFSET
        } else {
            serial
        };
        if serial.floor() > MAX_DATE_SERIAL {
            return None;
        }

        // Serial 60 is the fictitious 1900-02-29 kept for Lotus 1-2-3 compatibility
        let adjusted = if serial > 60.0 { serial - 1.0 } else { serial };
        let days = adjusted.floor() as i64;
        let (year, month, day) = days_to_ymd(days)?;

        let total_seconds = (serial.fract() * 86400.0).round() as u32;
        if total_seconds == 0 || total_seconds >= 86400 {
            return Some(format!("{:04}-{:02}-{:02}", year, month, day));
        }

        Some(format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            year,
            month,
            day,
            total_seconds / 3600,
            (total_seconds % 3600) / 60,
            total_seconds % 60
        ))
    }
}

fn num_fmt_id_of(e: &quick_xml::events::BytesStart<'_>) -> u32 {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"numFmtId")
        .and_then(|attr| String::from_utf8_lossy(&attr.value).parse().ok())
        .unwrap_or(0)
}

/// Convert days since 1899-12-31 (day 1 = 1900-01-01) to (year, month, day).
fn days_to_ymd(days: i64) -> Option<(i32, u32, u32)> {
    if days < 1 {
        return None;
    }

    let mut year = 1900;
    let mut remaining = days;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining <= days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }

    let months = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1u32;
    for days_in_month in months {
        if remaining <= days_in_month {
            break;
        }
        remaining -= days_in_month;
        month += 1;
    }

    Some((year, month, remaining.max(1) as u32))
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
