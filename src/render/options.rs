//! Rendering options configuration.

/// Minimum field count before body values start in delimited output.
pub const DEFAULT_PAD_COLUMNS: usize = 20;

/// When delimited output wraps fields in quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Quote every field
    #[default]
    Always,
    /// Quote only fields containing the delimiter, a quote or a line break
    Necessary,
}

/// Options for rendering sheet headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the first body row after the header
    pub include_body: bool,

    /// Pad delimited records to this many fields before body values
    pub num_cols_pad: usize,

    /// Quoting of delimited fields
    pub quote: QuoteStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_body: false,
            num_cols_pad: DEFAULT_PAD_COLUMNS,
            quote: QuoteStyle::Always,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the first body row.
    pub fn with_body(mut self, include: bool) -> Self {
        self.include_body = include;
        self
    }

    /// Set the pad column count; `None` keeps the default of 20.
    pub fn with_pad_columns(mut self, pad: Option<usize>) -> Self {
        self.num_cols_pad = pad.unwrap_or(DEFAULT_PAD_COLUMNS);
        self
    }

    /// Set the quoting policy for delimited output.
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }
}
