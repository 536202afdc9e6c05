//! Cell contents

use super::format::CellFormat;

/// One grid entry
///
/// `value` is always the displayed text. For formula cells it holds the last
/// computed result; `formula` keeps the original text (starting with `=`) so
/// the host can show it again when editing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Displayed value
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: String,
    /// Original formula text, if the value was computed
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub formula: Option<String>,
    /// Display formatting
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub format: Option<CellFormat>,
}

impl Cell {
    /// Create a plain value cell
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            formula: None,
            format: None,
        }
    }

    /// Create a cell holding a computed value and the formula that produced it
    pub fn with_formula<V: Into<String>, F: Into<String>>(value: V, formula: F) -> Self {
        Self {
            value: value.into(),
            formula: Some(formula.into()),
            format: None,
        }
    }

    /// Attach a format
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Check if the cell shows nothing
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if the cell's value came from a formula
    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}
