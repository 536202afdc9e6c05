//! Error tags shown in place of a computed cell value

use std::fmt;

/// Error values an evaluation can produce
///
/// Hosts that only want the single generic sentinel can render every error as
/// [`CellError::Generic`]; the other tags follow conventional spreadsheet codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #ERROR! - Generic failure (malformed formula, wrong argument count)
    Generic,
    /// #REF! - Reference or lookup target out of bounds
    Ref,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #N/A - Lookup value not found
    Na,
    /// #NAME? - Unknown function or name
    Name,
    /// #NUM! - Result is not a finite number
    Num,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Generic => "#ERROR!",
            CellError::Ref => "#REF!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Na => "#N/A",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
        }
    }

    /// Parse an error string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "#ERROR!" => Some(CellError::Generic),
            "#REF!" => Some(CellError::Ref),
            "#DIV/0!" => Some(CellError::Div0),
            "#VALUE!" => Some(CellError::Value),
            "#N/A" => Some(CellError::Na),
            "#NAME?" => Some(CellError::Name),
            "#NUM!" => Some(CellError::Num),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
