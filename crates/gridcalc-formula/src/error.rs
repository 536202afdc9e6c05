//! Formula error types

use gridcalc_core::CellError;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Malformed formula text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Reference or lookup index outside its target
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Operand or argument of the wrong type
    #[error("Type mismatch: {0}")]
    Type(String),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Lookup value not found
    #[error("Value not available: {0}")]
    NotAvailable(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Identifier that is neither a reference nor a function call
    #[error("Unknown name: {0}")]
    UnknownName(String),

    /// Result is not a finite number
    #[error("Numeric error: {0}")]
    Numeric(String),
}

impl FormulaError {
    /// The conventional spreadsheet tag for this error
    pub fn cell_error(&self) -> CellError {
        match self {
            FormulaError::Parse(_) | FormulaError::ArgumentCount { .. } => CellError::Generic,
            FormulaError::InvalidReference(_) => CellError::Ref,
            FormulaError::Type(_) => CellError::Value,
            FormulaError::DivisionByZero => CellError::Div0,
            FormulaError::NotAvailable(_) => CellError::Na,
            FormulaError::UnknownFunction(_) | FormulaError::UnknownName(_) => CellError::Name,
            FormulaError::Numeric(_) => CellError::Num,
        }
    }

    pub(crate) fn type_mismatch<S: Into<String>>(msg: S) -> Self {
        FormulaError::Type(msg.into())
    }
}

impl From<gridcalc_core::Error> for FormulaError {
    fn from(err: gridcalc_core::Error) -> Self {
        FormulaError::Parse(err.to_string())
    }
}
