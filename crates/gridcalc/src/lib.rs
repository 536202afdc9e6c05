//! # gridcalc
//!
//! Evaluates Excel-style formulas against a spreadsheet grid snapshot.
//!
//! The host hands over a formula string and a read-only [`Grid`] of string
//! cells; gridcalc parses the formula, resolves `A1` and `A1:B10`
//! references, applies operators and built-in functions, and returns the
//! display string or an error tag. There is no dependency graph: referenced
//! cells are read as stored.
//!
//! ## Features
//!
//! - Arithmetic, comparison and `&` concatenation with standard precedence
//! - Built-ins: SUM, AVERAGE, COUNT, COUNTA, MAX, MIN, ABS, ROUND, MOD, IF,
//!   IFERROR, AND, OR, NOT, VLOOKUP, HLOOKUP, CONCATENATE, LEFT, RIGHT, MID,
//!   LEN, UPPER, LOWER, TRIM
//! - Generic `#ERROR!` sentinel by default, or specific tags (`#DIV/0!`,
//!   `#REF!`, `#N/A`, ...) on request
//! - Optional `serde` support for grid snapshots and options
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut grid = Grid::new();
//! grid.set_cell_value("A1", "1").unwrap();
//! grid.set_cell_value("A2", "2").unwrap();
//! grid.set_cell_value("A3", "3").unwrap();
//!
//! assert_eq!(grid.evaluate("=SUM(A1:A3)"), "6");
//! assert_eq!(grid.evaluate("=average(a1:a3)"), "2");
//! assert_eq!(grid.evaluate("=IF(A3>A1,\"up\",\"down\")"), "up");
//!
//! // Store a result next to its formula, the way a host would
//! grid.set_cell_formula("B1", "=A1+A2").unwrap();
//! assert_eq!(grid.get_value("B1").unwrap(), "3");
//! ```

pub mod evaluation;
pub mod prelude;

// Re-export evaluation entry points
pub use evaluation::{
    evaluate, evaluate_detailed, evaluate_with_options, try_evaluate, EvaluationResult,
    GridEvaluationExt,
};

// Re-export core types
pub use gridcalc_core::{
    Cell, CellAddress, CellError, CellFormat, CellRange, Error, Grid, HorizontalAlignment, Result,
    VerticalAlignment, MAX_COLS, MAX_ROWS,
};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate as evaluate_expression, parse_formula, parse_formula_with_limit,
    parse_formula_with_options, ErrorDisplay,
    EvaluationContext, EvaluationOptions, FormulaError, FormulaExpr, FormulaResult, FormulaValue,
};
