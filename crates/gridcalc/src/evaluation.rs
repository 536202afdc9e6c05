//! Host-facing formula evaluation
//!
//! Every call builds its own parser and evaluation context and only borrows
//! the grid, so evaluation is a pure function of the formula text and the
//! grid contents. Malformed input never panics; it produces an error tag.
//!
//! # Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let grid = Grid::from_values([["5", "7"]]);
//!
//! assert_eq!(gridcalc::evaluate("=A1+B1", &grid), "12");
//! assert_eq!(gridcalc::evaluate("=SUM(", &grid), "#ERROR!");
//!
//! let detailed = EvaluationOptions::default().with_error_display(ErrorDisplay::Detailed);
//! assert_eq!(grid.evaluate_with_options("=A1/0", &detailed), "#DIV/0!");
//! ```

use crate::{
    evaluate_expression, parse_formula_with_options, CellError, ErrorDisplay, EvaluationContext,
    EvaluationOptions, FormulaResult, Grid, Result,
};
use std::fmt;

/// Outcome of evaluating one formula
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum EvaluationResult {
    /// Rendered display value
    Success(String),
    /// The specific error tag
    Error(CellError),
}

impl EvaluationResult {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, EvaluationResult::Error(_))
    }

    /// Get the error tag if this is one
    pub fn error(&self) -> Option<CellError> {
        match self {
            EvaluationResult::Error(e) => Some(*e),
            EvaluationResult::Success(_) => None,
        }
    }

    /// Render for display, collapsing errors to `#ERROR!` in generic mode
    pub fn render(&self, display: ErrorDisplay) -> String {
        match (self, display) {
            (EvaluationResult::Success(value), _) => value.clone(),
            (EvaluationResult::Error(_), ErrorDisplay::Generic) => {
                CellError::Generic.as_str().to_string()
            }
            (EvaluationResult::Error(e), ErrorDisplay::Detailed) => e.as_str().to_string(),
        }
    }

    /// Consume into the display string, collapsing errors as [`render`](Self::render) does
    pub fn into_display(self, display: ErrorDisplay) -> String {
        match self {
            EvaluationResult::Success(value) => value,
            error => error.render(display),
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationResult::Success(value) => f.write_str(value),
            EvaluationResult::Error(e) => write!(f, "{}", e),
        }
    }
}

/// Evaluate a formula against a grid and render the result
///
/// The leading `=` is optional. Every failure renders as `#ERROR!`.
pub fn evaluate(formula: &str, grid: &Grid) -> String {
    evaluate_with_options(formula, grid, &EvaluationOptions::default())
}

/// Evaluate with explicit options, rendering errors per `options.error_display`
pub fn evaluate_with_options(formula: &str, grid: &Grid, options: &EvaluationOptions) -> String {
    evaluate_detailed(formula, grid, options).into_display(options.error_display)
}

/// Evaluate and keep the specific error tag
pub fn evaluate_detailed(
    formula: &str,
    grid: &Grid,
    options: &EvaluationOptions,
) -> EvaluationResult {
    match try_evaluate(formula, grid, options) {
        Ok(value) => {
            log::trace!("{} => {:?}", formula, value);
            EvaluationResult::Success(value)
        }
        Err(e) => {
            log::debug!("Formula {:?} failed: {}", formula, e);
            EvaluationResult::Error(e.cell_error())
        }
    }
}

/// Parse, evaluate and render, keeping the full error
pub fn try_evaluate(formula: &str, grid: &Grid, options: &EvaluationOptions) -> FormulaResult<String> {
    let ast = parse_formula_with_options(formula, options)?;
    let ctx = EvaluationContext::new(grid, options);
    evaluate_expression(&ast, &ctx)?.to_text()
}

/// Extension trait for Grid to add evaluation methods
pub trait GridEvaluationExt {
    /// Evaluate a formula against this grid with default options
    fn evaluate(&self, formula: &str) -> String;

    /// Evaluate a formula with custom options
    fn evaluate_with_options(&self, formula: &str, options: &EvaluationOptions) -> String;

    /// Evaluate a formula, keeping the specific error tag
    fn evaluate_detailed(&self, formula: &str, options: &EvaluationOptions) -> EvaluationResult;

    /// Evaluate a formula and store the rendered result with its text
    ///
    /// The formula reads the grid as it was before the write. Other cells
    /// are not recalculated. Returns the stored display value.
    fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<String>;
}

impl GridEvaluationExt for Grid {
    fn evaluate(&self, formula: &str) -> String {
        evaluate(formula, self)
    }

    fn evaluate_with_options(&self, formula: &str, options: &EvaluationOptions) -> String {
        evaluate_with_options(formula, self, options)
    }

    fn evaluate_detailed(&self, formula: &str, options: &EvaluationOptions) -> EvaluationResult {
        evaluate_detailed(formula, self, options)
    }

    fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<String> {
        let addr = crate::CellAddress::parse(address)?;
        let value = evaluate(formula, self);
        self.set_cell_formula_at(addr.row, addr.col, value.clone(), formula);
        Ok(value)
    }
}
