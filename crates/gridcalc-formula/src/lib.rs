//! # gridcalc-formula
//!
//! Formula parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - Formula parsing (text → AST), with a nesting limit
//! - Reference resolution against a read-only [`Grid`](gridcalc_core::Grid)
//! - Formula evaluation (AST → value)
//! - Built-in functions (SUM, AVERAGE, IF, VLOOKUP, text functions, ...)
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::Grid;
//! use gridcalc_formula::{evaluate, parse_formula, EvaluationContext, EvaluationOptions, FormulaValue};
//!
//! let grid = Grid::from_values([["1"], ["2"], ["3"]]);
//! let options = EvaluationOptions::default();
//! let ctx = EvaluationContext::new(&grid, &options);
//!
//! let ast = parse_formula("=SUM(A1:A3)").unwrap();
//! assert_eq!(evaluate(&ast, &ctx).unwrap(), FormulaValue::Number(6.0));
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod options;
pub mod parser;
pub mod reference;

pub use ast::{BinaryOperator, FormulaExpr, ParsedFormula, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{
    compare_values, evaluate, format_number, function_registry, EvaluationContext, FormulaValue,
};
pub use functions::{FunctionDef, FunctionImpl, FunctionRegistry};
pub use options::{ErrorDisplay, EvaluationOptions};
pub use parser::{parse_formula, parse_formula_with_limit, parse_formula_with_options};
