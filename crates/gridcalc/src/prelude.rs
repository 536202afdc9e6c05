//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Grid types
    Cell,
    CellAddress,
    CellError,
    CellFormat,
    CellRange,
    // Error types
    Error,
    // Options
    ErrorDisplay,
    EvaluationOptions,
    EvaluationResult,
    FormulaError,
    Grid,
    // Extension traits
    GridEvaluationExt,
    HorizontalAlignment,
    Result,
    VerticalAlignment,
};
