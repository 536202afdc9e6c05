//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula engine.
//!
//! This crate provides the types shared between the host and the evaluator:
//! - [`Grid`] and [`Cell`] - The read-only sheet snapshot handed to the evaluator
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`CellFormat`] - Per-cell display formatting (ignored by evaluation)
//! - [`CellError`] - The error tags an evaluation can produce
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, Grid};
//!
//! let grid = Grid::from_values(vec![vec!["1", "x"], vec!["2"]]);
//!
//! assert_eq!(grid.get_value_at(0, 1), "x");
//! // Cells outside the populated area read as empty
//! assert_eq!(grid.get_value_at(1, 1), "");
//!
//! let addr = CellAddress::parse("B1").unwrap();
//! assert_eq!(grid.cell_at(addr.row, addr.col).map(|c| c.value.as_str()), Some("x"));
//! ```

pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use cell::{
    Cell, CellAddress, CellError, CellFormat, CellRange, HorizontalAlignment, VerticalAlignment,
};
pub use error::{Error, Result};
pub use grid::Grid;

/// Maximum number of rows addressable from a formula (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns addressable from a formula (Excel limit)
pub const MAX_COLS: u16 = 16_384;
