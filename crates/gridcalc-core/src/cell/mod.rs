//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - One grid entry: display value, optional formula text and format
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`CellError`] - Error tags shown in place of a computed value
//! - [`CellFormat`] - Partial style record attached to a cell

mod address;
mod data;
mod error;
mod format;

pub use address::{CellAddress, CellRange};
pub use data::Cell;
pub use error::CellError;
pub use format::{CellFormat, HorizontalAlignment, VerticalAlignment};
