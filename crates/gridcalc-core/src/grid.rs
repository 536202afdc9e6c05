//! Grid snapshot
//!
//! The grid is a ragged two-dimensional array of [`Cell`]s owned by the host.
//! Rows may have different lengths. Reading anything outside the populated
//! area yields an empty value rather than an error.

use crate::cell::{Cell, CellAddress, CellRange};
use crate::error::Result;

/// Ordered rows of ordered cells
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing rows
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid of plain value cells
    ///
    /// ```rust
    /// use gridcalc_core::Grid;
    ///
    /// let grid = Grid::from_values([["x", "1"], ["y", "2"]]);
    /// assert_eq!(grid.get_value_at(1, 0), "y");
    /// ```
    pub fn from_values<R, I, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::new).collect())
                .collect(),
        }
    }

    /// Number of rows (including trailing empty ones the host kept)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row's cells
    pub fn row(&self, row: u32) -> Option<&[Cell]> {
        self.rows.get(row as usize).map(Vec::as_slice)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get a cell by A1-style address
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by row/column (0-based)
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(row as usize)?.get(col as usize)
    }

    /// Get the displayed value by A1-style address (empty when absent)
    pub fn get_value(&self, address: &str) -> Result<&str> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get the displayed value by row/column (empty when absent)
    pub fn get_value_at(&self, row: u32, col: u16) -> &str {
        self.cell_at(row, col).map_or("", |c| c.value.as_str())
    }

    /// Set a plain value by A1-style address
    pub fn set_cell_value<S: Into<String>>(&mut self, address: &str, value: S) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_at(addr.row, addr.col, Cell::new(value));
        Ok(())
    }

    /// Set a plain value by row/column, padding the grid as needed
    pub fn set_cell_value_at<S: Into<String>>(&mut self, row: u32, col: u16, value: S) {
        self.set_cell_at(row, col, Cell::new(value));
    }

    /// Store a computed value together with its formula text
    pub fn set_cell_formula_at<V, F>(&mut self, row: u32, col: u16, value: V, formula: F)
    where
        V: Into<String>,
        F: Into<String>,
    {
        self.set_cell_at(row, col, Cell::with_formula(value, formula));
    }

    /// Replace a cell, padding missing rows and cells with empty ones
    pub fn set_cell_at(&mut self, row: u32, col: u16, cell: Cell) {
        let (row, col) = (row as usize, col as usize);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, Cell::default);
        }
        cells[col] = cell;
    }

    /// Smallest range covering every non-empty cell
    pub fn used_range(&self) -> Option<CellRange> {
        let mut bounds: Option<(u32, u16, u32, u16)> = None;

        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let (r, c) = (r as u32, c as u16);
                bounds = Some(match bounds {
                    None => (r, c, r, c),
                    Some((r0, c0, r1, c1)) => (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
                });
            }
        }

        bounds.map(|(r0, c0, r1, c1)| {
            CellRange::new(CellAddress::new(r0, c0), CellAddress::new(r1, c1))
        })
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}
