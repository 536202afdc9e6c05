//! Cell and range resolution
//!
//! The grid only stores display strings. Values are typed here, at the
//! moment a reference is read: a string that is entirely a decimal number
//! becomes a number, an empty string becomes [`FormulaValue::Empty`], and
//! everything else stays text.

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::FormulaValue;
use gridcalc_core::{CellAddress, CellRange, Grid};
use lazy_regex::regex_is_match;

/// Parse text that is entirely a finite decimal number
///
/// Surrounding whitespace is ignored. Partial matches such as `"12abc"` and
/// spellings like `"inf"` or `"0x10"` are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if !regex_is_match!(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$", text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Type a raw cell string
pub fn coerce_cell_value(raw: &str) -> FormulaValue {
    if raw.is_empty() {
        return FormulaValue::Empty;
    }
    match parse_number(raw) {
        Some(n) => FormulaValue::Number(n),
        None => FormulaValue::String(raw.to_string()),
    }
}

/// Read one cell; anything outside the grid is empty
pub fn resolve_cell(grid: &Grid, address: &CellAddress) -> FormulaValue {
    coerce_cell_value(grid.get_value_at(address.row, address.col))
}

/// Read a rectangle of cells, row-major, as a matrix
///
/// Fails with a reference error, before reading anything, when the range
/// covers more than `max_cells` cells.
pub fn resolve_range(grid: &Grid, range: &CellRange, max_cells: u64) -> FormulaResult<FormulaValue> {
    let cell_count = range.cell_count();
    if cell_count > max_cells {
        return Err(FormulaError::InvalidReference(format!(
            "range {} covers {} cells, more than the {} allowed",
            range, cell_count, max_cells
        )));
    }

    let width = range.col_count() as usize;
    let mut rows = Vec::with_capacity(range.row_count() as usize);
    for row in range.start.row..=range.end.row {
        let values = match grid.row(row) {
            Some(cells) => (range.start.col..=range.end.col)
                .map(|col| match cells.get(col as usize) {
                    Some(cell) => coerce_cell_value(&cell.value),
                    None => FormulaValue::Empty,
                })
                .collect(),
            None => vec![FormulaValue::Empty; width],
        };
        rows.push(values);
    }

    Ok(FormulaValue::Array(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number("+.5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));

        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("0x10"), None);
        assert_eq!(parse_number("1,000"), None);
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn test_coerce_cell_value() {
        assert_eq!(coerce_cell_value(""), FormulaValue::Empty);
        assert_eq!(coerce_cell_value("7"), FormulaValue::Number(7.0));
        assert_eq!(
            coerce_cell_value("abc"),
            FormulaValue::String("abc".into())
        );
        assert_eq!(coerce_cell_value("  "), FormulaValue::String("  ".into()));
        // Booleans are only produced by formulas, never by stored text
        assert_eq!(
            coerce_cell_value("TRUE"),
            FormulaValue::String("TRUE".into())
        );
    }

    #[test]
    fn test_resolve_cell_out_of_bounds() {
        let grid = Grid::from_values([["1", "x"], ["2", ""]]);

        assert_eq!(
            resolve_cell(&grid, &CellAddress::new(0, 0)),
            FormulaValue::Number(1.0)
        );
        assert_eq!(
            resolve_cell(&grid, &CellAddress::new(0, 1)),
            FormulaValue::String("x".into())
        );
        assert_eq!(resolve_cell(&grid, &CellAddress::new(1, 1)), FormulaValue::Empty);
        assert_eq!(resolve_cell(&grid, &CellAddress::new(0, 9)), FormulaValue::Empty);
        assert_eq!(resolve_cell(&grid, &CellAddress::new(99, 0)), FormulaValue::Empty);
    }

    #[test]
    fn test_resolve_range_row_major() {
        // Ragged rows
        let grid = Grid::from_values(vec![vec!["1", "2"], vec!["3"]]);
        let range = CellRange::parse("A1:B3").unwrap();

        let value = resolve_range(&grid, &range, 100).unwrap();
        assert_eq!(
            value,
            FormulaValue::Array(vec![
                vec![FormulaValue::Number(1.0), FormulaValue::Number(2.0)],
                vec![FormulaValue::Number(3.0), FormulaValue::Empty],
                vec![FormulaValue::Empty, FormulaValue::Empty],
            ])
        );
    }

    #[test]
    fn test_resolve_range_limit() {
        let grid = Grid::new();
        let range = CellRange::parse("A1:J10").unwrap();

        assert!(resolve_range(&grid, &range, 100).is_ok());
        assert!(matches!(
            resolve_range(&grid, &range, 99),
            Err(FormulaError::InvalidReference(_))
        ));
    }
}
