//! Lookup functions

use super::{arg, integer};
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{compare_values, EvaluationContext, FormulaValue};
use std::cmp::Ordering;

fn values_equal(a: &FormulaValue, b: &FormulaValue) -> bool {
    match (a, b) {
        (FormulaValue::Number(x), FormulaValue::Number(y)) => x == y,
        (FormulaValue::Boolean(x), FormulaValue::Boolean(y)) => x == y,
        (FormulaValue::String(x), FormulaValue::String(y)) => x.to_lowercase() == y.to_lowercase(),

        // Numeric text matches the number it spells
        (FormulaValue::Number(x), FormulaValue::String(s))
        | (FormulaValue::String(s), FormulaValue::Number(x)) => {
            crate::reference::parse_number(s).is_some_and(|n| n == *x)
        }

        (FormulaValue::Empty, FormulaValue::Empty) => true,
        (FormulaValue::Empty, FormulaValue::String(s))
        | (FormulaValue::String(s), FormulaValue::Empty) => s.is_empty(),

        _ => false,
    }
}

/// Same kind of value, so ordering between them is meaningful
fn comparable(a: &FormulaValue, b: &FormulaValue) -> bool {
    matches!(
        (a, b),
        (FormulaValue::Number(_), FormulaValue::Number(_))
            | (FormulaValue::String(_), FormulaValue::String(_))
            | (FormulaValue::Boolean(_), FormulaValue::Boolean(_))
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// Keys down the first column (VLOOKUP)
    Vertical,
    /// Keys across the first row (HLOOKUP)
    Horizontal,
}

impl Orientation {
    fn function_name(self) -> &'static str {
        match self {
            Orientation::Vertical => "VLOOKUP",
            Orientation::Horizontal => "HLOOKUP",
        }
    }
}

static EMPTY: FormulaValue = FormulaValue::Empty;

/// Read-only view of a table along the lookup direction
struct LookupTable<'a> {
    rows: &'a [Vec<FormulaValue>],
    orientation: Orientation,
}

impl<'a> LookupTable<'a> {
    /// Number of keys
    fn len(&self) -> usize {
        match self.orientation {
            Orientation::Vertical => self.rows.len(),
            Orientation::Horizontal => self.rows.first().map_or(0, Vec::len),
        }
    }

    /// Number of result lines (columns for VLOOKUP, rows for HLOOKUP)
    fn depth(&self) -> usize {
        match self.orientation {
            Orientation::Vertical => self.rows.first().map_or(0, Vec::len),
            Orientation::Horizontal => self.rows.len(),
        }
    }

    fn get(&self, key: usize, line: usize) -> &'a FormulaValue {
        let cell = match self.orientation {
            Orientation::Vertical => self.rows.get(key).and_then(|r| r.get(line)),
            Orientation::Horizontal => self.rows.get(line).and_then(|r| r.get(key)),
        };
        cell.unwrap_or(&EMPTY)
    }

    fn key(&self, index: usize) -> &'a FormulaValue {
        self.get(index, 0)
    }

    /// First key equal to `value`
    fn find_exact(&self, value: &FormulaValue) -> Option<usize> {
        (0..self.len()).find(|&i| values_equal(self.key(i), value))
    }

    /// Last key not greater than `value`, scanning until a larger key
    ///
    /// Keys of a different kind than `value` are skipped.
    fn find_approximate(&self, value: &FormulaValue) -> Option<usize> {
        let mut found = None;
        for i in 0..self.len() {
            let key = self.key(i);
            if !comparable(key, value) {
                continue;
            }
            match compare_values(key, value) {
                Ordering::Greater => break,
                _ => found = Some(i),
            }
        }
        found
    }
}

fn lookup(args: &[FormulaValue], orientation: Orientation) -> FormulaResult<FormulaValue> {
    let function = orientation.function_name();

    let value = arg(args, 0, function)?.clone().into_scalar()?;
    let rows = match arg(args, 1, function)? {
        FormulaValue::Array(rows) => rows,
        _ => {
            return Err(FormulaError::type_mismatch(format!(
                "{} expects a range as its table",
                function
            )))
        }
    };
    let index = integer(arg(args, 2, function)?)?;
    let approximate = match args.get(3) {
        Some(v) => v.to_bool()?,
        None => false,
    };

    let table = LookupTable { rows, orientation };

    if index < 1 {
        return Err(FormulaError::type_mismatch(format!(
            "{} index must be at least 1, got {}",
            function, index
        )));
    }
    let line = (index - 1) as usize;
    if line >= table.depth() {
        return Err(FormulaError::InvalidReference(format!(
            "{} index {} is outside a table of {}",
            function,
            index,
            table.depth()
        )));
    }

    let found = if approximate {
        table.find_approximate(&value)
    } else {
        table.find_exact(&value)
    };

    match found {
        Some(key) => Ok(table.get(key, line).clone()),
        None => Err(FormulaError::NotAvailable(format!(
            "{} found no match for {:?}",
            function, value
        ))),
    }
}

/// VLOOKUP(lookup_value, table_array, col_index_num, [range_lookup])
///
/// Exact match unless `range_lookup` is TRUE. Approximate matching expects
/// the first column sorted ascending.
pub fn fn_vlookup(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    lookup(args, Orientation::Vertical)
}

/// HLOOKUP(lookup_value, table_array, row_index_num, [range_lookup])
pub fn fn_hlookup(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    lookup(args, Orientation::Horizontal)
}
