//! Statistical functions
//!
//! These reduce over numeric entries only: numbers, booleans and text that
//! is entirely a number. Empty cells and other text are skipped.

use super::{flatten, numeric_entry};
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{finite, EvaluationContext, FormulaValue};

fn numeric_entries(args: &[FormulaValue]) -> impl Iterator<Item = f64> + '_ {
    flatten(args).into_iter().filter_map(numeric_entry)
}

/// AVERAGE(value, ...)
pub fn fn_average(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let (sum, count) = numeric_entries(args).fold((0.0, 0usize), |(sum, count), n| (sum + n, count + 1));

    if count == 0 {
        return Err(FormulaError::DivisionByZero);
    }
    finite(sum / count as f64)
}

/// COUNT(value, ...)
pub fn fn_count(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(FormulaValue::Number(numeric_entries(args).count() as f64))
}

/// COUNTA(value, ...): non-empty entries of any type
pub fn fn_counta(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let count = flatten(args).into_iter().filter(|v| !v.is_empty()).count();
    Ok(FormulaValue::Number(count as f64))
}

/// MAX(value, ...); empty when there is nothing numeric
pub fn fn_max(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(numeric_entries(args)
        .reduce(f64::max)
        .map_or(FormulaValue::Empty, FormulaValue::Number))
}

/// MIN(value, ...); empty when there is nothing numeric
pub fn fn_min(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(numeric_entries(args)
        .reduce(f64::min)
        .map_or(FormulaValue::Empty, FormulaValue::Number))
}
