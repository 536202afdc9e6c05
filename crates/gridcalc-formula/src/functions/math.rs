//! Math functions

use super::{arg, flatten, integer, numeric_entry};
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{finite, EvaluationContext, FormulaValue};

/// SUM(value, ...)
///
/// Entries without a numeric reading count as 0.
pub fn fn_sum(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let sum: f64 = flatten(args).into_iter().filter_map(numeric_entry).sum();
    finite(sum)
}

/// ABS(number)
pub fn fn_abs(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let number = arg(args, 0, "ABS")?.to_number()?;
    Ok(FormulaValue::Number(number.abs()))
}

/// ROUND(number, [num_digits])
///
/// Rounds half away from zero; negative digits round left of the decimal
/// point.
pub fn fn_round(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let number = arg(args, 0, "ROUND")?.to_number()?;
    let num_digits = match args.get(1) {
        Some(v) => integer(v)?.clamp(-308, 308) as i32,
        None => 0,
    };

    // Scale by an exact power of ten in both directions
    let factor = 10_f64.powi(num_digits.abs());
    let scaled = if num_digits >= 0 {
        number * factor
    } else {
        number / factor
    };
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        // No fractional part left at this scale
        return Ok(FormulaValue::Number(number));
    }

    // Nudge by one ulp so 2.675 rounds like its decimal spelling
    let rounded = if scaled >= 0.0 {
        next_up(scaled).round()
    } else {
        -next_up(-scaled).round()
    };
    finite(if num_digits >= 0 {
        rounded / factor
    } else {
        rounded * factor
    })
}

/// 2^52: every f64 at or above this magnitude is an integer
const MAX_EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;

fn next_up(n: f64) -> f64 {
    if n.is_nan() || n == f64::INFINITY {
        return n;
    }
    if n == 0.0 {
        return f64::from_bits(1);
    }
    f64::from_bits(n.to_bits() + 1)
}

/// MOD(number, divisor)
///
/// The result takes the sign of the divisor.
pub fn fn_mod(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let number = arg(args, 0, "MOD")?.to_number()?;
    let divisor = arg(args, 1, "MOD")?.to_number()?;

    if divisor == 0.0 {
        return Err(FormulaError::DivisionByZero);
    }

    finite(number - divisor * (number / divisor).floor())
}
