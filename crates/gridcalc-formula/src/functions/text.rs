//! Text functions
//!
//! Lengths and positions count characters, not bytes.

use super::{arg, flatten, integer};
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{EvaluationContext, FormulaValue};

fn take_left(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn take_right(s: &str, n: usize) -> String {
    let len = s.chars().count();
    if n >= len {
        return s.to_string();
    }
    s.chars().skip(len - n).collect()
}

fn take_mid(s: &str, start_1based: usize, n: usize) -> String {
    s.chars().skip(start_1based.saturating_sub(1)).take(n).collect()
}

/// Optional character count argument, defaulting to 1
fn char_count(args: &[FormulaValue], index: usize, function: &str) -> FormulaResult<usize> {
    let n = match args.get(index) {
        Some(v) => integer(v)?,
        None => 1,
    };
    if n < 0 {
        return Err(FormulaError::type_mismatch(format!(
            "{} character count cannot be negative, got {}",
            function, n
        )));
    }
    Ok(n as usize)
}

fn text_arg(args: &[FormulaValue], function: &str) -> FormulaResult<String> {
    arg(args, 0, function)?.to_text()
}

/// CONCATENATE(text, ...)
pub fn fn_concatenate(
    args: &[FormulaValue],
    _ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let mut result = String::new();
    for value in flatten(args) {
        result.push_str(&value.to_text()?);
    }
    Ok(FormulaValue::String(result))
}

/// LEFT(text, [num_chars])
pub fn fn_left(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let s = text_arg(args, "LEFT")?;
    let n = char_count(args, 1, "LEFT")?;
    Ok(FormulaValue::String(take_left(&s, n)))
}

/// RIGHT(text, [num_chars])
pub fn fn_right(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let s = text_arg(args, "RIGHT")?;
    let n = char_count(args, 1, "RIGHT")?;
    Ok(FormulaValue::String(take_right(&s, n)))
}

/// MID(text, start_num, num_chars)
pub fn fn_mid(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let s = text_arg(args, "MID")?;
    let start = integer(arg(args, 1, "MID")?)?;
    if start < 1 {
        return Err(FormulaError::InvalidReference(format!(
            "MID start must be at least 1, got {}",
            start
        )));
    }
    let n = char_count(args, 2, "MID")?;
    Ok(FormulaValue::String(take_mid(&s, start as usize, n)))
}

/// LEN(text)
pub fn fn_len(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let s = text_arg(args, "LEN")?;
    Ok(FormulaValue::Number(s.chars().count() as f64))
}

/// UPPER(text)
pub fn fn_upper(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(FormulaValue::String(text_arg(args, "UPPER")?.to_uppercase()))
}

/// LOWER(text)
pub fn fn_lower(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    Ok(FormulaValue::String(text_arg(args, "LOWER")?.to_lowercase()))
}

/// TRIM(text): strip leading and trailing spaces, collapse inner runs to one
pub fn fn_trim(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let s = text_arg(args, "TRIM")?;
    let trimmed = s
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(FormulaValue::String(trimmed))
}
