//! Logical functions

use super::arg;
use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{evaluate, EvaluationContext, FormulaValue};

/// IF(condition, value_if_true, [value_if_false])
///
/// Only the selected branch is evaluated. A missing false branch yields
/// FALSE.
pub fn fn_if(args: &[FormulaExpr], ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let condition = match args.first() {
        Some(expr) => evaluate(expr, ctx)?.to_bool()?,
        None => return Err(missing_argument("IF", args.len())),
    };

    let branch = if condition { args.get(1) } else { args.get(2) };
    match branch {
        Some(expr) => evaluate(expr, ctx),
        None if condition => Err(missing_argument("IF", args.len())),
        None => Ok(FormulaValue::Boolean(false)),
    }
}

/// IFERROR(value, value_if_error)
pub fn fn_iferror(args: &[FormulaExpr], ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let (value, fallback) = match args {
        [value, fallback] => (value, fallback),
        _ => return Err(missing_argument("IFERROR", args.len())),
    };

    match evaluate(value, ctx) {
        Ok(v) => Ok(v),
        Err(e) => {
            log::trace!("IFERROR replaced error: {}", e);
            evaluate(fallback, ctx)
        }
    }
}

fn missing_argument(function: &str, actual: usize) -> FormulaError {
    FormulaError::ArgumentCount {
        function: function.to_string(),
        expected: "at least 2".to_string(),
        actual,
    }
}

/// Boolean readings of the arguments
///
/// Empty cells and text inside ranges are skipped; a text argument given
/// directly must spell TRUE or FALSE.
fn logical_values(args: &[FormulaValue], function: &str) -> FormulaResult<Vec<bool>> {
    let mut values = Vec::new();

    for arg in args {
        match arg {
            FormulaValue::Array(rows) => {
                for v in rows.iter().flatten() {
                    match v {
                        FormulaValue::Number(_) | FormulaValue::Boolean(_) => {
                            values.push(v.to_bool()?)
                        }
                        _ => {}
                    }
                }
            }
            FormulaValue::Empty => {}
            FormulaValue::String(s)
                if !s.eq_ignore_ascii_case("TRUE") && !s.eq_ignore_ascii_case("FALSE") =>
            {
                return Err(FormulaError::type_mismatch(format!(
                    "{} expects logical values, got \"{}\"",
                    function, s
                )));
            }
            scalar => values.push(scalar.to_bool()?),
        }
    }

    if values.is_empty() {
        return Err(FormulaError::type_mismatch(format!(
            "{} found no logical values",
            function
        )));
    }
    Ok(values)
}

/// AND(logical, ...)
pub fn fn_and(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let values = logical_values(args, "AND")?;
    Ok(FormulaValue::Boolean(values.into_iter().all(|b| b)))
}

/// OR(logical, ...)
pub fn fn_or(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let values = logical_values(args, "OR")?;
    Ok(FormulaValue::Boolean(values.into_iter().any(|b| b)))
}

/// NOT(logical)
pub fn fn_not(args: &[FormulaValue], _ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    let value = arg(args, 0, "NOT")?.to_bool()?;
    Ok(FormulaValue::Boolean(!value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EvaluationOptions;
    use crate::parser::parse_formula;
    use gridcalc_core::Grid;
    use pretty_assertions::assert_eq;

    fn eval_in(grid: &Grid, formula: &str) -> FormulaResult<FormulaValue> {
        let ast = parse_formula(formula)?;
        let options = EvaluationOptions::default();
        evaluate(&ast, &EvaluationContext::new(grid, &options))
    }

    fn eval(formula: &str) -> FormulaResult<FormulaValue> {
        eval_in(&Grid::new(), formula)
    }

    #[test]
    fn test_if() {
        assert_eq!(eval("=IF(1>0,\"yes\",\"no\")"), Ok(FormulaValue::from("yes")));
        assert_eq!(eval("=IF(1<0,\"yes\",\"no\")"), Ok(FormulaValue::from("no")));
        assert_eq!(eval("=IF(FALSE,1)"), Ok(FormulaValue::Boolean(false)));
        assert_eq!(eval("=IF(TRUE,1)"), Ok(FormulaValue::Number(1.0)));
    }

    #[test]
    fn test_if_is_lazy() {
        assert_eq!(eval("=IF(TRUE,1,1/0)"), Ok(FormulaValue::Number(1.0)));
        assert_eq!(eval("=IF(FALSE,1/0,2)"), Ok(FormulaValue::Number(2.0)));
        assert_eq!(eval("=IF(TRUE,1,NOSUCH(1))"), Ok(FormulaValue::Number(1.0)));
        assert_eq!(eval("=IF(TRUE,1,undefined_name)"), Ok(FormulaValue::Number(1.0)));
        // The chosen branch still fails normally
        assert_eq!(eval("=IF(TRUE,1/0,1)"), Err(FormulaError::DivisionByZero));
    }

    #[test]
    fn test_if_condition_coercion() {
        let grid = Grid::from_values([["0", "5", "", "text", "false"]]);
        assert_eq!(eval_in(&grid, "=IF(A1,\"t\",\"f\")"), Ok(FormulaValue::from("f")));
        assert_eq!(eval_in(&grid, "=IF(B1,\"t\",\"f\")"), Ok(FormulaValue::from("t")));
        assert_eq!(eval_in(&grid, "=IF(C1,\"t\",\"f\")"), Ok(FormulaValue::from("f")));
        assert_eq!(eval_in(&grid, "=IF(D1,\"t\",\"f\")"), Ok(FormulaValue::from("t")));
        assert_eq!(eval_in(&grid, "=IF(E1,\"t\",\"f\")"), Ok(FormulaValue::from("f")));
        assert!(matches!(
            eval_in(&grid, "=IF(A1:B1,1,2)"),
            Err(FormulaError::Type(_))
        ));
    }

    #[test]
    fn test_if_arity() {
        assert!(matches!(
            eval("=IF(TRUE)"),
            Err(FormulaError::ArgumentCount { .. })
        ));
        assert!(matches!(
            eval("=IF(TRUE,1,2,3)"),
            Err(FormulaError::ArgumentCount { .. })
        ));
    }

    #[test]
    fn test_iferror() {
        assert_eq!(eval("=IFERROR(1/0,\"oops\")"), Ok(FormulaValue::from("oops")));
        assert_eq!(eval("=IFERROR(5,1/0)"), Ok(FormulaValue::Number(5.0)));
        assert_eq!(eval("=IFERROR(FOO(),0)"), Ok(FormulaValue::Number(0.0)));
        assert_eq!(eval("=IFERROR(1/0,1/0)"), Err(FormulaError::DivisionByZero));
    }

    #[test]
    fn test_and_or_not() {
        assert_eq!(eval("=AND(TRUE,TRUE)"), Ok(FormulaValue::Boolean(true)));
        assert_eq!(eval("=AND(TRUE,FALSE)"), Ok(FormulaValue::Boolean(false)));
        assert_eq!(eval("=AND(1,2>1)"), Ok(FormulaValue::Boolean(true)));
        assert_eq!(eval("=OR(FALSE,FALSE)"), Ok(FormulaValue::Boolean(false)));
        assert_eq!(eval("=OR(FALSE,\"true\")"), Ok(FormulaValue::Boolean(true)));
        assert_eq!(eval("=NOT(TRUE)"), Ok(FormulaValue::Boolean(false)));
        assert_eq!(eval("=NOT(0)"), Ok(FormulaValue::Boolean(true)));
    }

    #[test]
    fn test_and_or_over_ranges() {
        let grid = Grid::from_values([["1", "x", ""], ["0", "", ""]]);
        assert_eq!(eval_in(&grid, "=AND(A1:C1)"), Ok(FormulaValue::Boolean(true)));
        assert_eq!(eval_in(&grid, "=AND(A1:C2)"), Ok(FormulaValue::Boolean(false)));
        assert_eq!(eval_in(&grid, "=OR(A1:C2)"), Ok(FormulaValue::Boolean(true)));
        assert!(matches!(eval_in(&grid, "=OR(B1:C2)"), Err(FormulaError::Type(_))));
        assert!(matches!(eval("=AND(\"maybe\")"), Err(FormulaError::Type(_))));
    }
}
