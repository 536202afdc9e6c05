//! Formula evaluator
//!
//! Evaluates formula ASTs against a borrowed [`Grid`] to produce values.

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::{FunctionImpl, FunctionRegistry};
use crate::options::EvaluationOptions;
use crate::reference;
use gridcalc_core::{CellAddress, CellRange, Grid};
use std::borrow::Cow;
use std::cell::Cell;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Global function registry (lazily initialized, read-only afterwards)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// The built-in function table
pub fn function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Value types during formula evaluation
///
/// Failures are not values: they travel as [`FormulaError`] through `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    String(String),
    Boolean(bool),
    /// Matrix of values from a range, row-major
    Array(Vec<Vec<FormulaValue>>),
    Empty,
}

impl FormulaValue {
    /// Convert to number, if possible
    ///
    /// Empty is 0, booleans are 1/0, and text converts only when it is
    /// entirely a decimal number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            FormulaValue::Boolean(true) => Some(1.0),
            FormulaValue::Boolean(false) => Some(0.0),
            FormulaValue::String(s) => reference::parse_number(s),
            FormulaValue::Empty => Some(0.0),
            FormulaValue::Array(_) => None,
        }
    }

    /// Force conversion to number for arithmetic
    pub fn to_number(&self) -> FormulaResult<f64> {
        match self {
            FormulaValue::Number(n) => Ok(*n),
            FormulaValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            FormulaValue::Empty => Ok(0.0),
            FormulaValue::String(s) => reference::parse_number(s).ok_or_else(|| {
                FormulaError::type_mismatch(format!("cannot convert \"{}\" to a number", s))
            }),
            FormulaValue::Array(_) => Err(range_as_scalar()),
        }
    }

    /// Convert to boolean
    ///
    /// Numbers are true when non-zero. Text `"TRUE"` and `"FALSE"` read as
    /// booleans (case-insensitive); any other non-empty text is true.
    pub fn to_bool(&self) -> FormulaResult<bool> {
        match self {
            FormulaValue::Boolean(b) => Ok(*b),
            FormulaValue::Number(n) => Ok(*n != 0.0),
            FormulaValue::String(s) => {
                if s.eq_ignore_ascii_case("TRUE") {
                    Ok(true)
                } else if s.eq_ignore_ascii_case("FALSE") {
                    Ok(false)
                } else {
                    Ok(!s.is_empty())
                }
            }
            FormulaValue::Empty => Ok(false),
            FormulaValue::Array(_) => Err(range_as_scalar()),
        }
    }

    /// Convert to the display string
    ///
    /// ```rust
    /// use gridcalc_formula::FormulaValue;
    ///
    /// assert_eq!(FormulaValue::Number(14.0).to_text().unwrap(), "14");
    /// assert_eq!(FormulaValue::Number(1e21).to_text().unwrap(), "1e+21");
    /// assert_eq!(FormulaValue::Boolean(true).to_text().unwrap(), "true");
    /// assert_eq!(FormulaValue::Empty.to_text().unwrap(), "");
    /// ```
    pub fn to_text(&self) -> FormulaResult<String> {
        match self {
            FormulaValue::Number(n) if !n.is_finite() => Err(FormulaError::Numeric(format!(
                "{} cannot be displayed",
                n
            ))),
            FormulaValue::Number(n) => Ok(format_number(*n)),
            FormulaValue::String(s) => Ok(s.clone()),
            FormulaValue::Boolean(b) => Ok(b.to_string()),
            FormulaValue::Empty => Ok(String::new()),
            FormulaValue::Array(_) => Err(range_as_scalar()),
        }
    }

    /// Fail on matrices, pass scalars through
    pub fn into_scalar(self) -> FormulaResult<FormulaValue> {
        match self {
            FormulaValue::Array(_) => Err(range_as_scalar()),
            value => Ok(value),
        }
    }

    /// Check if this is a matrix
    pub fn is_array(&self) -> bool {
        matches!(self, FormulaValue::Array(_))
    }

    /// Check if this is the empty value
    pub fn is_empty(&self) -> bool {
        matches!(self, FormulaValue::Empty)
    }
}

impl From<f64> for FormulaValue {
    fn from(n: f64) -> Self {
        FormulaValue::Number(n)
    }
}

impl From<bool> for FormulaValue {
    fn from(b: bool) -> Self {
        FormulaValue::Boolean(b)
    }
}

impl From<String> for FormulaValue {
    fn from(s: String) -> Self {
        FormulaValue::String(s)
    }
}

impl From<&str> for FormulaValue {
    fn from(s: &str) -> Self {
        FormulaValue::String(s.to_string())
    }
}

fn range_as_scalar() -> FormulaError {
    FormulaError::type_mismatch("a range cannot be used as a single value")
}

/// Shortest round-trip rendering of a finite number
///
/// Plain decimal notation inside `[1e-6, 1e21)`, exponent notation with an
/// explicit sign outside it. Negative zero renders as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", n);
    }

    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Context for formula evaluation
pub struct EvaluationContext<'a> {
    /// The grid every reference reads from
    pub grid: &'a Grid,
    /// Limits and rendering options
    pub options: &'a EvaluationOptions,
    /// Cells materialized by range reads so far
    range_cells_read: Cell<u64>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new evaluation context
    pub fn new(grid: &'a Grid, options: &'a EvaluationOptions) -> Self {
        Self {
            grid,
            options,
            range_cells_read: Cell::new(0),
        }
    }

    /// Cells still available to range reads in this evaluation
    pub fn remaining_range_cells(&self) -> u64 {
        self.options
            .max_range_cells
            .saturating_sub(self.range_cells_read.get())
    }

    /// Get a cell value from the grid
    pub fn get_cell_value(&self, address: &CellAddress) -> FormulaValue {
        reference::resolve_cell(self.grid, address)
    }

    /// Get a range of cell values as an array
    ///
    /// Every range read in one evaluation draws from the shared
    /// `max_range_cells` budget.
    pub fn get_range_values(&self, range: &CellRange) -> FormulaResult<FormulaValue> {
        let values = reference::resolve_range(self.grid, range, self.remaining_range_cells())?;
        self.range_cells_read
            .set(self.range_cells_read.get() + range.cell_count());
        Ok(values)
    }
}

/// Evaluate a formula expression
pub fn evaluate(expr: &FormulaExpr, ctx: &EvaluationContext) -> FormulaResult<FormulaValue> {
    match expr {
        // === Literals ===
        FormulaExpr::Number(n) => Ok(FormulaValue::Number(*n)),
        FormulaExpr::String(s) => Ok(FormulaValue::String(s.clone())),
        FormulaExpr::Boolean(b) => Ok(FormulaValue::Boolean(*b)),

        // === References ===
        FormulaExpr::CellRef(address) => Ok(ctx.get_cell_value(address)),
        FormulaExpr::RangeRef(range) => ctx.get_range_values(range),
        FormulaExpr::Name(name) => Err(FormulaError::UnknownName(name.clone())),

        // === Operators ===
        FormulaExpr::BinaryOp { op, left, right } => evaluate_binary_op(*op, left, right, ctx),
        FormulaExpr::UnaryOp { op, operand } => evaluate_unary_op(*op, operand, ctx),

        // === Functions ===
        FormulaExpr::Function { name, args } => evaluate_function(name, args, ctx),
    }
}

/// Evaluate a binary operation
fn evaluate_binary_op(
    op: BinaryOperator,
    left: &FormulaExpr,
    right: &FormulaExpr,
    ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    // Left operand first, so its failure wins
    let left_val = evaluate(left, ctx)?.into_scalar()?;
    let right_val = evaluate(right, ctx)?.into_scalar()?;

    let ordering = || compare_values(&left_val, &right_val);

    match op {
        BinaryOperator::Equal => Ok(FormulaValue::Boolean(ordering() == Ordering::Equal)),
        BinaryOperator::NotEqual => Ok(FormulaValue::Boolean(ordering() != Ordering::Equal)),
        BinaryOperator::LessThan => Ok(FormulaValue::Boolean(ordering() == Ordering::Less)),
        BinaryOperator::LessEqual => Ok(FormulaValue::Boolean(ordering() != Ordering::Greater)),
        BinaryOperator::GreaterThan => Ok(FormulaValue::Boolean(ordering() == Ordering::Greater)),
        BinaryOperator::GreaterEqual => Ok(FormulaValue::Boolean(ordering() != Ordering::Less)),

        BinaryOperator::Concat => {
            let mut text = left_val.to_text()?;
            text.push_str(&right_val.to_text()?);
            Ok(FormulaValue::String(text))
        }
        BinaryOperator::Add => finite(left_val.to_number()? + right_val.to_number()?),
        BinaryOperator::Subtract => finite(left_val.to_number()? - right_val.to_number()?),
        BinaryOperator::Multiply => finite(left_val.to_number()? * right_val.to_number()?),
        BinaryOperator::Divide => {
            let l = left_val.to_number()?;
            let r = right_val.to_number()?;
            if r == 0.0 {
                return Err(FormulaError::DivisionByZero);
            }
            finite(l / r)
        }
        BinaryOperator::Power => {
            let l = left_val.to_number()?;
            let r = right_val.to_number()?;
            if l == 0.0 && r < 0.0 {
                return Err(FormulaError::DivisionByZero);
            }
            finite(l.powf(r))
        }
    }
}

/// Evaluate a unary operation
fn evaluate_unary_op(
    op: UnaryOperator,
    operand: &FormulaExpr,
    ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let n = evaluate(operand, ctx)?.to_number()?;

    match op {
        UnaryOperator::Negate => Ok(FormulaValue::Number(-n)),
        UnaryOperator::Percent => Ok(FormulaValue::Number(n / 100.0)),
    }
}

/// Reject NaN and infinities
pub(crate) fn finite(n: f64) -> FormulaResult<FormulaValue> {
    if n.is_finite() {
        Ok(FormulaValue::Number(n))
    } else {
        Err(FormulaError::Numeric(format!("{} is not a finite number", n)))
    }
}

/// Compare two scalar values for ordering
///
/// Numbers sort before text, text before booleans. Text compares
/// case-insensitively. Empty acts as 0, `""` or FALSE depending on the
/// other side.
pub fn compare_values(left: &FormulaValue, right: &FormulaValue) -> Ordering {
    let (left, right) = match (left, right) {
        (FormulaValue::Empty, FormulaValue::Empty) => return Ordering::Equal,
        (FormulaValue::Empty, other) => (Cow::Owned(empty_like(other)), Cow::Borrowed(right)),
        (other, FormulaValue::Empty) => (Cow::Borrowed(left), Cow::Owned(empty_like(other))),
        _ => (Cow::Borrowed(left), Cow::Borrowed(right)),
    };

    match (left.as_ref(), right.as_ref()) {
        // Numbers compare numerically
        (FormulaValue::Number(l), FormulaValue::Number(r)) => {
            l.partial_cmp(r).unwrap_or(Ordering::Equal)
        }

        // Strings compare case-insensitively
        (FormulaValue::String(l), FormulaValue::String(r)) => {
            l.to_lowercase().cmp(&r.to_lowercase())
        }

        // Booleans: FALSE < TRUE
        (FormulaValue::Boolean(l), FormulaValue::Boolean(r)) => l.cmp(r),

        // Mixed types: number < string < boolean
        (l, r) => type_rank(l).cmp(&type_rank(r)),
    }
}

fn empty_like(other: &FormulaValue) -> FormulaValue {
    match other {
        FormulaValue::String(_) => FormulaValue::String(String::new()),
        FormulaValue::Boolean(_) => FormulaValue::Boolean(false),
        _ => FormulaValue::Number(0.0),
    }
}

fn type_rank(value: &FormulaValue) -> u8 {
    match value {
        FormulaValue::Empty | FormulaValue::Number(_) => 0,
        FormulaValue::String(_) => 1,
        FormulaValue::Boolean(_) => 2,
        FormulaValue::Array(_) => 3,
    }
}

/// Evaluate a function call
fn evaluate_function(
    name: &str,
    args: &[FormulaExpr],
    ctx: &EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let func = function_registry()
        .get(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    func.check_arity(args.len())?;

    match func.implementation {
        FunctionImpl::Eager(implementation) => {
            let evaluated_args = args
                .iter()
                .map(|arg| evaluate(arg, ctx))
                .collect::<FormulaResult<Vec<_>>>()?;
            implementation(&evaluated_args, ctx)
        }
        FunctionImpl::Lazy(implementation) => implementation(args, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_formula;
    use pretty_assertions::assert_eq;

    fn eval_in(grid: &Grid, formula: &str) -> FormulaResult<FormulaValue> {
        let ast = parse_formula(formula)?;
        let options = EvaluationOptions::default();
        let ctx = EvaluationContext::new(grid, &options);
        evaluate(&ast, &ctx)
    }

    fn eval(formula: &str) -> FormulaResult<FormulaValue> {
        eval_in(&Grid::new(), formula)
    }

    #[test]
    fn test_evaluate_literals() {
        assert_eq!(eval("=42").unwrap(), FormulaValue::Number(42.0));
        assert_eq!(eval("=\"Hello\"").unwrap(), FormulaValue::String("Hello".into()));
        assert_eq!(eval("=TRUE").unwrap(), FormulaValue::Boolean(true));
    }

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(eval("=1+2").unwrap(), FormulaValue::Number(3.0));
        assert_eq!(eval("=10-3").unwrap(), FormulaValue::Number(7.0));
        assert_eq!(eval("=4*5").unwrap(), FormulaValue::Number(20.0));
        assert_eq!(eval("=20/4").unwrap(), FormulaValue::Number(5.0));
        assert_eq!(eval("=2^10").unwrap(), FormulaValue::Number(1024.0));
        assert_eq!(eval("=2+3*4").unwrap(), FormulaValue::Number(14.0));
        assert_eq!(eval("=(2+3)*4").unwrap(), FormulaValue::Number(20.0));
        assert_eq!(eval("=-5+3").unwrap(), FormulaValue::Number(-2.0));
        assert_eq!(eval("=50%").unwrap(), FormulaValue::Number(0.5));
        assert_eq!(eval("=2^3^2").unwrap(), FormulaValue::Number(512.0));
    }

    #[test]
    fn test_arithmetic_coercion() {
        let grid = Grid::from_values([["5", "abc", "", " 7 "]]);

        // Empty is zero
        assert_eq!(eval_in(&grid, "=A1+C1").unwrap(), FormulaValue::Number(5.0));
        // Booleans are 1/0
        assert_eq!(eval("=TRUE+TRUE").unwrap(), FormulaValue::Number(2.0));
        // Numeric text parses
        assert_eq!(eval("=\"3\"*2").unwrap(), FormulaValue::Number(6.0));
        assert_eq!(eval_in(&grid, "=D1*2").unwrap(), FormulaValue::Number(14.0));
        // Other text does not
        assert!(matches!(eval_in(&grid, "=A1+B1"), Err(FormulaError::Type(_))));
        assert!(matches!(eval("=\"\"+1"), Err(FormulaError::Type(_))));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("=1/0"), Err(FormulaError::DivisionByZero));
        assert_eq!(eval("=1/A1"), Err(FormulaError::DivisionByZero));
        assert_eq!(eval("=0^-1"), Err(FormulaError::DivisionByZero));
    }

    #[test]
    fn test_non_finite_results() {
        assert!(matches!(eval("=(-8)^0.5"), Err(FormulaError::Numeric(_))));
        assert!(matches!(eval("=10^400"), Err(FormulaError::Numeric(_))));
        assert!(matches!(eval("=1e308*10"), Err(FormulaError::Numeric(_))));
    }

    #[test]
    fn test_evaluate_comparison() {
        assert_eq!(eval("=5>3").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=5<3").unwrap(), FormulaValue::Boolean(false));
        assert_eq!(eval("=5=5").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=5<>5").unwrap(), FormulaValue::Boolean(false));
        assert_eq!(eval("=5>=5").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=4<=5").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=\"abc\"=\"ABC\"").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=\"a\"<\"B\"").unwrap(), FormulaValue::Boolean(true));
    }

    #[test]
    fn test_mixed_type_ordering() {
        assert_eq!(eval("=1<\"a\"").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=\"z\"<TRUE").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=999<FALSE").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=1=\"1\"").unwrap(), FormulaValue::Boolean(false));
    }

    #[test]
    fn test_empty_comparisons() {
        assert_eq!(eval("=A1=0").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=A1=\"\"").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=A1=FALSE").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=A1=B1").unwrap(), FormulaValue::Boolean(true));
        assert_eq!(eval("=A1<1").unwrap(), FormulaValue::Boolean(true));
    }

    #[test]
    fn test_evaluate_concatenation() {
        assert_eq!(
            eval("=\"Hello\"&\" \"&\"World\"").unwrap(),
            FormulaValue::String("Hello World".into())
        );
        assert_eq!(eval("=\"n=\"&1.5").unwrap(), FormulaValue::String("n=1.5".into()));
        assert_eq!(eval("=1&2").unwrap(), FormulaValue::String("12".into()));
        assert_eq!(eval("=\"x\"&TRUE").unwrap(), FormulaValue::String("xtrue".into()));
        assert_eq!(eval("=\"x\"&A1").unwrap(), FormulaValue::String("x".into()));
    }

    #[test]
    fn test_references() {
        let grid = Grid::from_values([["5", "x"], ["7", ""]]);
        assert_eq!(eval_in(&grid, "=A1+A2").unwrap(), FormulaValue::Number(12.0));
        assert_eq!(eval_in(&grid, "=$A$1*a2").unwrap(), FormulaValue::Number(35.0));
        assert_eq!(eval_in(&grid, "=B1").unwrap(), FormulaValue::String("x".into()));
        assert_eq!(eval_in(&grid, "=B2").unwrap(), FormulaValue::Empty);
        assert_eq!(eval_in(&grid, "=Z99").unwrap(), FormulaValue::Empty);
    }

    #[test]
    fn test_range_in_scalar_position() {
        let grid = Grid::from_values([["1", "2"]]);
        assert!(eval_in(&grid, "=A1:B1").unwrap().is_array());
        assert!(matches!(eval_in(&grid, "=A1:B1+1"), Err(FormulaError::Type(_))));
        assert!(matches!(eval_in(&grid, "=-A1:B1"), Err(FormulaError::Type(_))));
        assert!(matches!(eval_in(&grid, "=A1:B1&\"x\""), Err(FormulaError::Type(_))));
    }

    #[test]
    fn test_oversized_range() {
        let grid = Grid::new();
        let ast = parse_formula("=SUM(A1:J10)").unwrap();
        let options = EvaluationOptions::default().with_max_range_cells(50);
        let ctx = EvaluationContext::new(&grid, &options);
        assert!(matches!(
            evaluate(&ast, &ctx),
            Err(FormulaError::InvalidReference(_))
        ));

        assert!(matches!(
            eval("=SUM(A1:XFD1048576)"),
            Err(FormulaError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_range_budget_is_shared_across_arguments() {
        let grid = Grid::from_values([["1"], ["2"]]);
        let options = EvaluationOptions::default().with_max_range_cells(100);

        let eval_with = |formula: &str| {
            let ast = parse_formula(formula).unwrap();
            evaluate(&ast, &EvaluationContext::new(&grid, &options))
        };

        // Each range fits on its own
        assert_eq!(eval_with("=SUM(A1:A60)"), Ok(FormulaValue::Number(3.0)));
        assert_eq!(eval_with("=SUM(A1:A50,A1:A50)"), Ok(FormulaValue::Number(6.0)));
        assert!(matches!(
            eval_with("=SUM(A1:A60,A1:A60)"),
            Err(FormulaError::InvalidReference(_))
        ));
        assert!(matches!(
            eval_with("=SUM(A1:A60)+COUNT(A1:A60)"),
            Err(FormulaError::InvalidReference(_))
        ));

        let ctx = EvaluationContext::new(&grid, &options);
        assert_eq!(ctx.remaining_range_cells(), 100);
        ctx.get_range_values(&CellRange::parse("A1:B20").unwrap()).unwrap();
        assert_eq!(ctx.remaining_range_cells(), 60);
    }

    #[test]
    fn test_comparison_operators() {
        let cases = [
            ("=1=1", true),
            ("=1<>1", false),
            ("=1<2", true),
            ("=2<=2", true),
            ("=1>2", false),
            ("=2>=3", false),
        ];
        for (formula, expected) in cases {
            assert_eq!(eval(formula), Ok(FormulaValue::Boolean(expected)), "{}", formula);
        }
    }

    #[test]
    fn test_unknown_function_and_name() {
        assert_eq!(
            eval("=FOO(1)"),
            Err(FormulaError::UnknownFunction("FOO".into()))
        );
        assert_eq!(eval("=foo"), Err(FormulaError::UnknownName("foo".into())));
    }

    #[test]
    fn test_unknown_function_skips_arguments() {
        // Arguments are never evaluated for an unknown function
        assert_eq!(
            eval("=FOO(1/0)"),
            Err(FormulaError::UnknownFunction("FOO".into()))
        );
    }

    #[test]
    fn test_left_operand_error_wins() {
        assert_eq!(eval("=(1/0)+FOO()"), Err(FormulaError::DivisionByZero));
        assert_eq!(
            eval("=FOO()+(1/0)"),
            Err(FormulaError::UnknownFunction("FOO".into()))
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(123456789.125), "123456789.125");
    }

    #[test]
    fn test_to_bool() {
        assert_eq!(FormulaValue::Number(0.0).to_bool(), Ok(false));
        assert_eq!(FormulaValue::Number(-2.0).to_bool(), Ok(true));
        assert_eq!(FormulaValue::from("false").to_bool(), Ok(false));
        assert_eq!(FormulaValue::from("True").to_bool(), Ok(true));
        assert_eq!(FormulaValue::from("anything").to_bool(), Ok(true));
        assert_eq!(FormulaValue::from("").to_bool(), Ok(false));
        assert_eq!(FormulaValue::Empty.to_bool(), Ok(false));
        assert!(FormulaValue::Array(vec![]).to_bool().is_err());
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let grid = Grid::from_values([["1"], ["2"], ["3"]]);
        let first = eval_in(&grid, "=SUM(A1:A3)*2").unwrap();
        for _ in 0..10 {
            assert_eq!(eval_in(&grid, "=SUM(A1:A3)*2").unwrap(), first);
        }
    }
}
