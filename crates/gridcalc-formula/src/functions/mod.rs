//! Built-in spreadsheet functions

pub mod logical;
pub mod lookup;
pub mod math;
pub mod statistical;
pub mod text;

use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{EvaluationContext, FormulaValue};
use ahash::AHashMap;

/// Implementation over evaluated arguments
pub type EagerFn = fn(&[FormulaValue], &EvaluationContext) -> FormulaResult<FormulaValue>;

/// Implementation over unevaluated argument expressions
///
/// Used by functions that must not evaluate every argument, such as `IF`.
pub type LazyFn = fn(&[FormulaExpr], &EvaluationContext) -> FormulaResult<FormulaValue>;

/// Calling convention of a built-in
#[derive(Clone, Copy)]
pub enum FunctionImpl {
    Eager(EagerFn),
    Lazy(LazyFn),
}

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl,
}

impl FunctionDef {
    /// Check an argument count against this function's bounds
    pub fn check_arity(&self, actual: usize) -> FormulaResult<()> {
        let expected = if actual < self.min_args {
            match self.max_args {
                Some(max) if max == self.min_args => format!("exactly {}", max),
                _ => format!("at least {}", self.min_args),
            }
        } else {
            match self.max_args {
                Some(max) if actual > max && max == self.min_args => format!("exactly {}", max),
                Some(max) if actual > max => format!("at most {}", max),
                _ => return Ok(()),
            }
        };

        Err(FormulaError::ArgumentCount {
            function: self.name.to_string(),
            expected,
            actual,
        })
    }
}

/// Function registry
pub struct FunctionRegistry {
    functions: AHashMap<&'static str, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
        };

        registry.register_math_functions();
        registry.register_statistical_functions();
        registry.register_logical_functions();
        registry.register_lookup_functions();
        registry.register_text_functions();

        registry
    }

    /// Look up a function by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name.to_ascii_uppercase().as_str())
    }

    /// Check whether a function exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of all registered functions, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name, def);
    }

    fn eager(&mut self, name: &'static str, min_args: usize, max_args: Option<usize>, f: EagerFn) {
        self.register(FunctionDef {
            name,
            min_args,
            max_args,
            implementation: FunctionImpl::Eager(f),
        });
    }

    fn lazy(&mut self, name: &'static str, min_args: usize, max_args: Option<usize>, f: LazyFn) {
        self.register(FunctionDef {
            name,
            min_args,
            max_args,
            implementation: FunctionImpl::Lazy(f),
        });
    }

    fn register_math_functions(&mut self) {
        self.eager("SUM", 1, None, math::fn_sum);
        self.eager("ABS", 1, Some(1), math::fn_abs);
        self.eager("ROUND", 1, Some(2), math::fn_round);
        self.eager("MOD", 2, Some(2), math::fn_mod);
    }

    fn register_statistical_functions(&mut self) {
        self.eager("AVERAGE", 1, None, statistical::fn_average);
        self.eager("COUNT", 1, None, statistical::fn_count);
        self.eager("COUNTA", 1, None, statistical::fn_counta);
        self.eager("MAX", 1, None, statistical::fn_max);
        self.eager("MIN", 1, None, statistical::fn_min);
    }

    fn register_logical_functions(&mut self) {
        // IF and IFERROR only evaluate the branch they return
        self.lazy("IF", 2, Some(3), logical::fn_if);
        self.lazy("IFERROR", 2, Some(2), logical::fn_iferror);
        self.eager("AND", 1, None, logical::fn_and);
        self.eager("OR", 1, None, logical::fn_or);
        self.eager("NOT", 1, Some(1), logical::fn_not);
    }

    fn register_lookup_functions(&mut self) {
        self.eager("VLOOKUP", 3, Some(4), lookup::fn_vlookup);
        self.eager("HLOOKUP", 3, Some(4), lookup::fn_hlookup);
    }

    fn register_text_functions(&mut self) {
        self.eager("CONCATENATE", 1, None, text::fn_concatenate);
        self.eager("LEFT", 1, Some(2), text::fn_left);
        self.eager("RIGHT", 1, Some(2), text::fn_right);
        self.eager("MID", 3, Some(3), text::fn_mid);
        self.eager("LEN", 1, Some(1), text::fn_len);
        self.eager("UPPER", 1, Some(1), text::fn_upper);
        self.eager("LOWER", 1, Some(1), text::fn_lower);
        self.eager("TRIM", 1, Some(1), text::fn_trim);
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument at `index`, which arity checking guarantees for required ones
pub(crate) fn arg<'a>(
    args: &'a [FormulaValue],
    index: usize,
    function: &str,
) -> FormulaResult<&'a FormulaValue> {
    args.get(index).ok_or_else(|| FormulaError::ArgumentCount {
        function: function.to_string(),
        expected: format!("at least {}", index + 1),
        actual: args.len(),
    })
}

/// Every scalar in the arguments, ranges flattened row-major
pub(crate) fn flatten(args: &[FormulaValue]) -> Vec<&FormulaValue> {
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            FormulaValue::Array(rows) => values.extend(rows.iter().flatten()),
            scalar => values.push(scalar),
        }
    }
    values
}

/// Numeric reading of a single entry: numbers, booleans and numeric text
///
/// Empty entries and other text have no numeric reading.
pub(crate) fn numeric_entry(value: &FormulaValue) -> Option<f64> {
    match value {
        FormulaValue::Empty | FormulaValue::Array(_) => None,
        other => other.as_number(),
    }
}

/// Truncated integer argument
pub(crate) fn integer(value: &FormulaValue) -> FormulaResult<i64> {
    Ok(value.to_number()?.trunc() as i64)
}
