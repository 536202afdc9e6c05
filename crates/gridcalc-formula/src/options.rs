//! Evaluation options

/// How failed evaluations are rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorDisplay {
    /// Every failure renders as `#ERROR!`
    #[default]
    Generic,
    /// Failures render as their specific tag (`#DIV/0!`, `#REF!`, ...)
    Detailed,
}

/// Options for formula evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluationOptions {
    /// Error rendering (default: generic sentinel)
    pub error_display: ErrorDisplay,
    /// Maximum nesting of parentheses, function calls and unary operators (default: 64)
    pub max_depth: usize,
    /// Maximum number of binary and postfix `%` operators in one formula (default: 512)
    pub max_operators: usize,
    /// Maximum number of cells all ranges of one evaluation may cover together (default: 2,000,000)
    pub max_range_cells: u64,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            error_display: ErrorDisplay::Generic,
            max_depth: 64,
            max_operators: 512,
            max_range_cells: 2_000_000,
        }
    }
}

impl EvaluationOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error rendering
    pub fn with_error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the maximum operator count
    pub fn with_max_operators(mut self, operators: usize) -> Self {
        self.max_operators = operators;
        self
    }

    /// Set the range cell budget
    pub fn with_max_range_cells(mut self, cells: u64) -> Self {
        self.max_range_cells = cells;
        self
    }
}
