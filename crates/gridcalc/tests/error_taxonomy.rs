//! Error classification: generic sentinel versus detailed tags

use gridcalc::prelude::*;
use gridcalc::{evaluate_detailed, try_evaluate};
use pretty_assertions::assert_eq;

fn lookup_table() -> Grid {
    Grid::from_values([["x", "1"], ["y", "2"], ["z", "3"]])
}

fn detailed() -> EvaluationOptions {
    EvaluationOptions::default().with_error_display(ErrorDisplay::Detailed)
}

#[test]
fn test_detailed_tags() {
    let grid = lookup_table();
    let options = detailed();

    let cases = [
        ("=1/0", "#DIV/0!"),
        ("=FOO(1)", "#NAME?"),
        ("=nope", "#NAME?"),
        ("=VLOOKUP(\"q\",A1:B3,2)", "#N/A"),
        ("=VLOOKUP(\"x\",A1:B3,5)", "#REF!"),
        ("=MID(\"abc\",0,1)", "#REF!"),
        ("=\"a\"+1", "#VALUE!"),
        ("=A1:B3", "#VALUE!"),
        ("=LEFT(\"abc\",-1)", "#VALUE!"),
        ("=(-1)^0.5", "#NUM!"),
        ("=SUM(", "#ERROR!"),
        ("=IF(1)", "#ERROR!"),
        ("=ABS(1,2)", "#ERROR!"),
    ];

    for (formula, expected) in cases {
        assert_eq!(
            grid.evaluate_with_options(formula, &options),
            expected,
            "{}",
            formula
        );
    }
}

#[test]
fn test_generic_mode_collapses_every_error() {
    let grid = lookup_table();
    for formula in [
        "=1/0",
        "=FOO(1)",
        "=VLOOKUP(\"q\",A1:B3,2)",
        "=VLOOKUP(\"x\",A1:B3,5)",
        "=\"a\"+1",
        "=SUM(",
    ] {
        assert_eq!(grid.evaluate(formula), "#ERROR!", "{}", formula);
    }
}

#[test]
fn test_evaluate_detailed_results() {
    let grid = lookup_table();
    // The error display option does not affect the structured result
    let options = EvaluationOptions::default();

    assert_eq!(
        evaluate_detailed("=VLOOKUP(\"z\",A1:B3,2)", &grid, &options),
        EvaluationResult::Success("3".into())
    );
    assert_eq!(
        evaluate_detailed("=VLOOKUP(\"w\",A1:B3,2)", &grid, &options),
        EvaluationResult::Error(CellError::Na)
    );
    assert_eq!(
        grid.evaluate_detailed("=1/0", &options).error(),
        Some(CellError::Div0)
    );
}

#[test]
fn test_full_error_is_available() {
    let grid = Grid::new();
    let options = EvaluationOptions::default();

    match try_evaluate("=ROUND(1,2,3)", &grid, &options) {
        Err(FormulaError::ArgumentCount {
            function,
            expected,
            actual,
        }) => {
            assert_eq!(function, "ROUND");
            assert_eq!(expected, "at most 2");
            assert_eq!(actual, 3);
        }
        other => panic!("expected an argument count error, got {:?}", other),
    }

    assert_eq!(
        try_evaluate("=foo(1)", &grid, &options),
        Err(FormulaError::UnknownFunction("FOO".into()))
    );
}

#[test]
fn test_iferror_recovers_every_kind() {
    let grid = lookup_table();
    for formula in [
        "=IFERROR(1/0,\"fallback\")",
        "=IFERROR(FOO(),\"fallback\")",
        "=IFERROR(VLOOKUP(\"q\",A1:B3,2),\"fallback\")",
        "=IFERROR(\"a\"*2,\"fallback\")",
    ] {
        assert_eq!(grid.evaluate(formula), "fallback", "{}", formula);
    }
}

#[test]
fn test_nesting_limit_is_a_parse_error() {
    let grid = Grid::new();
    let options = detailed();

    let deep = format!("={}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(grid.evaluate_with_options(&deep, &options), "#ERROR!");

    let calls = format!("={}1{}", "ABS(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(grid.evaluate_with_options(&calls, &options), "#ERROR!");

    let shallow = format!("={}1{}", "ABS(".repeat(20), ")".repeat(20));
    assert_eq!(grid.evaluate_with_options(&shallow, &options), "1");
}

#[test]
fn test_oversized_range_is_a_reference_error() {
    let grid = Grid::new();
    let options = detailed().with_max_range_cells(1_000);

    assert_eq!(grid.evaluate_with_options("=SUM(A1:J100)", &options), "0");
    assert_eq!(grid.evaluate_with_options("=SUM(A1:J101)", &options), "#REF!");
}

#[test]
fn test_long_operator_chains_are_parse_errors() {
    let grid = Grid::new();
    let options = detailed();

    for op in ["+", "&", "*", "="] {
        let chain = format!("={}", vec!["1"; 100_000].join(op));
        assert_eq!(grid.evaluate_with_options(&chain, &options), "#ERROR!", "{}", op);
    }

    let sum = format!("={}", vec!["1"; 500].join("+"));
    assert_eq!(grid.evaluate(&sum), "500");

    let short = EvaluationOptions::default().with_max_operators(2);
    assert_eq!(grid.evaluate_with_options("=1+1+1", &short), "3");
    assert_eq!(grid.evaluate_with_options("=1+1+1+1", &short), "#ERROR!");
}

#[test]
fn test_range_budget_covers_the_whole_formula() {
    let grid = Grid::from_values([["1"], ["2"]]);
    let options = detailed().with_max_range_cells(1_000);

    assert_eq!(grid.evaluate_with_options("=SUM(A1:A500,A1:A500)", &options), "6");
    assert_eq!(
        grid.evaluate_with_options("=SUM(A1:A600,A1:A600)", &options),
        "#REF!"
    );
    assert_eq!(
        grid.evaluate_with_options("=SUM(A1:A600)+SUM(A1:A600)", &options),
        "#REF!"
    );
    // A fresh evaluation starts with the full budget
    assert_eq!(grid.evaluate_with_options("=SUM(A1:A600)", &options), "3");
}
