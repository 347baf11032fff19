//! `add`, `divide` and `estimate_value`.

use standin_core::{Estimate, MathError, add, divide, estimate_value};

use crate::harness::check::check_eq;
use crate::harness::{CaseReporter, CaseResult, CaseRunner, CaseTable, RunReport};

pub const SUITE: &str = "arithmetic";

#[derive(Debug, Clone, Copy)]
pub enum ArithmeticCase {
    Add { a: i64, b: i64, want: Result<i64, MathError> },
    Divide { a: i64, b: i64, want: Result<i64, MathError> },
    Bucket { value: i64, want: Estimate },
}

pub fn table() -> CaseTable<ArithmeticCase> {
    use ArithmeticCase::*;

    CaseTable::new(SUITE)
        .case("add positive", Add { a: 1, b: 2, want: Ok(3) })
        .case(
            "add negative first",
            Add {
                a: -1,
                b: 2,
                want: Err(MathError::NegativeArgument),
            },
        )
        .case(
            "add negative second",
            Add {
                a: 1,
                b: -2,
                want: Err(MathError::NegativeArgument),
            },
        )
        .case(
            "add negative all",
            Add {
                a: -1,
                b: -2,
                want: Err(MathError::NegativeArgument),
            },
        )
        .case(
            "add zero",
            Add {
                a: 0,
                b: 2,
                want: Err(MathError::ZeroArgument),
            },
        )
        .case("divide exact", Divide { a: 9, b: 3, want: Ok(3) })
        .case(
            "divide by zero",
            Divide {
                a: 1,
                b: 0,
                want: Err(MathError::DivisionByZero),
            },
        )
        .case(
            "estimate small",
            Bucket {
                value: 9,
                want: Estimate::Small,
            },
        )
        .case(
            "estimate medium",
            Bucket {
                value: 99,
                want: Estimate::Medium,
            },
        )
        .case(
            "estimate big",
            Bucket {
                value: 100,
                want: Estimate::Big,
            },
        )
}

pub fn case_names() -> Vec<String> {
    table().names().map(str::to_string).collect()
}

pub fn check_case(case: &ArithmeticCase) -> CaseResult {
    match *case {
        ArithmeticCase::Add { a, b, want } => check_eq(add(a, b), want),
        ArithmeticCase::Divide { a, b, want } => check_eq(divide(a, b), want),
        ArithmeticCase::Bucket { value, want } => check_eq(estimate_value(value), want),
    }
}

pub fn run(runner: &CaseRunner, reporter: &mut dyn CaseReporter) -> RunReport {
    runner.run(&table(), reporter, check_case)
}
