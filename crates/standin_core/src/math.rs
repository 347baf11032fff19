//! Small arithmetic rules used by the built-in case tables.

use std::fmt;

use crate::errors::MathError;

/// Add two strictly positive integers.
///
/// ## Errors
/// - [`MathError::ZeroArgument`] if either argument is zero (checked first).
/// - [`MathError::NegativeArgument`] if either argument is negative.
/// - [`MathError::Overflow`] if the sum does not fit.
pub fn add(a: i64, b: i64) -> Result<i64, MathError> {
    if a == 0 || b == 0 {
        return Err(MathError::ZeroArgument);
    }
    if a < 0 || b < 0 {
        return Err(MathError::NegativeArgument);
    }
    a.checked_add(b).ok_or(MathError::Overflow)
}

/// Integer division truncating toward zero.
pub fn divide(a: i64, b: i64) -> Result<i64, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    a.checked_div(b).ok_or(MathError::Overflow)
}

/// Coarse size bucket for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    Small,
    Medium,
    Big,
}

impl Estimate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Estimate::Small => "small",
            Estimate::Medium => "medium",
            Estimate::Big => "big",
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Small` below 10, `Medium` below 100, `Big` otherwise.
pub fn estimate_value(value: i64) -> Estimate {
    match value {
        v if v < 10 => Estimate::Small,
        v if v < 100 => Estimate::Medium,
        _ => Estimate::Big,
    }
}
