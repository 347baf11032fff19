//! Assertion helpers for case bodies.
//!
//! Each helper returns a [`CaseResult`] instead of panicking, so a body stops at its first failed check with `?`
//! and the runner records the message.

use std::fmt::{Debug, Display};

use super::case::{CaseFailure, CaseResult};

/// Fail with `msg` unless `condition` holds.
pub fn check(condition: bool, msg: impl Into<String>) -> CaseResult {
    if condition { Ok(()) } else { Err(CaseFailure::new(msg)) }
}

/// Fail unless `left == right`.
pub fn check_eq<T: PartialEq + Debug>(left: T, right: T) -> CaseResult {
    if left != right {
        return Err(CaseFailure::new(format!(
            "assertion failed: left != right\n  left:  {:?}\n  right: {:?}",
            left, right
        )));
    }
    Ok(())
}

/// Fail unless `left != right`.
pub fn check_ne<T: PartialEq + Debug>(left: T, right: T) -> CaseResult {
    if left == right {
        return Err(CaseFailure::new(format!(
            "assertion failed: left == right\n  left:  {:?}\n  right: {:?}",
            left, right
        )));
    }
    Ok(())
}

/// Fail if `result` is an error.
pub fn check_ok<T, E: Display>(result: &Result<T, E>) -> CaseResult {
    match result {
        Ok(_) => Ok(()),
        Err(e) => Err(CaseFailure::new(format!("expected no error, got: {e}"))),
    }
}

/// Fail unless `result` is an error.
pub fn check_err<T: Debug, E>(result: &Result<T, E>) -> CaseResult {
    match result {
        Ok(value) => Err(CaseFailure::new(format!("expected an error, got: Ok({value:?})"))),
        Err(_) => Ok(()),
    }
}

/// Fail unless `result` is an error whose message is exactly `expected`.
pub fn check_error_message<T: Debug, E: Display>(result: &Result<T, E>, expected: &str) -> CaseResult {
    match result {
        Ok(value) => Err(CaseFailure::new(format!(
            "expected error {expected:?}, got: Ok({value:?})"
        ))),
        Err(e) => {
            let actual = e.to_string();
            if actual == expected {
                Ok(())
            } else {
                Err(CaseFailure::new(format!(
                    "error message mismatch\n  expected: {expected:?}\n  actual:   {actual:?}"
                )))
            }
        }
    }
}

/// Fail unless `result` failed exactly when `want_err` says it should.
pub fn check_outcome<T: Debug, E: Display>(result: &Result<T, E>, want_err: bool) -> CaseResult {
    if want_err { check_err(result) } else { check_ok(result) }
}

/// Fail unconditionally.
pub fn fail(msg: impl Into<String>) -> CaseResult {
    Err(CaseFailure::new(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_eq_message() {
        assert!(check_eq(1, 1).is_ok());
        let err = check_eq("a", "b").unwrap_err();
        assert_eq!(err.message, "assertion failed: left != right\n  left:  \"a\"\n  right: \"b\"");
    }

    #[test]
    fn test_check_ne() {
        assert!(check_ne(1, 2).is_ok());
        assert!(check_ne(1, 1).is_err());
    }

    #[test]
    fn test_check_ok_and_err() {
        let ok: Result<i32, String> = Ok(1);
        let err: Result<i32, String> = Err("boom".to_string());
        assert!(check_ok(&ok).is_ok());
        assert_eq!(check_ok(&err).unwrap_err().message, "expected no error, got: boom");
        assert!(check_err(&err).is_ok());
        assert_eq!(check_err(&ok).unwrap_err().message, "expected an error, got: Ok(1)");
    }

    #[test]
    fn test_check_error_message() {
        let err: Result<(), String> = Err("arg is zero".to_string());
        assert!(check_error_message(&err, "arg is zero").is_ok());
        assert!(check_error_message(&err, "arg is negative").is_err());
        assert!(check_error_message(&Ok::<(), String>(()), "arg is zero").is_err());
    }

    #[test]
    fn test_check_outcome() {
        let err: Result<(), String> = Err("x".to_string());
        assert!(check_outcome(&err, true).is_ok());
        assert!(check_outcome(&err, false).is_err());
    }

    #[test]
    fn test_check_and_fail() {
        assert!(check(true, "unused").is_ok());
        assert_eq!(check(false, "nope").unwrap_err().message, "nope");
        assert_eq!(fail("always").unwrap_err().message, "always");
    }
}
