//! Domain errors returned by contract operations and the functions built on them.
//!
//! Two families matter to callers:
//! - **business rule failures** (`RegistrationError`, `FetchError::Rejected`, `MathError`): the collaborator answered
//!   correctly, and the answer forbids the operation;
//! - **contract violations** (`ContractViolation`): the collaborator answered with something the contract does not
//!   allow.

use thiserror::Error;

/// A collaborator returned a value outside what its contract permits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("collaborator broke the {contract} contract: {detail}")]
pub struct ContractViolation {
    pub contract: &'static str,
    pub detail: String,
}

impl ContractViolation {
    pub fn new(contract: &'static str, detail: impl Into<String>) -> Self {
        Self {
            contract,
            detail: detail.into(),
        }
    }
}

/// Failures of `ensure_new_user`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("user with '{email}' email already exists")]
    DuplicateKey { email: String },
}

impl RegistrationError {
    /// The key the failure refers to.
    pub fn key(&self) -> &str {
        match self {
            RegistrationError::DuplicateKey { email } => email,
        }
    }
}

/// Errors an [`ApiClient`](crate::ApiClient) may return.
///
/// `Clone` so that a double can hand out the same configured error on every call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no response recorded for query '{0}'")]
    NotFound(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Failures of `fetch_text`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error("request for '{query}' failed: {source}")]
    Upstream {
        query: String,
        #[source]
        source: ApiError,
    },

    #[error("request for '{query}' was rejected with status {status}")]
    Rejected { query: String, status: u16 },
}

/// Failures of the arithmetic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("arg is zero")]
    ZeroArgument,

    #[error("arg is negative")]
    NegativeArgument,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message_carries_email() {
        let err = RegistrationError::DuplicateKey {
            email: "johndoe@myexampledomain.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "user with 'johndoe@myexampledomain.com' email already exists"
        );
        assert_eq!(err.key(), "johndoe@myexampledomain.com");
    }

    #[test]
    fn test_fetch_error_keeps_upstream_source() {
        use std::error::Error as _;

        let err = FetchError::Upstream {
            query: "weather".to_string(),
            source: ApiError::Unavailable("maintenance".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "request for 'weather' failed: service unavailable: maintenance"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_contract_violation_is_transparent() {
        let err: FetchError = ContractViolation::new("ApiClient", "status 0 is not an HTTP status").into();
        assert_eq!(
            err.to_string(),
            "collaborator broke the ApiClient contract: status 0 is not an HTTP status"
        );
    }
}
