//! Provide capability contracts, domain errors, and the contract-generic business logic that standin exercises.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - the contracts (`UserStore`, `ApiClient`, `Worker`) that collaborators implement,
//! - the functions under test, which take a contract-typed collaborator as an explicit parameter, and
//! - the error types those functions return.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no knowledge of concrete collaborators.
//! - Production collaborators and test doubles live in the `standin` crate; both are interchangeable here.

pub mod contract;
pub mod errors;
pub mod math;
pub mod registration;
pub mod remote;
pub mod robot;

pub use contract::{ApiClient, Response, UserStore, Worker};
pub use errors::{ApiError, ContractViolation, FetchError, MathError, RegistrationError};
pub use math::{Estimate, add, divide, estimate_value};
pub use registration::ensure_new_user;
pub use remote::fetch_text;
pub use robot::{Company, Robot};
