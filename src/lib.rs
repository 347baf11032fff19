#![forbid(unsafe_code)]
//! standin: capability contracts, deterministic test doubles, and a table-driven case runner
//!
//! Business logic in `standin_core` is written against contract traits and takes its collaborator as a parameter.
//! This crate supplies what plugs into those parameters and what drives them:
//!
//! - `doubles` - in-memory stand-ins with presets, canned answers, and call counters
//! - `production` - file-backed collaborators implementing the same contracts
//! - `harness` - case tables, the runner, reporters, fixtures, and assertion helpers
//! - `suites` - built-in tables run by `standin test`
//! - `cli` - the `standin` command line
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Case bodies**: return `CaseResult`; a panic inside a body is caught by the runner and recorded as a failure of
//!   that case only.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod doubles;
pub mod harness;
pub mod production;
pub mod suites;
pub mod version;

pub use doubles::{Mock, MockApiClient, RecordingWorker, UserStoreDouble};
pub use harness::{Case, CaseRunner, CaseTable, RunConfig};
pub use production::{FileUserStore, RecordedApiClient};
