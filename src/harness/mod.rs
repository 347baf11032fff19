//! Table-driven case runner (pytest-style)
//!
//! ## Pieces
//!
//! - `case` - case records, tables, markers, and outcomes
//! - `check` - assertion helpers returning `CaseResult` so case bodies compose with `?`
//! - `config` - `RunConfig` (verbosity, `-x`, `-k`, parallel jobs)
//! - `fixture` - per-case setup/teardown
//! - `reporter` - `CaseReporter` trait plus console and recording reporters
//! - `runner` - `CaseRunner`, which executes a table and isolates every case from the others
//!
//! A case body receives only its own input (and fixture state). It builds its own doubles, so nothing mutable
//! is shared between cases, which is what makes parallel execution safe.

pub mod case;
pub mod check;
pub mod config;
pub mod fixture;
pub mod reporter;
pub mod runner;

pub use case::{Case, CaseFailure, CaseInfo, CaseMarker, CaseOutcome, CaseResult, CaseTable};
pub use config::RunConfig;
pub use fixture::{Fixture, SetupFn};
pub use reporter::{CaseReporter, ConsoleReporter, RecordingReporter};
pub use runner::{CaseRunner, RunReport, RunSummary};
