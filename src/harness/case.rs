//! Case records and their outcomes.

use std::time::Duration;

use thiserror::Error;

/// Marker altering how the runner treats a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseMarker {
    /// Report as skipped without running the body.
    Skip(String),
    /// The case is expected to fail; a pass is reported as `XPassed`.
    XFail(String),
}

/// One named row of a table.
#[derive(Debug, Clone)]
pub struct Case<I> {
    pub name: String,
    pub input: I,
    pub markers: Vec<CaseMarker>,
}

impl<I> Case<I> {
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
            markers: Vec::new(),
        }
    }

    pub fn skip(mut self, reason: impl Into<String>) -> Self {
        self.markers.push(CaseMarker::Skip(reason.into()));
        self
    }

    pub fn xfail(mut self, reason: impl Into<String>) -> Self {
        self.markers.push(CaseMarker::XFail(reason.into()));
        self
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            CaseMarker::Skip(reason) => Some(reason.as_str()),
            _ => None,
        })
    }

    pub fn xfail_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            CaseMarker::XFail(reason) => Some(reason.as_str()),
            _ => None,
        })
    }
}

/// An ordered, named set of cases.
#[derive(Debug, Clone)]
pub struct CaseTable<I> {
    suite: String,
    cases: Vec<Case<I>>,
}

impl<I> CaseTable<I> {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            cases: Vec::new(),
        }
    }

    /// Append a plain case.
    pub fn case(self, name: impl Into<String>, input: I) -> Self {
        self.with(Case::new(name, input))
    }

    /// Append a prepared case (with markers).
    pub fn with(mut self, case: Case<I>) -> Self {
        self.cases.push(case);
        self
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn cases(&self) -> &[Case<I>] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }
}

/// What a reporter is told about a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseInfo<'a> {
    pub suite: &'a str,
    pub name: &'a str,
}

impl CaseInfo<'_> {
    /// `suite::name`
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }
}

/// A failed assertion inside a case body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CaseFailure {
    pub message: String,
}

impl CaseFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Return type of case bodies.
pub type CaseResult = Result<(), CaseFailure>;

/// Result of running a single case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    Passed(Duration),
    Failed(Duration, String),
    Skipped(String),
    XFailed(Duration, String),
    XPassed(Duration),
}

impl CaseOutcome {
    /// `true` for outcomes that make a run unsuccessful.
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseOutcome::Failed(..) | CaseOutcome::XPassed(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed(_))
    }

    /// Upper-case status label, e.g. `PASSED`.
    pub fn label(&self) -> &'static str {
        match self {
            CaseOutcome::Passed(_) => "PASSED",
            CaseOutcome::Failed(..) => "FAILED",
            CaseOutcome::Skipped(_) => "SKIPPED",
            CaseOutcome::XFailed(..) => "XFAIL",
            CaseOutcome::XPassed(_) => "XPASS",
        }
    }

    /// Time spent in the body. Zero for skipped cases.
    pub fn duration(&self) -> Duration {
        match self {
            CaseOutcome::Passed(d)
            | CaseOutcome::Failed(d, _)
            | CaseOutcome::XFailed(d, _)
            | CaseOutcome::XPassed(d) => *d,
            CaseOutcome::Skipped(_) => Duration::ZERO,
        }
    }
}
