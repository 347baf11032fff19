//! Reporting of case results.
//!
//! The runner never prints. It tells a [`CaseReporter`] what happened, and the reporter decides how to show it.
//! Implement the trait for other formats (JSON, TAP, etc.).

use std::io::{self, Write};

use super::case::{CaseInfo, CaseOutcome};
use super::runner::RunSummary;

/// Receives runner events in table order.
pub trait CaseReporter {
    /// Called once per table, after filtering.
    fn on_collection_complete(&mut self, suite: &str, case_count: usize);

    /// Called before a case is reported.
    fn on_case_start(&mut self, _case: &CaseInfo<'_>) {}

    /// Called with the outcome of a case.
    fn on_case_complete(&mut self, case: &CaseInfo<'_>, outcome: &CaseOutcome);

    /// Called once per table, after the last case.
    fn on_run_complete(&mut self, summary: &RunSummary);
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Pytest-style console reporter.
///
/// Non-verbose mode prints one character per case (`.` pass, `F` fail, `s` skip, `x` xfail, `X` xpass);
/// verbose mode prints one line per case with its timing.
pub struct ConsoleReporter<W: Write = io::Stderr> {
    out: W,
    verbose: bool,
    color: bool,
}

impl ConsoleReporter<io::Stderr> {
    pub fn stderr(verbose: bool, color: bool) -> Self {
        Self::new(io::stderr(), verbose, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self { out, verbose, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn status(&self, outcome: &CaseOutcome) -> String {
        if self.verbose {
            let label = outcome.label();
            match outcome {
                CaseOutcome::Passed(d) => format!("{} ({}ms)", self.paint(GREEN, label), d.as_millis()),
                CaseOutcome::Failed(d, _) => format!("{} ({}ms)", self.paint(RED, label), d.as_millis()),
                CaseOutcome::Skipped(reason) | CaseOutcome::XFailed(_, reason) if !reason.is_empty() => {
                    format!("{} ({})", self.paint(YELLOW, label), reason)
                }
                CaseOutcome::Skipped(_) | CaseOutcome::XFailed(..) => self.paint(YELLOW, label),
                CaseOutcome::XPassed(_) => self.paint(RED, label),
            }
        } else {
            match outcome {
                CaseOutcome::Passed(_) => self.paint(GREEN, "."),
                CaseOutcome::Failed(..) => self.paint(RED, "F"),
                CaseOutcome::Skipped(_) => self.paint(YELLOW, "s"),
                CaseOutcome::XFailed(..) => self.paint(YELLOW, "x"),
                CaseOutcome::XPassed(_) => self.paint(RED, "X"),
            }
        }
    }
}

impl<W: Write> CaseReporter for ConsoleReporter<W> {
    fn on_collection_complete(&mut self, suite: &str, case_count: usize) {
        if case_count == 0 {
            let _ = writeln!(self.out, "{suite}: no cases collected");
        } else {
            let _ = writeln!(self.out, "{suite}: collected {case_count} case(s)");
        }
    }

    fn on_case_start(&mut self, case: &CaseInfo<'_>) {
        if self.verbose {
            let _ = write!(self.out, "{} ... ", case.full_name());
        }
    }

    fn on_case_complete(&mut self, case: &CaseInfo<'_>, outcome: &CaseOutcome) {
        let status = self.status(outcome);
        if self.verbose {
            let _ = writeln!(self.out, "{status}");
        } else {
            let _ = write!(self.out, "{status}");
        }

        match outcome {
            CaseOutcome::Failed(_, message) => {
                let name = self.paint(RED, &case.full_name());
                let _ = writeln!(self.out, "\n{name}\n{message}");
            }
            CaseOutcome::XPassed(_) => {
                let name = self.paint(RED, &case.full_name());
                let _ = writeln!(self.out, "\n{name}\ncase passed but was expected to fail (xfail)");
            }
            _ => {}
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if !self.verbose {
            let _ = writeln!(self.out);
        }

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(self.paint(GREEN, &format!("{} passed", summary.passed)));
        }
        if summary.failed > 0 {
            parts.push(self.paint(RED, &format!("{} failed", summary.failed)));
        }
        if summary.skipped > 0 {
            parts.push(self.paint(YELLOW, &format!("{} skipped", summary.skipped)));
        }
        if summary.xfailed > 0 {
            parts.push(self.paint(YELLOW, &format!("{} xfailed", summary.xfailed)));
        }
        if summary.xpassed > 0 {
            parts.push(self.paint(RED, &format!("{} xpassed", summary.xpassed)));
        }
        if parts.is_empty() {
            parts.push("nothing ran".to_string());
        }

        let _ = writeln!(
            self.out,
            "====== {} in {:.2}s ======",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        let _ = self.out.flush();
    }
}

/// Reporter that keeps every event, for inspecting a run in tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub collected: Vec<(String, usize)>,
    pub started: Vec<String>,
    pub completed: Vec<(String, CaseOutcome)>,
    pub summaries: Vec<RunSummary>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full names of completed cases whose outcome fails the run.
    pub fn failures(&self) -> Vec<&str> {
        self.completed
            .iter()
            .filter(|(_, outcome)| outcome.is_failure())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl CaseReporter for RecordingReporter {
    fn on_collection_complete(&mut self, suite: &str, case_count: usize) {
        self.collected.push((suite.to_string(), case_count));
    }

    fn on_case_start(&mut self, case: &CaseInfo<'_>) {
        self.started.push(case.full_name());
    }

    fn on_case_complete(&mut self, case: &CaseInfo<'_>, outcome: &CaseOutcome) {
        self.completed.push((case.full_name(), outcome.clone()));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }
}
