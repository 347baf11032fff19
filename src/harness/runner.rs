//! Case runner implementation (pytest-style)
//!
//! Every case runs as: setup, invoke, assert, teardown. A failing or panicking case is recorded and the next case
//! still runs. With more than one job, cases are spread over scoped worker threads; outcomes are reported in
//! table order either way.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::case::{Case, CaseFailure, CaseInfo, CaseOutcome, CaseResult, CaseTable};
use super::config::RunConfig;
use super::fixture::{Fixture, FixtureGuard};
use super::reporter::CaseReporter;

/// Summary of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub xfailed: usize,
    pub xpassed: usize,
    pub duration: Duration,
}

impl RunSummary {
    fn tally<'a>(outcomes: impl IntoIterator<Item = &'a CaseOutcome>, duration: Duration) -> Self {
        let mut summary = RunSummary {
            duration,
            ..Default::default()
        };
        for outcome in outcomes {
            summary.total += 1;
            match outcome {
                CaseOutcome::Passed(_) => summary.passed += 1,
                CaseOutcome::Failed(..) => summary.failed += 1,
                CaseOutcome::Skipped(_) => summary.skipped += 1,
                CaseOutcome::XFailed(..) => summary.xfailed += 1,
                CaseOutcome::XPassed(_) => summary.xpassed += 1,
            }
        }
        summary
    }

    /// No failures and no unexpected passes.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.xpassed == 0
    }

    /// Fold another summary into this one.
    pub fn absorb(&mut self, other: &RunSummary) {
        self.total += other.total;
        self.passed += other.passed;
        self.failed += other.failed;
        self.skipped += other.skipped;
        self.xfailed += other.xfailed;
        self.xpassed += other.xpassed;
        self.duration += other.duration;
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub suite: String,
    pub summary: RunSummary,
    /// `(case name, outcome)` in table order
    pub results: Vec<(String, CaseOutcome)>,
}

impl RunReport {
    pub fn outcome(&self, name: &str) -> Option<&CaseOutcome> {
        self.results.iter().find(|(n, _)| n == name).map(|(_, o)| o)
    }

    pub fn failed_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|(_, o)| o.is_failure())
            .map(|(n, _)| n.as_str())
            .collect()
    }
}

/// Executes case tables.
#[derive(Debug, Clone, Default)]
pub struct CaseRunner {
    config: RunConfig,
}

impl CaseRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run every selected case of `table` through `body`.
    pub fn run<I, F>(&self, table: &CaseTable<I>, reporter: &mut dyn CaseReporter, body: F) -> RunReport
    where
        I: Sync,
        F: Fn(&I) -> CaseResult + Sync,
    {
        let start = Instant::now();
        let suite = table.suite();

        let selected: Vec<&Case<I>> = table.cases().iter().filter(|c| self.config.matches(&c.name)).collect();
        debug!(suite, collected = table.len(), selected = selected.len(), "collected cases");
        reporter.on_collection_complete(suite, selected.len());

        if self.config.jobs > 1 && self.config.stop_on_fail {
            warn!(suite, "stop-on-fail requested, running sequentially");
        }

        let results: Vec<(String, CaseOutcome)> = if self.config.is_parallel() && selected.len() > 1 {
            let outcomes = run_parallel(&selected, &body, self.config.jobs);
            for (case, outcome) in selected.iter().zip(&outcomes) {
                let info = CaseInfo { suite, name: &case.name };
                reporter.on_case_start(&info);
                reporter.on_case_complete(&info, outcome);
            }
            selected.iter().map(|c| c.name.clone()).zip(outcomes).collect()
        } else {
            self.run_sequential(suite, &selected, &body, reporter)
        };

        let summary = RunSummary::tally(results.iter().map(|(_, o)| o), start.elapsed());
        info!(
            suite,
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run complete"
        );
        reporter.on_run_complete(&summary);

        RunReport {
            suite: suite.to_string(),
            summary,
            results,
        }
    }

    /// Like [`run`](Self::run), with fresh fixture state handed to every case.
    pub fn run_with_fixture<I, Fx, F>(
        &self,
        table: &CaseTable<I>,
        reporter: &mut dyn CaseReporter,
        fixture: &Fx,
        body: F,
    ) -> RunReport
    where
        I: Sync,
        Fx: Fixture + Sync,
        F: Fn(&mut Fx::State, &I) -> CaseResult + Sync,
    {
        self.run(table, reporter, |input| {
            let mut guard = FixtureGuard::new(fixture);
            let Some(state) = guard.state_mut() else {
                return Err(CaseFailure::new("fixture produced no state"));
            };
            body(state, input)
        })
    }

    fn run_sequential<I, F>(
        &self,
        suite: &str,
        cases: &[&Case<I>],
        body: &F,
        reporter: &mut dyn CaseReporter,
    ) -> Vec<(String, CaseOutcome)>
    where
        F: Fn(&I) -> CaseResult,
    {
        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let info = CaseInfo { suite, name: &case.name };
            reporter.on_case_start(&info);
            let outcome = execute_case(*case, body);
            reporter.on_case_complete(&info, &outcome);

            let stop = self.config.stop_on_fail && matches!(outcome, CaseOutcome::Failed(..));
            results.push((case.name.clone(), outcome));
            if stop {
                debug!(suite, case = %case.name, "stopping after first failure");
                break;
            }
        }
        results
    }
}

fn run_parallel<I, F>(cases: &[&Case<I>], body: &F, jobs: usize) -> Vec<CaseOutcome>
where
    I: Sync,
    F: Fn(&I) -> CaseResult + Sync,
{
    let next = AtomicUsize::new(0);
    let slots: Vec<Mutex<Option<CaseOutcome>>> = cases.iter().map(|_| Mutex::new(None)).collect();
    let workers = jobs.min(cases.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(case) = cases.get(index) else { break };
                    let outcome = execute_case(*case, body);
                    if let Ok(mut slot) = slots[index].lock() {
                        *slot = Some(outcome);
                    }
                }
            });
        }
    });

    slots
        .into_iter()
        .map(|slot| {
            slot.into_inner()
                .ok()
                .flatten()
                .unwrap_or_else(|| CaseOutcome::Failed(Duration::ZERO, "case produced no outcome".to_string()))
        })
        .collect()
}

fn execute_case<I, F>(case: &Case<I>, body: &F) -> CaseOutcome
where
    F: Fn(&I) -> CaseResult,
{
    if let Some(reason) = case.skip_reason() {
        debug!(case = %case.name, reason, "skipped");
        return CaseOutcome::Skipped(reason.to_string());
    }

    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| body(&case.input)))
        .unwrap_or_else(|payload| Err(CaseFailure::new(format!("panicked: {}", panic_message(payload.as_ref())))));
    let elapsed = start.elapsed();

    let outcome = match (result, case.xfail_reason()) {
        (Ok(()), None) => CaseOutcome::Passed(elapsed),
        (Err(failure), None) => CaseOutcome::Failed(elapsed, failure.message),
        (Ok(()), Some(_)) => CaseOutcome::XPassed(elapsed),
        (Err(_), Some(reason)) => CaseOutcome::XFailed(elapsed, reason.to_string()),
    };
    debug!(case = %case.name, status = outcome.label(), "case finished");
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
