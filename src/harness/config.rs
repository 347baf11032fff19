//! Runner configuration.

use tracing::warn;

/// Environment variable overriding [`RunConfig::jobs`].
pub const JOBS_ENV: &str = "STANDIN_JOBS";
/// Environment variable overriding [`RunConfig::filter`].
pub const FILTER_ENV: &str = "STANDIN_FILTER";

/// How a [`CaseRunner`](super::CaseRunner) executes a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Print one line per case with timings
    pub verbose: bool,
    /// Stop at the first failed case (forces sequential execution)
    pub stop_on_fail: bool,
    /// Only run cases whose name contains this keyword
    pub filter: Option<String>,
    /// Worker threads; 1 runs cases sequentially
    pub jobs: usize,
    /// ANSI colours in console output
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            stop_on_fail: false,
            filter: None,
            jobs: 1,
            color: false,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }

    pub fn with_filter(mut self, filter: Option<impl Into<String>>) -> Self {
        self.filter = filter.map(Into::into);
        self
    }

    /// Set the worker count; 0 is treated as 1.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Apply `STANDIN_JOBS` / `STANDIN_FILTER` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Unparseable job counts are ignored with a warning.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(JOBS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(jobs) => self.jobs = jobs.max(1),
                Err(_) => warn!(value = %raw, "ignoring invalid {JOBS_ENV}"),
            }
        }
        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.is_empty()) {
            self.filter = Some(filter);
        }
        self
    }

    /// `true` if a case called `name` passes the keyword filter.
    pub fn matches(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|keyword| name.contains(keyword))
    }

    pub fn is_parallel(&self) -> bool {
        self.jobs > 1 && !self.stop_on_fail
    }
}
