//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use standin_core::{ensure_new_user, fetch_text};
use tracing::debug;

use crate::harness::{CaseRunner, ConsoleReporter, RunConfig, RunSummary};
use crate::production::{FileUserStore, RecordedApiClient};
use crate::suites::{self, Suite};

use super::{CliError, CliResult, ExitCode};

/// Resolve suite names; an empty list means every built-in suite.
pub fn resolve_suites(names: &[String]) -> CliResult<Vec<&'static Suite>> {
    if names.is_empty() {
        return Ok(suites::SUITES.iter().collect());
    }

    names
        .iter()
        .map(|name| {
            suites::find(name).ok_or_else(|| {
                CliError::failure(format!(
                    "unknown suite '{}' (available: {})",
                    name,
                    suites::names().join(", ")
                ))
            })
        })
        .collect()
}

/// Run suites and print a pytest-style report to stderr.
pub fn run_suites(names: &[String], config: RunConfig) -> CliResult<ExitCode> {
    let selected = resolve_suites(names)?;
    let mut reporter = ConsoleReporter::stderr(config.verbose, config.color);
    let stop_on_fail = config.stop_on_fail;
    let runner = CaseRunner::new(config);

    let mut total = RunSummary::default();
    for suite in selected {
        let report = suite.run(&runner, &mut reporter);
        total.absorb(&report.summary);
        if stop_on_fail && !report.summary.is_success() {
            debug!(suite = suite.name, "stopping after failing suite");
            break;
        }
    }

    if total.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Summary already printed
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// One `suite::case` per line for every case passing `filter`.
pub fn render_listing(selected: &[&Suite], filter: Option<&str>) -> String {
    let config = RunConfig::new().with_filter(filter);
    let mut out = String::new();
    for suite in selected {
        for name in suite.case_names() {
            if config.matches(&name) {
                out.push_str(suite.name);
                out.push_str("::");
                out.push_str(&name);
                out.push('\n');
            }
        }
    }
    out
}

pub fn list_cases(names: &[String], filter: Option<&str>) -> CliResult<ExitCode> {
    let selected = resolve_suites(names)?;
    print!("{}", render_listing(&selected, filter));
    Ok(ExitCode::SUCCESS)
}

/// Run `ensure_new_user` against the users listed in `users`.
pub fn check_user(users: &Path, email: &str) -> CliResult<ExitCode> {
    let store = FileUserStore::open(users).map_err(CliError::diagnostic)?;
    ensure_new_user(&store, email).map_err(|e| CliError::failure(e.to_string()))?;
    println!("'{email}' is available");
    Ok(ExitCode::SUCCESS)
}

/// Run `fetch_text` against responses recorded in `recordings`.
pub fn fetch(recordings: &Path, query: &str) -> CliResult<ExitCode> {
    let client = RecordedApiClient::open(recordings).map_err(CliError::diagnostic)?;
    let text = fetch_text(&client, query).map_err(|e| CliError::failure(e.to_string()))?;
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}
