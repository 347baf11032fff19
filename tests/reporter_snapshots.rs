//! Snapshot tests for console reporting and case listings
//!
//! Durations are fixed at zero so the output is stable.
//!
//! Review changes: `cargo insta review`

use std::time::Duration;

use standin::cli::commands::{render_listing, resolve_suites};
use standin::harness::{CaseInfo, CaseOutcome, CaseReporter, ConsoleReporter, RunSummary};

fn info(name: &str) -> CaseInfo<'_> {
    CaseInfo {
        suite: "registration",
        name,
    }
}

fn render(verbose: bool) -> String {
    let mut reporter = ConsoleReporter::new(Vec::new(), verbose, false);
    reporter.on_collection_complete("registration", 4);

    let cases = [
        ("want success", CaseOutcome::Passed(Duration::ZERO)),
        ("wrong", CaseOutcome::Failed(Duration::ZERO, "boom".to_string())),
        ("offline", CaseOutcome::Skipped("no network".to_string())),
        ("known bug", CaseOutcome::XFailed(Duration::ZERO, "tracked".to_string())),
    ];
    for (name, outcome) in &cases {
        reporter.on_case_start(&info(name));
        reporter.on_case_complete(&info(name), outcome);
    }

    reporter.on_run_complete(&RunSummary {
        total: 4,
        passed: 1,
        failed: 1,
        skipped: 1,
        xfailed: 1,
        xpassed: 0,
        duration: Duration::ZERO,
    });

    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_console_reporter_compact() {
    insta::assert_snapshot!(render(false).trim_end(), @r"
    registration: collected 4 case(s)
    .F
    registration::wrong
    boom
    sx
    ====== 1 passed, 1 failed, 1 skipped, 1 xfailed in 0.00s ======
    ");
}

#[test]
fn test_console_reporter_verbose() {
    insta::assert_snapshot!(render(true).trim_end(), @r"
    registration: collected 4 case(s)
    registration::want success ... PASSED (0ms)
    registration::wrong ... FAILED (0ms)

    registration::wrong
    boom
    registration::offline ... SKIPPED (no network)
    registration::known bug ... XFAIL (tracked)
    ====== 1 passed, 1 failed, 1 skipped, 1 xfailed in 0.00s ======
    ");
}

#[test]
fn test_console_reporter_empty_table() {
    let mut reporter = ConsoleReporter::new(Vec::new(), false, false);
    reporter.on_collection_complete("api", 0);
    reporter.on_run_complete(&RunSummary::default());
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r"
    api: no cases collected

    ====== nothing ran in 0.00s ======
    ");
}

#[test]
fn test_listing_of_all_suites() {
    let all = resolve_suites(&[]).unwrap();
    insta::assert_snapshot!(render_listing(&all, None).trim_end(), @r"
    registration::want success
    registration::want error
    registration::no-conflict
    registration::conflict
    registration::taken email accepted
    api::success returns body
    api::not found status is rejected
    api::client error is upstream
    api::unset mock breaks the contract
    arithmetic::add positive
    arithmetic::add negative first
    arithmetic::add negative second
    arithmetic::add negative all
    arithmetic::add zero
    arithmetic::divide exact
    arithmetic::divide by zero
    arithmetic::estimate small
    arithmetic::estimate medium
    arithmetic::estimate big
    robot::robot reports each task
    robot::robot with no tasks
    robot::company reaches every worker
    robot::empty company does nothing
    ");
}
