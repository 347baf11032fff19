//! Integration tests for the case runner driving `ensure_new_user` with a `UserStoreDouble`.
//!
//! These lock in that every case gets its own double and that one bad case never disturbs the others.

use std::sync::atomic::{AtomicUsize, Ordering};

use standin::doubles::{UserStoreDouble, UserStoreFixture};
use standin::harness::check::{check_eq, check_outcome};
use standin::harness::{Case, CaseOutcome, CaseResult, CaseRunner, CaseTable, Fixture, RecordingReporter, RunConfig};
use standin_core::{RegistrationError, ensure_new_user};

#[derive(Debug, Clone)]
struct Row {
    email: &'static str,
    preset: bool,
    expect_fail: bool,
}

fn row(email: &'static str, preset: bool, expect_fail: bool) -> Row {
    Row {
        email,
        preset,
        expect_fail,
    }
}

fn body(store: &mut UserStoreDouble, row: &Row) -> CaseResult {
    if row.preset {
        store.add_user(row.email);
    }
    let result = ensure_new_user(&*store, row.email);
    check_outcome(&result, row.expect_fail)
}

#[test]
fn conflict_and_no_conflict_both_pass() {
    let table = CaseTable::new("users")
        .case("no-conflict", row("a@x.com", false, false))
        .case("conflict", row("b@x.com", true, true));

    let mut reporter = RecordingReporter::new();
    let report = CaseRunner::default().run_with_fixture(&table, &mut reporter, &UserStoreFixture, body);

    assert!(report.outcome("no-conflict").is_some_and(CaseOutcome::is_pass));
    assert!(report.outcome("conflict").is_some_and(CaseOutcome::is_pass));
    assert!(report.summary.is_success());
    assert_eq!(reporter.started, vec!["users::no-conflict", "users::conflict"]);
}

#[test]
fn one_wrong_record_fails_alone() {
    let table = CaseTable::new("users")
        .case("first", row("a@x.com", false, false))
        .case("wrong", row("b@x.com", true, false))
        .case("third", row("c@x.com", true, true))
        .case("fourth", row("d@x.com", false, false));

    for jobs in [1, 3] {
        let runner = CaseRunner::new(RunConfig::new().with_jobs(jobs));
        let report = runner.run_with_fixture(&table, &mut RecordingReporter::new(), &UserStoreFixture, body);

        assert_eq!(report.failed_names(), vec!["wrong"], "jobs = {jobs}");
        assert_eq!(report.summary.passed, 3, "jobs = {jobs}");
        match report.outcome("wrong") {
            Some(CaseOutcome::Failed(_, msg)) => {
                assert_eq!(msg, "expected no error, got: user with 'b@x.com' email already exists")
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}

#[test]
fn presets_do_not_leak_between_cases() {
    // Same email twice: preset only in the first case; the second must see an empty double.
    let table = CaseTable::new("users")
        .case("preset", row("same@x.com", true, true))
        .case("fresh", row("same@x.com", false, false));

    let report = CaseRunner::default().run_with_fixture(&table, &mut RecordingReporter::new(), &UserStoreFixture, body);
    assert!(report.summary.is_success(), "{:?}", report.results);
}

#[test]
fn duplicate_key_carries_exact_email() {
    let store = UserStoreDouble::with_users(["johndoe@myexampledomain.com"]);
    assert_eq!(
        ensure_new_user(&store, "johndoe@myexampledomain.com"),
        Err(RegistrationError::DuplicateKey {
            email: "johndoe@myexampledomain.com".to_string()
        })
    );
}

struct CountingFixture {
    setups: AtomicUsize,
    teardowns: AtomicUsize,
}

impl Fixture for CountingFixture {
    type State = UserStoreDouble;

    fn setup(&self) -> UserStoreDouble {
        self.setups.fetch_add(1, Ordering::SeqCst);
        UserStoreDouble::new()
    }

    fn teardown(&self, state: UserStoreDouble) {
        assert!(state.calls() <= 1);
        self.teardowns.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn fixture_teardown_runs_for_every_executed_case() {
    let table = CaseTable::new("users")
        .case("ok", row("a@x.com", false, false))
        .with(Case::new("skipped", row("b@x.com", false, false)).skip("not today"))
        .case("panics", row("c@x.com", false, false));

    let fixture = CountingFixture {
        setups: AtomicUsize::new(0),
        teardowns: AtomicUsize::new(0),
    };
    let report = CaseRunner::default().run_with_fixture(
        &table,
        &mut RecordingReporter::new(),
        &fixture,
        |store: &mut UserStoreDouble, row: &Row| {
            if row.email == "c@x.com" {
                panic!("body blew up");
            }
            body(store, row)
        },
    );

    assert_eq!(fixture.setups.load(Ordering::SeqCst), 2);
    assert_eq!(fixture.teardowns.load(Ordering::SeqCst), 2);
    assert_eq!(report.summary.passed, 1);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.failed, 1);
}

#[test]
fn skipped_cases_never_run() {
    let calls = AtomicUsize::new(0);
    let table = CaseTable::new("users")
        .with(Case::new("a", row("a@x.com", false, false)).skip("offline"))
        .with(Case::new("b", row("b@x.com", false, false)).skip(""));

    let report = CaseRunner::default().run(&table, &mut RecordingReporter::new(), |_row| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(report.summary.skipped, 2);
    assert!(report.summary.is_success());
}

#[test]
fn parallel_and_sequential_agree() {
    let table = (0..32).fold(CaseTable::new("many"), |t, i| {
        let email: &'static str = Box::leak(format!("user{i}@x.com").into_boxed_str());
        t.case(format!("case {i}"), row(email, i % 3 == 0, i % 5 == 0))
    });

    let sequential =
        CaseRunner::default().run_with_fixture(&table, &mut RecordingReporter::new(), &UserStoreFixture, body);
    let parallel = CaseRunner::new(RunConfig::new().with_jobs(8)).run_with_fixture(
        &table,
        &mut RecordingReporter::new(),
        &UserStoreFixture,
        body,
    );

    let kinds = |r: &standin::harness::RunReport| -> Vec<(String, &'static str)> {
        r.results.iter().map(|(n, o)| (n.clone(), o.label())).collect()
    };
    assert_eq!(kinds(&sequential), kinds(&parallel));
    assert_eq!(sequential.summary.failed, parallel.summary.failed);
}

#[test]
fn counter_is_checked_per_case() {
    let table = CaseTable::new("users").case("one lookup", row("a@x.com", true, true));
    let report = CaseRunner::default().run_with_fixture(
        &table,
        &mut RecordingReporter::new(),
        &UserStoreFixture,
        |store: &mut UserStoreDouble, row: &Row| {
            body(store, row)?;
            check_eq(store.calls(), 1)
        },
    );
    assert!(report.summary.is_success());
}
