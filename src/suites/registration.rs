//! `ensure_new_user` against a [`UserStoreDouble`].

use standin_core::ensure_new_user;

use crate::doubles::{UserStoreDouble, UserStoreFixture};
use crate::harness::check::{check_eq, check_error_message, check_ok};
use crate::harness::{Case, CaseReporter, CaseResult, CaseRunner, CaseTable, RunReport};

pub const SUITE: &str = "registration";

#[derive(Debug, Clone)]
pub struct NewUserCase {
    pub email: &'static str,
    /// Add `email` to the double before the call
    pub preset: bool,
    pub want_err: bool,
}

pub fn table() -> CaseTable<NewUserCase> {
    CaseTable::new(SUITE)
        .case(
            "want success",
            NewUserCase {
                email: "gregorysmith@myexampledomain.com",
                preset: false,
                want_err: false,
            },
        )
        .case(
            "want error",
            NewUserCase {
                email: "johndoe@myexampledomain.com",
                preset: true,
                want_err: true,
            },
        )
        .case(
            "no-conflict",
            NewUserCase {
                email: "a@x.com",
                preset: false,
                want_err: false,
            },
        )
        .case(
            "conflict",
            NewUserCase {
                email: "b@x.com",
                preset: true,
                want_err: true,
            },
        )
        .with(
            Case::new(
                "taken email accepted",
                NewUserCase {
                    email: "c@x.com",
                    preset: true,
                    want_err: false,
                },
            )
            .xfail("expectation is wrong on purpose; the other cases must still pass"),
        )
}

pub fn case_names() -> Vec<String> {
    table().names().map(str::to_string).collect()
}

/// Preset the double, run `ensure_new_user`, and check both the result and the single lookup.
pub fn check_case(store: &mut UserStoreDouble, case: &NewUserCase) -> CaseResult {
    if case.preset {
        store.add_user(case.email);
    }

    let result = ensure_new_user(&*store, case.email);
    check_eq(store.calls(), 1)?;
    check_eq(store.queried(), vec![case.email.to_string()])?;

    if case.want_err {
        check_error_message(&result, &format!("user with '{}' email already exists", case.email))
    } else {
        check_ok(&result)
    }
}

pub fn run(runner: &CaseRunner, reporter: &mut dyn CaseReporter) -> RunReport {
    runner.run_with_fixture(&table(), reporter, &UserStoreFixture, check_case)
}
