//! Built-in case tables.
//!
//! Each suite pairs a table with the body that checks it, always against doubles. The CLI runs them by name.

pub mod api;
pub mod arithmetic;
pub mod registration;
pub mod robot;

use crate::harness::{CaseReporter, CaseRunner, RunReport};

/// A named, runnable table.
#[derive(Clone, Copy, Debug)]
pub struct Suite {
    pub name: &'static str,
    pub about: &'static str,
    case_names: fn() -> Vec<String>,
    run: fn(&CaseRunner, &mut dyn CaseReporter) -> RunReport,
}

impl Suite {
    pub fn case_names(&self) -> Vec<String> {
        (self.case_names)()
    }

    pub fn run(&self, runner: &CaseRunner, reporter: &mut dyn CaseReporter) -> RunReport {
        (self.run)(runner, reporter)
    }
}

/// All built-in suites, in the order `standin test` runs them.
pub const SUITES: &[Suite] = &[
    Suite {
        name: registration::SUITE,
        about: "ensure_new_user against a UserStore double",
        case_names: registration::case_names,
        run: registration::run,
    },
    Suite {
        name: api::SUITE,
        about: "fetch_text against a canned ApiClient mock",
        case_names: api::case_names,
        run: api::run,
    },
    Suite {
        name: arithmetic::SUITE,
        about: "add, divide and estimate_value",
        case_names: arithmetic::case_names,
        run: arithmetic::run,
    },
    Suite {
        name: robot::SUITE,
        about: "Robot and Company through the Worker contract",
        case_names: robot::case_names,
        run: robot::run,
    },
];

pub fn find(name: &str) -> Option<&'static Suite> {
    SUITES.iter().find(|s| s.name == name)
}

pub fn names() -> Vec<&'static str> {
    SUITES.iter().map(|s| s.name).collect()
}
