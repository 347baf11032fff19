//! `fetch_text` against a [`Mock`] API client.

use standin_core::{ApiError, Response, fetch_text};

use crate::doubles::{Mock, MockApiClient};
use crate::harness::check::{check_eq, check_error_message};
use crate::harness::{CaseReporter, CaseResult, CaseRunner, CaseTable, RunReport};

pub const SUITE: &str = "api";

#[derive(Debug, Clone)]
pub struct FetchCase {
    pub query: &'static str,
    pub response: Response,
    pub error: Option<ApiError>,
    /// `Ok(text)` or `Err(message)`
    pub want: Result<&'static str, &'static str>,
}

pub fn table() -> CaseTable<FetchCase> {
    CaseTable::new(SUITE)
        .case(
            "success returns body",
            FetchCase {
                query: "weather",
                response: Response::new("sunny", 200),
                error: None,
                want: Ok("sunny"),
            },
        )
        .case(
            "not found status is rejected",
            FetchCase {
                query: "weather",
                response: Response::new("", 404),
                error: None,
                want: Err("request for 'weather' was rejected with status 404"),
            },
        )
        .case(
            "client error is upstream",
            FetchCase {
                query: "weather",
                response: Response::new("ignored", 200),
                error: Some(ApiError::Unavailable("maintenance".to_string())),
                want: Err("request for 'weather' failed: service unavailable: maintenance"),
            },
        )
        .case(
            "unset mock breaks the contract",
            FetchCase {
                query: "weather",
                response: Response::default(),
                error: None,
                want: Err("collaborator broke the ApiClient contract: status 0 is not an HTTP status"),
            },
        )
}

pub fn case_names() -> Vec<String> {
    table().names().map(str::to_string).collect()
}

pub fn check_case(case: &FetchCase) -> CaseResult {
    let mut mock = Mock::new();
    mock.set_response(case.response.clone(), case.error.clone());

    let result = fetch_text(&mock, case.query);
    check_eq(mock.calls(), 1)?;
    check_eq(mock.queries(), vec![case.query.to_string()])?;

    match case.want {
        Ok(text) => check_eq(result.as_deref().ok(), Some(text)),
        Err(message) => check_error_message(&result, message),
    }
}

pub fn run(runner: &CaseRunner, reporter: &mut dyn CaseReporter) -> RunReport {
    runner.run(&table(), reporter, check_case)
}
