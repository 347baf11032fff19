use std::cell::{Cell, RefCell};

use standin_core::{ApiClient, ApiError, Response};

/// An [`ApiClient`] whose answer can be preset.
pub trait MockApiClient: ApiClient {
    /// Set what every following `get_data` call returns. A configured error takes precedence over `resp`.
    fn set_response(&mut self, resp: Response, err: Option<ApiError>);
}

/// Canned-response [`MockApiClient`].
///
/// A fresh mock answers with `Response::default()` (empty text, status 0) and no error.
#[derive(Debug, Default)]
pub struct Mock {
    resp: Response,
    err: Option<ApiError>,
    calls: Cell<usize>,
    queries: RefCell<Vec<String>>,
}

impl Mock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl ApiClient for Mock {
    fn get_data(&self, query: &str) -> Result<Response, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.queries.borrow_mut().push(query.to_string());
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(self.resp.clone()),
        }
    }
}

impl MockApiClient for Mock {
    fn set_response(&mut self, resp: Response, err: Option<ApiError>) {
        self.resp = resp;
        self.err = err;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_response() {
        let mock = Mock::new();
        assert_eq!(mock.get_data("q"), Ok(Response::default()));
    }

    #[test]
    fn test_set_response_is_returned_every_call() {
        let mut mock = Mock::new();
        mock.set_response(Response::new("hello", 200), None);
        assert_eq!(mock.get_data("a").unwrap().text, "hello");
        assert_eq!(mock.get_data("b").unwrap().text, "hello");
        assert_eq!(mock.calls(), 2);
        assert_eq!(mock.queries(), vec!["a", "b"]);
    }

    #[test]
    fn test_configured_error_wins() {
        let mut mock = Mock::new();
        mock.set_response(Response::new("ignored", 200), Some(ApiError::Unavailable("down".into())));
        assert_eq!(mock.get_data("a"), Err(ApiError::Unavailable("down".into())));

        mock.set_response(Response::new("back", 200), None);
        assert!(mock.get_data("a").is_ok());
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn test_usable_through_trait_object() {
        let mut mock: Box<dyn MockApiClient> = Box::new(Mock::new());
        mock.set_response(Response::new("boxed", 201), None);
        assert_eq!(mock.get_data("q").unwrap().status_code, 201);
    }
}
