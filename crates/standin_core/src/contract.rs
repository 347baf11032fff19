//! Capability contracts.
//!
//! Each trait is the complete operation set a collaborator must expose. Business logic is written against these
//! traits only, so a production collaborator and a test double are interchangeable without touching that logic.

use crate::errors::ApiError;

/// Check whether a user record exists.
pub trait UserStore {
    /// Return `true` if a user with `email` is known. Absence is not an error.
    fn user_exists(&self, email: &str) -> bool;
}

impl<T: UserStore + ?Sized> UserStore for &T {
    fn user_exists(&self, email: &str) -> bool {
        (**self).user_exists(email)
    }
}

impl<T: UserStore + ?Sized> UserStore for Box<T> {
    fn user_exists(&self, email: &str) -> bool {
        (**self).user_exists(email)
    }
}

/// A response returned by an [`ApiClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub status_code: u16,
}

impl Response {
    pub fn new(text: impl Into<String>, status_code: u16) -> Self {
        Self {
            text: text.into(),
            status_code,
        }
    }

    /// `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Fetch a response for a query from a remote API.
pub trait ApiClient {
    fn get_data(&self, query: &str) -> Result<Response, ApiError>;
}

impl<T: ApiClient + ?Sized> ApiClient for &T {
    fn get_data(&self, query: &str) -> Result<Response, ApiError> {
        (**self).get_data(query)
    }
}

impl<T: ApiClient + ?Sized> ApiClient for Box<T> {
    fn get_data(&self, query: &str) -> Result<Response, ApiError> {
        (**self).get_data(query)
    }
}

/// Something that performs tasks and remembers how many it has done.
///
/// `work` takes `&mut self`: doing work changes the worker's own state, so a worker can only be handed out by
/// unique reference or by value.
pub trait Worker {
    /// Perform `tasks` in order and return a report of what was done.
    fn work(&mut self, tasks: &[&str]) -> String;

    /// Total number of tasks completed so far.
    fn completed(&self) -> usize;
}

impl<T: Worker + ?Sized> Worker for Box<T> {
    fn work(&mut self, tasks: &[&str]) -> String {
        (**self).work(tasks)
    }

    fn completed(&self) -> usize {
        (**self).completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Everyone;

    impl UserStore for Everyone {
        fn user_exists(&self, _email: &str) -> bool {
            true
        }
    }

    fn check<S: UserStore>(store: S) -> bool {
        store.user_exists("a@x.com")
    }

    #[test]
    fn test_user_store_blanket_impls_forward() {
        assert!(check(&Everyone));
        let boxed: Box<dyn UserStore> = Box::new(Everyone);
        assert!(check(&boxed));
        assert!(check(boxed));
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new("ok", 200).is_success());
        assert!(Response::new("created", 201).is_success());
        assert!(!Response::new("moved", 301).is_success());
        assert!(!Response::default().is_success());
    }
}
