use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use standin_core::UserStore;

use crate::harness::Fixture;

/// In-memory [`UserStore`] with presettable users and call tracking.
#[derive(Debug, Default)]
pub struct UserStoreDouble {
    emails: HashMap<String, bool>,
    calls: Cell<usize>,
    queried: RefCell<Vec<String>>,
}

impl UserStoreDouble {
    pub fn new() -> Self {
        Self::default()
    }

    /// A double with every email in `emails` already present.
    pub fn with_users<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut double = Self::new();
        for email in emails {
            double.add_user(email);
        }
        double
    }

    /// Mark `email` as existing.
    pub fn add_user(&mut self, email: impl Into<String>) {
        self.emails.insert(email.into(), true);
    }

    /// Number of `user_exists` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Emails passed to `user_exists`, in call order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl UserStore for UserStoreDouble {
    fn user_exists(&self, email: &str) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.queried.borrow_mut().push(email.to_string());
        self.emails.get(email).copied().unwrap_or(false)
    }
}

/// Hands every case its own empty [`UserStoreDouble`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UserStoreFixture;

impl Fixture for UserStoreFixture {
    type State = UserStoreDouble;

    fn setup(&self) -> UserStoreDouble {
        UserStoreDouble::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_double_knows_nobody() {
        let double = UserStoreDouble::new();
        assert!(!double.user_exists("a@x.com"));
        assert_eq!(double.calls(), 1);
    }

    #[test]
    fn test_add_user_makes_email_exist() {
        let mut double = UserStoreDouble::new();
        double.add_user("a@x.com");
        assert!(double.user_exists("a@x.com"));
        assert!(!double.user_exists("b@x.com"));
        assert_eq!(double.calls(), 2);
        assert_eq!(double.queried(), vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_with_users() {
        let double = UserStoreDouble::with_users(["a@x.com", "b@x.com"]);
        assert!(double.user_exists("b@x.com"));
        assert_eq!(double.calls(), 1);
    }

    #[test]
    fn test_fixture_hands_out_fresh_doubles() {
        let mut first = UserStoreFixture.setup();
        first.add_user("a@x.com");
        first.user_exists("a@x.com");

        let second = UserStoreFixture.setup();
        assert_eq!(second.calls(), 0);
        assert!(!second.user_exists("a@x.com"));
    }
}
