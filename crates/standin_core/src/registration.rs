//! User registration rules.

use crate::contract::UserStore;
use crate::errors::RegistrationError;

/// Ensure `email` is not taken before a new user is created.
///
/// The store is passed in explicitly, so callers decide whether the check hits a real database or a double.
/// Persisting the new record is not part of this rule.
///
/// ## Errors
/// - [`RegistrationError::DuplicateKey`] when the store already knows `email`.
pub fn ensure_new_user<S: UserStore + ?Sized>(store: &S, email: &str) -> Result<(), RegistrationError> {
    if store.user_exists(email) {
        return Err(RegistrationError::DuplicateKey {
            email: email.to_string(),
        });
    }
    Ok(())
}
