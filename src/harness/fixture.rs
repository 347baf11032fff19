//! Per-case setup and teardown.

/// Builds fresh state for every case and disposes of it afterwards.
///
/// The runner calls `setup` right before a case body and `teardown` right after it, including when the body
/// panics. State is never carried from one case to the next.
pub trait Fixture {
    type State;

    fn setup(&self) -> Self::State;

    fn teardown(&self, _state: Self::State) {}
}

/// Fixture built from a setup closure, with no teardown.
#[derive(Debug, Clone, Copy)]
pub struct SetupFn<F>(pub F);

impl<S, F: Fn() -> S> Fixture for SetupFn<F> {
    type State = S;

    fn setup(&self) -> S {
        (self.0)()
    }
}

/// Owns one case's fixture state and tears it down on drop.
pub(crate) struct FixtureGuard<'f, F: Fixture> {
    fixture: &'f F,
    state: Option<F::State>,
}

impl<'f, F: Fixture> FixtureGuard<'f, F> {
    pub(crate) fn new(fixture: &'f F) -> Self {
        Self {
            fixture,
            state: Some(fixture.setup()),
        }
    }

    pub(crate) fn state_mut(&mut self) -> Option<&mut F::State> {
        self.state.as_mut()
    }
}

impl<F: Fixture> Drop for FixtureGuard<'_, F> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            self.fixture.teardown(state);
        }
    }
}
