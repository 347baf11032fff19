//! Deterministic test doubles for the capability contracts.
//!
//! Every double:
//! - starts empty and cannot fail on construction,
//! - is configured through its own methods before use,
//! - returns exactly what it was configured with, and
//! - counts its contract calls so tests can assert on them.
//!
//! Counters use `Cell`/`RefCell`, so a double is deliberately not `Sync`: one double per case, never shared
//! between concurrently running cases.

pub mod api_client;
pub mod user_store;
pub mod worker;

pub use api_client::{Mock, MockApiClient};
pub use user_store::{UserStoreDouble, UserStoreFixture};
pub use worker::{RecordingWorker, TaskLog};
