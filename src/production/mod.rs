//! Production collaborators backed by files on disk.
//!
//! These are thin: they exist so the functions in `standin_core` can be driven by something other than a double,
//! unchanged. Loading happens up front, so contract calls never touch the filesystem.

pub mod file_store;
pub mod recorded;

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub use file_store::FileUserStore;
pub use recorded::RecordedApiClient;

/// Errors raised while loading a production collaborator.
#[derive(Debug, Error, Diagnostic)]
pub enum CollaboratorError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(
        code(standin::collaborator::read),
        help("check that the file exists and is readable")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse recorded responses in {}", .path.display())]
    #[diagnostic(
        code(standin::collaborator::parse),
        help("expected a JSON object mapping each query to an object with `text` and `status_code`")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
