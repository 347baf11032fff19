use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use standin_core::UserStore;
use tracing::info;

use super::CollaboratorError;

/// [`UserStore`] loaded from a newline-separated list of emails.
///
/// Entries are trimmed; blank lines and lines starting with `#` are ignored.
#[derive(Debug, Clone)]
pub struct FileUserStore {
    path: PathBuf,
    emails: HashSet<String>,
}

impl FileUserStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CollaboratorError> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| CollaboratorError::Read {
            path: path.clone(),
            source,
        })?;
        let emails = parse_emails(&contents);
        info!(path = %path.display(), users = emails.len(), "loaded user store");
        Ok(Self { path, emails })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

impl UserStore for FileUserStore {
    fn user_exists(&self, email: &str) -> bool {
        self.emails.contains(email.trim())
    }
}

fn parse_emails(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
