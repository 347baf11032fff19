use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use standin_core::{ApiClient, ApiError, Response};
use tracing::{debug, info};

use super::CollaboratorError;

#[derive(Debug, Deserialize)]
struct RecordedResponse {
    #[serde(default)]
    text: String,
    status_code: u16,
}

/// [`ApiClient`] that replays responses recorded in a JSON file.
///
/// The file is an object keyed by query:
///
/// ```json
/// { "weather": { "text": "sunny", "status_code": 200 } }
/// ```
///
/// Queries with no recording fail with [`ApiError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct RecordedApiClient {
    source: Option<PathBuf>,
    responses: HashMap<String, Response>,
}

impl RecordedApiClient {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CollaboratorError> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| CollaboratorError::Read {
            path: path.clone(),
            source,
        })?;
        let mut client = Self::from_json(&contents).map_err(|source| CollaboratorError::Parse {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), recordings = client.responses.len(), "loaded recorded responses");
        client.source = Some(path);
        Ok(client)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let recorded: HashMap<String, RecordedResponse> = serde_json::from_str(json)?;
        let responses = recorded
            .into_iter()
            .map(|(query, r)| (query, Response::new(r.text, r.status_code)))
            .collect();
        Ok(Self {
            source: None,
            responses,
        })
    }

    /// File the recordings came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl ApiClient for RecordedApiClient {
    fn get_data(&self, query: &str) -> Result<Response, ApiError> {
        debug!(query, "replaying recorded response");
        self.responses
            .get(query)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(query.to_string()))
    }
}
