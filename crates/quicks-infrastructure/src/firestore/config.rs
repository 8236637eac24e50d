//! Firestore connection configuration.
//!
//! Settings are supplied by the environment; credentials are never embedded
//! in source. Point `QUICKS_FIRESTORE_ENDPOINT` at a local emulator for
//! development.

use quicks_core::error::{QuicksError, Result};
use std::env;
use std::fmt;

/// Production REST endpoint for the Firestore v1 API.
pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

const DEFAULT_DATABASE_ID: &str = "(default)";

const ENV_PROJECT_ID: &str = "QUICKS_FIRESTORE_PROJECT_ID";
const ENV_API_KEY: &str = "QUICKS_FIRESTORE_API_KEY";
const ENV_DATABASE_ID: &str = "QUICKS_FIRESTORE_DATABASE_ID";
const ENV_ENDPOINT: &str = "QUICKS_FIRESTORE_ENDPOINT";

/// Connection settings for the Firestore REST API.
///
/// Immutable after construction; one instance configures the shared client
/// for the lifetime of the process.
#[derive(Clone)]
pub struct FirestoreConfig {
    /// Google Cloud project that owns the database.
    pub project_id: String,
    /// Web API key sent as the `key` query parameter.
    pub api_key: String,
    /// Database id within the project, normally `(default)`.
    pub database_id: String,
    /// Base URL of the REST API.
    pub endpoint: String,
}

impl FirestoreConfig {
    /// Creates a config with the production endpoint and default database.
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: api_key.into(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the database id.
    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = database_id.into();
        self
    }

    /// Overrides the endpoint base URL (emulator support).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Loads the configuration from environment variables.
    ///
    /// `QUICKS_FIRESTORE_PROJECT_ID` and `QUICKS_FIRESTORE_API_KEY` are
    /// required; database id and endpoint fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let project_id = env::var(ENV_PROJECT_ID)
            .map_err(|_| QuicksError::config(format!("{ENV_PROJECT_ID} is not set")))?;
        let api_key = env::var(ENV_API_KEY)
            .map_err(|_| QuicksError::config(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(project_id, api_key);
        if let Ok(database_id) = env::var(ENV_DATABASE_ID) {
            config.database_id = database_id;
        }
        if let Ok(endpoint) = env::var(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Base URL of the documents resource for this database.
    pub(crate) fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database_id
        )
    }
}

// Manual Debug: the API key must not leak into logs or error output.
impl fmt::Debug for FirestoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
