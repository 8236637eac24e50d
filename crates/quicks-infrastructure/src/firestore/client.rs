//! Minimal Firestore REST client.
//!
//! Speaks exactly one endpoint: `documents.list`. One request per call, full
//! result set, no page token handling, no streaming. The client is built once
//! at startup and shared by every repository.

use super::config::FirestoreConfig;
use super::value::FirestoreValue;
use quicks_core::error::{QuicksError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;

/// A document as returned by `documents.list`, before domain mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name:
    /// `projects/{project}/databases/{db}/documents/{collection}/{id}`.
    pub name: String,
    /// Raw field map; empty for documents with no fields.
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl Document {
    /// Store-assigned id: the last segment of the resource name.
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// An empty collection comes back as `{}`, without a `documents` key.
#[derive(Debug, Default, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Shared handle to the Firestore REST API.
///
/// Construct once from a [`FirestoreConfig`] and share via `Arc`; the handle
/// is read-only after construction.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn list_url(&self, collection_id: &str) -> String {
        format!("{}/{}", self.config.documents_url(), collection_id)
    }

    /// Fetches every document currently in `collection_id`.
    ///
    /// Returns documents in the order the store chose. Any transport failure
    /// or non-success status maps to [`QuicksError::Store`]; there is no
    /// retry and no partial result.
    pub async fn list_documents(&self, collection_id: &str) -> Result<Vec<Document>> {
        let url = self.list_url(collection_id);
        tracing::debug!(collection = collection_id, "listing documents");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|err| QuicksError::store(None, format!("Firestore request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read Firestore error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: ListDocumentsResponse = response.json().await.map_err(|err| {
            QuicksError::store(None, format!("failed to parse Firestore response: {err}"))
        })?;

        tracing::debug!(
            collection = collection_id,
            count = payload.documents.len(),
            "listed documents"
        );

        Ok(payload.documents)
    }
}

/// Extracts the server's `error.message` from an error body when present,
/// falling back to the raw body.
fn map_http_error(status: StatusCode, body: String) -> QuicksError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    QuicksError::store(Some(status.as_u16()), message)
}
