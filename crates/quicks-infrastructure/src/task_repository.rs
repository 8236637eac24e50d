//! Firestore-backed task repository.

use crate::firestore::client::FirestoreClient;
use crate::firestore_repository::{FirestoreRepository, into_record};
use async_trait::async_trait;
use quicks_core::error::Result;
use quicks_core::task::{Task, TaskRepository};
use std::sync::Arc;

/// Reads the "tasks" collection and materializes typed records.
pub struct FirestoreTaskRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreRepository for FirestoreTaskRepository {
    const COLLECTION: &'static str = "tasks";
    const ENTITY_NAME: &'static str = "task";
}

impl FirestoreTaskRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskRepository for FirestoreTaskRepository {
    async fn list_all(&self) -> Result<Vec<Task>> {
        let documents = self.client.list_documents(Self::COLLECTION).await?;
        documents
            .into_iter()
            .map(|document| into_record(Self::ENTITY_NAME, document))
            .collect()
    }
}
