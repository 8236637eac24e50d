//! Wires configuration, client, repositories and services together.

use crate::conversations::ConversationsService;
use crate::tasks::TasksService;
use quicks_core::error::Result;
use quicks_infrastructure::{
    FirestoreClient, FirestoreConfig, FirestoreConversationRepository, FirestoreTaskRepository,
};
use std::sync::Arc;

/// Application context handed to the UI shell.
///
/// One shared Firestore client feeds both repositories; each service exposes
/// its (records, loading, error, refresh) tuple to the UI.
pub struct AppContext {
    pub conversations: Arc<ConversationsService>,
    pub tasks: Arc<TasksService>,
}

impl AppContext {
    /// Builds the context from explicit configuration.
    pub fn new(config: FirestoreConfig) -> Self {
        let client = Arc::new(FirestoreClient::new(config));

        let conversations = Arc::new(ConversationsService::new(Arc::new(
            FirestoreConversationRepository::new(client.clone()),
        )));
        let tasks = Arc::new(TasksService::new(Arc::new(FirestoreTaskRepository::new(
            client,
        ))));

        Self {
            conversations,
            tasks,
        }
    }

    /// Builds the context from environment configuration.
    ///
    /// Missing settings are fatal to startup; the error is returned to the
    /// caller rather than handled here.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(FirestoreConfig::from_env()?))
    }
}
