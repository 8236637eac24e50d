//! Conversation fetch service.

use crate::fetch::{FetchCell, FetchState};
use quicks_core::conversation::{Conversation, ConversationRepository};
use quicks_core::error::QuicksError;
use std::sync::Arc;

/// Adapts the one-shot conversation fetch into observable UI state.
///
/// The repository is injected, so the service runs unchanged against
/// Firestore in production and against in-memory mocks in tests.
pub struct ConversationsService {
    repository: Arc<dyn ConversationRepository>,
    state: FetchCell<Conversation>,
}

impl ConversationsService {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self {
            repository,
            state: FetchCell::new(),
        }
    }

    /// Fetches the full conversation list and updates the observable state.
    ///
    /// Never fails from the caller's point of view: failures land in the
    /// error slot and are logged. Overlapping calls join the in-flight
    /// fetch.
    pub async fn refresh(&self) {
        let repository = self.repository.clone();
        self.state
            .run(|| async move { repository.list_all().await })
            .await;
    }

    /// Current conversation list.
    pub async fn conversations(&self) -> Vec<Conversation> {
        self.state.items().await
    }

    /// True while a refresh is in flight.
    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    /// Error recorded by the most recent failed refresh, if any.
    pub async fn error(&self) -> Option<QuicksError> {
        self.state.error().await
    }

    /// Snapshot of the three state slots.
    pub async fn snapshot(&self) -> FetchState<Conversation> {
        self.state.snapshot().await
    }
}
