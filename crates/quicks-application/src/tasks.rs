//! Task fetch service.

use crate::fetch::{FetchCell, FetchState};
use quicks_core::error::QuicksError;
use quicks_core::task::{Task, TaskRepository};
use std::sync::Arc;

/// Adapts the one-shot task fetch into observable UI state.
pub struct TasksService {
    repository: Arc<dyn TaskRepository>,
    state: FetchCell<Task>,
}

impl TasksService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            repository,
            state: FetchCell::new(),
        }
    }

    /// Fetches the full task list and updates the observable state.
    ///
    /// Same contract as the conversation side: failures land in the error
    /// slot, overlapping calls join the in-flight fetch.
    pub async fn refresh(&self) {
        let repository = self.repository.clone();
        self.state
            .run(|| async move { repository.list_all().await })
            .await;
    }

    /// Current task list.
    pub async fn tasks(&self) -> Vec<Task> {
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
    pub async fn snapshot(&self) -> FetchState<Task> {
        self.state.snapshot().await
    }
}
