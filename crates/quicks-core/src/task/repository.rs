//! Task repository trait.

use super::model::Task;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for reading tasks.
///
/// Same contract as the conversation side: one bulk read, store-defined
/// order, failures propagate unchanged.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Retrieves every task currently in the store.
    async fn list_all(&self) -> Result<Vec<Task>>;
}
