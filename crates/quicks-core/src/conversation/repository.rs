//! Conversation repository trait.

use super::model::Conversation;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for reading conversations.
///
/// Decouples the fetch services from the concrete store (Firestore in
/// production, in-memory mocks in tests). The store is read-only from this
/// layer's point of view: there is a single bulk read and no filtering,
/// ordering or pagination parameters.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Retrieves every conversation currently in the store.
    ///
    /// Results come back in whatever order the store chose; any failure
    /// during the request propagates unchanged.
    async fn list_all(&self) -> Result<Vec<Conversation>>;
}
