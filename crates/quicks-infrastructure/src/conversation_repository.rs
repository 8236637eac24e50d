//! Firestore-backed conversation repository.

use crate::firestore::client::FirestoreClient;
use crate::firestore_repository::{FirestoreRepository, into_record};
use async_trait::async_trait;
use quicks_core::conversation::{Conversation, ConversationRepository};
use quicks_core::error::Result;
use std::sync::Arc;

/// Reads the "conversations" collection and materializes typed records.
pub struct FirestoreConversationRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreRepository for FirestoreConversationRepository {
    const COLLECTION: &'static str = "conversations";
    const ENTITY_NAME: &'static str = "conversation";
}

impl FirestoreConversationRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConversationRepository for FirestoreConversationRepository {
    async fn list_all(&self) -> Result<Vec<Conversation>> {
        let documents = self.client.list_documents(Self::COLLECTION).await?;
        documents
            .into_iter()
            .map(|document| into_record(Self::ENTITY_NAME, document))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firestore::client::Document;
    use quicks_core::conversation::ConversationKind;
    use serde_json::json;

    #[test]
    fn maps_a_typed_document_into_a_conversation() {
        let document: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/conversations/conv-1",
            "fields": {
                "title": {"stringValue": "Design sync"},
                "participants": {"arrayValue": {"values": [
                    {"stringValue": "Mina"},
                    {"stringValue": "Theo"}
                ]}},
                "type": {"stringValue": "single"},
                "unread": {"booleanValue": true},
                "lastMessage": {"stringValue": "wrapping up"},
                "createdAt": {"timestampValue": "2025-01-01T09:00:00Z"},
                "updatedAt": {"timestampValue": "2025-01-02T10:30:00Z"},
                "messages": {"arrayValue": {"values": [
                    {"mapValue": {"fields": {
                        "sender": {"stringValue": "Theo"},
                        "body": {"stringValue": "wrapping up"},
                        "sentAt": {"timestampValue": "2025-01-02T10:30:00Z"}
                    }}}
                ]}}
            }
        }))
        .unwrap();

        let conversation: Conversation =
            into_record(FirestoreConversationRepository::ENTITY_NAME, document).unwrap();

        assert_eq!(conversation.id, "conv-1");
        assert_eq!(conversation.title, "Design sync");
        assert_eq!(conversation.kind, Some(ConversationKind::Single));
        assert!(conversation.unread);
        assert_eq!(conversation.last_message.as_deref(), Some("wrapping up"));
        assert_eq!(
            conversation.participants,
            vec!["Mina".to_string(), "Theo".to_string()]
        );
        let messages = conversation.messages.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "wrapping up");
    }

    #[test]
    fn fieldless_document_still_becomes_a_record() {
        let document: Document = serde_json::from_value(json!({
            "name": ".../conversations/empty-doc"
        }))
        .unwrap();

        let conversation: Conversation =
            into_record(FirestoreConversationRepository::ENTITY_NAME, document).unwrap();
        assert_eq!(conversation.id, "empty-doc");
        assert_eq!(conversation.title, "");
        assert_eq!(conversation.kind, None);
    }
}
