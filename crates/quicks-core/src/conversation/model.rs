//! Conversation domain model.
//!
//! The typed materialization of a document from the "conversations"
//! collection. Field names follow the store's camelCase convention; anything
//! the schema does not model is preserved in the `extra` bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Distinguishes group chats from one-on-one conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Group,
    Single,
}

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Display name of the sender.
    pub sender: String,
    /// The message text.
    pub body: String,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

/// A conversation as materialized from the document store.
///
/// Constructed fresh on every fetch by merging the store-assigned document id
/// with the document's decoded field map; replaced wholesale on the next
/// fetch. Documents may be partial, so everything but the id is optional or
/// defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Store-assigned document id.
    pub id: String,
    /// Human-readable conversation title.
    #[serde(default)]
    pub title: String,
    /// Display names of the participants.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Group chat or one-on-one. Stored under the `type` field.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ConversationKind>,
    /// True when the conversation holds messages the user has not read.
    #[serde(default)]
    pub unread: bool,
    /// Short summary of the most recent message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    /// When the conversation was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the conversation was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Full message history, present only when the document embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    /// Fields the schema does not model, kept as the store returned them.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
