//! Shared plumbing for Firestore-backed repositories.

use crate::firestore::client::Document;
use crate::firestore::value::fields_to_json;
use quicks_core::error::{QuicksError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Ties a repository to its collection and the entity name used in errors.
pub trait FirestoreRepository {
    /// Collection this repository reads.
    const COLLECTION: &'static str;
    /// Entity name used in decode errors.
    const ENTITY_NAME: &'static str;
}

/// Builds a domain record from a listed document.
///
/// The store-assigned id is merged into the decoded field map under `id` and
/// wins over any same-named document field, so a record's id always equals
/// the store's.
pub(crate) fn into_record<T: DeserializeOwned>(entity: &'static str, document: Document) -> Result<T> {
    let id = document.doc_id().to_string();
    let mut object = fields_to_json(document.fields);
    object.insert("id".to_string(), Value::String(id.clone()));
    serde_json::from_value(Value::Object(object))
        .map_err(|err| QuicksError::decode(entity, id, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicks_core::conversation::Conversation;
    use serde_json::json;

    fn document(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn store_id_wins_over_a_same_named_field() {
        let doc = document(json!({
            "name": ".../conversations/store-id",
            "fields": {"id": {"stringValue": "field-id"}, "title": {"stringValue": "x"}}
        }));

        let conversation: Conversation = into_record("conversation", doc).unwrap();
        assert_eq!(conversation.id, "store-id");
        assert_eq!(conversation.title, "x");
        // The shadowed field is gone rather than duplicated into the bucket.
        assert!(conversation.extra.is_empty());
    }

    #[test]
    fn decode_failures_name_the_document() {
        let doc = document(json!({
            "name": ".../conversations/bad-doc",
            "fields": {"title": {"integerValue": "7"}}
        }));

        let err = into_record::<Conversation>("conversation", doc).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("bad-doc"));
    }
}
