//! Task domain model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A task as materialized from the "tasks" collection.
///
/// Tasks have a looser schema than conversations: beyond the id and the notes
/// list, documents carry whatever fields the app stored, preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned document id.
    pub id: String,
    /// Free-form notes attached to the task.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Fields the schema does not model, kept as the store returned them.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_with_and_without_notes() {
        let with_notes: Task =
            serde_json::from_value(json!({"id": "t1", "notes": ["buy milk"]})).unwrap();
        assert_eq!(with_notes.notes, vec!["buy milk".to_string()]);

        let bare: Task = serde_json::from_value(json!({"id": "t2"})).unwrap();
        assert!(bare.notes.is_empty());
        assert!(bare.extra.is_empty());
    }

    #[test]
    fn unmodeled_fields_land_in_the_extra_bucket() {
        let task: Task = serde_json::from_value(json!({
            "id": "t3",
            "title": "Close the sprint",
            "done": false
        }))
        .unwrap();

        assert_eq!(task.extra["title"], json!("Close the sprint"));
        assert_eq!(task.extra["done"], json!(false));
    }
}
