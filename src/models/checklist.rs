//! Checklist models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::User;

/// A checklist on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    /// Checklist id (UUID).
    pub id: String,

    /// Owning task id.
    #[serde(default)]
    pub task_id: Option<String>,

    /// Checklist name.
    pub name: String,

    /// Position on the task.
    #[serde(default)]
    pub orderindex: Option<f64>,

    /// Number of resolved items.
    #[serde(default)]
    pub resolved: Option<u32>,

    /// Number of unresolved items.
    #[serde(default)]
    pub unresolved: Option<u32>,

    /// Items, flattened; nesting is expressed through `parent`.
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Whether every item is resolved.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| item.resolved)
    }
}

/// A checklist item.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub orderindex: Option<f64>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub children: Vec<ChecklistItem>,
}

/// Response wrapper (`{"checklist": {...}}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ChecklistResponse {
    pub checklist: Checklist,
}

/// Request body for creating a checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChecklistRequest {
    pub name: String,
}

/// Request body for renaming or reordering a checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditChecklistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New position; 0 places the checklist first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Request body for adding a checklist item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChecklistItemRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
}

/// Request body for editing a checklist item.
///
/// `assignee: Some(None)` unassigns the item; `parent: Some(None)` un-nests it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditChecklistItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_deserialize() {
        let json = r#"{
            "checklist": {
                "id": "b955c4dc",
                "task_id": "9hx",
                "name": "Release steps",
                "orderindex": 0,
                "resolved": 1,
                "unresolved": 1,
                "items": [
                    {"id": "i1", "name": "Tag", "orderindex": 0, "resolved": true, "parent": null, "date_created": "1704067200000", "children": []},
                    {"id": "i2", "name": "Publish", "orderindex": 1, "assignee": {"id": 183, "username": "Ada"}, "resolved": false}
                ]
            }
        }"#;

        let wrapped: ChecklistResponse = serde_json::from_str(json).unwrap();
        let checklist = wrapped.checklist;
        assert_eq!(checklist.name, "Release steps");
        assert_eq!(checklist.items.len(), 2);
        assert_eq!(checklist.items[1].assignee.as_ref().unwrap().id, 183);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn test_edit_item_unassign_serializes_null() {
        let request = EditChecklistItemRequest {
            assignee: Some(None),
            resolved: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["assignee"].is_null());
        assert_eq!(json["resolved"], true);
        assert!(json.get("name").is_none());
        assert!(json.get("parent").is_none());
    }
}
