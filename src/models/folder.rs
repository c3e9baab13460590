//! Folder models.

use serde::{Deserialize, Serialize};

use super::common::{ContainerRef, Status};
use super::list::List;

/// A folder inside a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder id.
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,

    /// Folder name.
    pub name: String,

    /// Position in the space.
    #[serde(default)]
    pub orderindex: Option<i64>,

    /// Whether the folder overrides the space's statuses.
    #[serde(default)]
    pub override_statuses: bool,

    /// Whether the folder is hidden.
    #[serde(default)]
    pub hidden: bool,

    /// Parent space.
    #[serde(default)]
    pub space: Option<ContainerRef>,

    /// Number of tasks, as a string.
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub task_count: Option<String>,

    /// Whether the folder is archived.
    #[serde(default)]
    pub archived: bool,

    /// Folder statuses when overridden.
    #[serde(default)]
    pub statuses: Vec<Status>,

    /// Lists in the folder.
    #[serde(default)]
    pub lists: Vec<List>,

    /// Permission level of the token's user.
    #[serde(default)]
    pub permission_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FoldersResponse {
    pub folders: Vec<Folder>,
}

/// Request body for creating or renaming a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderRequest {
    pub name: String,
}

/// Request body for `POST v2/space/{space_id}/folder_template/{template_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateFolderFromTemplateRequest {
    /// Name of the new folder.
    pub name: String,

    /// Template options; every flag is optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TemplateOptions>,
}

/// What to copy when instantiating a folder or list template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateOptions {
    /// Return immediately and build the copy in the background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_immediately: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_views: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_due_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_start_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_followers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_statuses: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_checklists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_assignees: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_with_lists() {
        let json = r#"{
            "id": "457",
            "name": "Roadmap",
            "orderindex": 0,
            "override_statuses": false,
            "hidden": false,
            "space": {"id": "789", "name": "Engineering", "access": true},
            "task_count": "12",
            "lists": [{"id": "901", "name": "Q1"}]
        }"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.task_count.as_deref(), Some("12"));
        assert_eq!(folder.space.unwrap().id, "789");
        assert_eq!(folder.lists[0].name, "Q1");
    }

    #[test]
    fn test_template_request_omits_unset_options() {
        let request = CreateFolderFromTemplateRequest {
            name: "From template".to_string(),
            options: Some(TemplateOptions {
                return_immediately: Some(true),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["options"], serde_json::json!({"return_immediately": true}));
    }
}
