//! Template models.

use serde::{Deserialize, Serialize};

use super::folder::{Folder, TemplateOptions};
use super::list::List;
use super::task::Task;

/// A task template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskTemplatesResponse {
    #[serde(default)]
    pub templates: Vec<TaskTemplate>,
}

/// Where a list created from a template goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTemplateParent {
    Folder(String),
    Space(String),
}

impl ListTemplateParent {
    pub fn id(&self) -> &str {
        match self {
            ListTemplateParent::Folder(id) | ListTemplateParent::Space(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ListTemplateParent::Folder(_) => "folder",
            ListTemplateParent::Space(_) => "space",
        }
    }
}

/// Request body for `POST v2/list/{list_id}/taskTemplate/{template_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFromTemplateRequest {
    pub name: String,
}

/// Request body for creating a list from a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListFromTemplateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TemplateOptions>,
}

/// Result of instantiating a template.
///
/// With `return_immediately` only the id is known; otherwise the created
/// object is included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedFromTemplate {
    pub id: String,
    #[serde(default)]
    pub task: Option<Task>,
    #[serde(default)]
    pub list: Option<List>,
    #[serde(default)]
    pub folder: Option<Folder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_from_template_id_only() {
        let created: CreatedFromTemplate = serde_json::from_str(r#"{"id": "902"}"#).unwrap();
        assert_eq!(created.id, "902");
        assert!(created.list.is_none());
    }

    #[test]
    fn test_list_template_parent() {
        let parent = ListTemplateParent::Space("789".to_string());
        assert_eq!(parent.kind(), "space");
        assert_eq!(parent.id(), "789");
    }
}
