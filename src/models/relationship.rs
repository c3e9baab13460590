//! Task dependency and link models.

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskIdOptions};
use crate::query::{QueryPairs, ToQuery};

/// Request body for `POST v2/task/{task_id}/dependency`.
///
/// Exactly one of the two fields must be set: `depends_on` makes the task
/// wait on another, `dependency_of` makes another task wait on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddDependencyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_of: Option<String>,
}

impl AddDependencyRequest {
    /// The task waits on `task_id`.
    pub fn depends_on(task_id: impl Into<String>) -> Self {
        Self {
            depends_on: Some(task_id.into()),
            dependency_of: None,
        }
    }

    /// `task_id` waits on the task.
    pub fn dependency_of(task_id: impl Into<String>) -> Self {
        Self {
            depends_on: None,
            dependency_of: Some(task_id.into()),
        }
    }

    /// Check that exactly one direction is set.
    pub fn validate(&self) -> crate::Result<()> {
        crate::validation::require_exactly_one(&[
            ("depends_on", self.depends_on.is_some()),
            ("dependency_of", self.dependency_of.is_some()),
        ])?;
        if let Some(id) = self.depends_on.as_deref().or(self.dependency_of.as_deref()) {
            crate::validation::require_id("depends_on", id)?;
        }
        Ok(())
    }
}

/// Query for `DELETE v2/task/{task_id}/dependency`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDependencyQuery {
    pub dependency: AddDependencyRequest,
    pub id_options: TaskIdOptions,
}

impl ToQuery for DeleteDependencyQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push_opt("depends_on", self.dependency.depends_on.as_deref())
            .push_opt("dependency_of", self.dependency.dependency_of.as_deref());
        self.id_options.append(&mut q);
        q
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskLinkResponse {
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_request_requires_exactly_one_direction() {
        assert!(AddDependencyRequest::default().validate().is_err());
        assert!(AddDependencyRequest::depends_on("t2").validate().is_ok());

        let both = AddDependencyRequest {
            depends_on: Some("a".to_string()),
            dependency_of: Some("b".to_string()),
        };
        assert!(both.validate().is_err());
        assert!(AddDependencyRequest::depends_on(" ").validate().is_err());
    }

    #[test]
    fn test_dependency_request_body() {
        let json = serde_json::to_value(AddDependencyRequest::dependency_of("t9")).unwrap();
        assert_eq!(json, serde_json::json!({"dependency_of": "t9"}));
    }

    #[test]
    fn test_delete_dependency_query() {
        let query = DeleteDependencyQuery {
            dependency: AddDependencyRequest::depends_on("t2"),
            id_options: TaskIdOptions::custom("9001"),
        };
        let q = query.to_query();
        assert_eq!(q.get("depends_on"), Some("t2"));
        assert!(q.get("dependency_of").is_none());
        assert_eq!(q.get("team_id"), Some("9001"));
    }
}
