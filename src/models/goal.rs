//! Goal and key result models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::User;

/// A goal with its key results (called targets in the app).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal id (UUID).
    pub id: String,

    /// Short numeric id shown in the app.
    #[serde(default)]
    pub pretty_id: Option<String>,

    /// Goal name.
    pub name: String,

    /// Workspace id.
    #[serde(default)]
    pub team_id: Option<String>,

    /// Creator user id.
    #[serde(default)]
    pub creator: Option<i64>,

    /// Display colour.
    #[serde(default)]
    pub color: Option<String>,

    /// Description.
    #[serde(default)]
    pub description: Option<String>,

    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub archived: bool,

    #[serde(default)]
    pub multiple_owners: bool,

    #[serde(default)]
    pub owners: Vec<User>,

    #[serde(default)]
    pub key_results: Vec<KeyResult>,

    /// Overall progress, 0-100.
    #[serde(default)]
    pub percent_completed: Option<f64>,

    /// Goal folder, if any.
    #[serde(default)]
    pub folder_id: Option<String>,

    #[serde(default)]
    pub pretty_url: Option<String>,
}

/// A goal folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFolder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Response of `GET v2/team/{team_id}/goal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsResponse {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub folders: Vec<GoalFolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoalResponse {
    pub goal: Goal,
}

/// How a key result measures progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyResultType {
    Number,
    Currency,
    Boolean,
    Percentage,
    Automatic,
}

/// A key result of a goal.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub id: String,
    #[serde(default)]
    pub goal_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub creator: Option<i64>,
    #[serde(rename = "type")]
    pub result_type: KeyResultType,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub steps_start: Option<f64>,
    #[serde(default)]
    pub steps_end: Option<f64>,
    #[serde(default)]
    pub steps_current: Option<f64>,
    #[serde(default)]
    pub percent_completed: Option<f64>,
    #[serde(default)]
    pub owners: Vec<User>,
    #[serde(default)]
    pub task_ids: Vec<String>,
    #[serde(default)]
    pub list_ids: Vec<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyResultResponse {
    pub key_result: KeyResult,
}

/// Request body for `POST v2/team/{team_id}/goal`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateGoalRequest {
    pub name: String,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub due_date: Option<DateTime<Utc>>,
    pub description: String,
    pub multiple_owners: bool,
    pub owners: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Request body for `PUT v2/goal/{goal_id}`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateGoalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_owners: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rem_owners: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Request body for `POST v2/goal/{goal_id}/key_result`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateKeyResultRequest {
    pub name: String,
    pub owners: Vec<i64>,
    #[serde(rename = "type")]
    pub result_type: KeyResultType,
    pub steps_start: f64,
    pub steps_end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Tasks driving an automatic key result.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub task_ids: Vec<String>,
    /// Lists driving an automatic key result.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids: Vec<String>,
}

/// Request body for `PUT v2/key_result/{key_result_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditKeyResultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_goal_deserialize_with_key_results() {
        let json = r##"{
            "goal": {
                "id": "e53a033c-900e-462d-a849-4a216b06d930",
                "pretty_id": "6",
                "name": "Ship v2",
                "team_id": "512",
                "creator": 183,
                "color": "#32a852",
                "date_created": "1568044355026",
                "start_date": null,
                "due_date": "1568036964079",
                "description": "Goal description",
                "private": false,
                "archived": false,
                "multiple_owners": true,
                "owners": [{"id": 183, "username": "Ada"}],
                "key_results": [{
                    "id": "947d46ed-8480-49bc-8c57-e569747efe93",
                    "goal_id": "e53a033c-900e-462d-a849-4a216b06d930",
                    "name": "Close bugs",
                    "type": "number",
                    "unit": "bugs",
                    "steps_start": 0,
                    "steps_end": 10,
                    "steps_current": 4,
                    "percent_completed": 0.4
                }],
                "percent_completed": 40
            }
        }"##;
        let wrapped: GoalResponse = serde_json::from_str(json).unwrap();
        let goal = wrapped.goal;
        assert_eq!(goal.name, "Ship v2");
        assert!(goal.start_date.is_none());
        assert_eq!(goal.key_results[0].result_type, KeyResultType::Number);
        assert_eq!(goal.key_results[0].steps_current, Some(4.0));
    }

    #[test]
    fn test_create_goal_request_shape() {
        let request = CreateGoalRequest {
            name: "Grow".to_string(),
            due_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            owners: vec![183],
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["due_date"], 1_704_067_200_000i64);
        assert_eq!(json["description"], "");
        assert_eq!(json["multiple_owners"], false);
        assert!(json.get("color").is_none());
    }

    #[test]
    fn test_key_result_type_lowercase() {
        let json = serde_json::to_string(&KeyResultType::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");
    }
}
