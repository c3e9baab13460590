//! Fluent goal and key result requests.

use chrono::{DateTime, Utc};

use crate::error::{ClickUpError, Result};
use crate::models::{
    CreateGoalRequest, CreateKeyResultRequest, EditKeyResultRequest, Goal, GoalsResponse,
    KeyResult, KeyResultType, UpdateGoalRequest,
};
use crate::services::GoalsService;
use crate::validation::{require_id, require_some, require_text};

/// Goal requests, see [`ClickUpClient::goals`](crate::ClickUpClient::goals).
pub struct GoalsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: GoalsService + ?Sized> GoalsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn list(&self, team_id: &str, include_completed: bool) -> Result<GoalsResponse> {
        self.service.get_goals(team_id, include_completed).await
    }

    pub async fn get(&self, goal_id: &str) -> Result<Goal> {
        self.service.get_goal(goal_id).await
    }

    pub fn create(&self, team_id: impl Into<String>) -> CreateGoalBuilder<'a, S> {
        CreateGoalBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: CreateGoalRequest::default(),
        }
    }

    pub fn update(&self, goal_id: impl Into<String>) -> UpdateGoalBuilder<'a, S> {
        UpdateGoalBuilder {
            service: self.service,
            goal_id: goal_id.into(),
            request: UpdateGoalRequest::default(),
        }
    }

    pub async fn delete(&self, goal_id: &str) -> Result<()> {
        self.service.delete_goal(goal_id).await
    }

    /// Add a key result (target) to a goal.
    pub fn add_key_result(
        &self,
        goal_id: impl Into<String>,
        result_type: KeyResultType,
    ) -> CreateKeyResultBuilder<'a, S> {
        CreateKeyResultBuilder {
            service: self.service,
            goal_id: goal_id.into(),
            request: CreateKeyResultRequest {
                name: String::new(),
                owners: Vec::new(),
                result_type,
                steps_start: 0.0,
                steps_end: 0.0,
                unit: None,
                task_ids: Vec::new(),
                list_ids: Vec::new(),
            },
        }
    }

    pub fn edit_key_result(&self, key_result_id: impl Into<String>) -> EditKeyResultBuilder<'a, S> {
        EditKeyResultBuilder {
            service: self.service,
            key_result_id: key_result_id.into(),
            request: EditKeyResultRequest::default(),
        }
    }

    pub async fn delete_key_result(&self, key_result_id: &str) -> Result<()> {
        self.service.delete_key_result(key_result_id).await
    }
}

/// Builder for `POST v2/team/{team_id}/goal`.
pub struct CreateGoalBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: CreateGoalRequest,
}

impl<'a, S: GoalsService + ?Sized> CreateGoalBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.request.due_date = Some(due);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = description.into();
        self
    }

    pub fn owner(mut self, user_id: i64) -> Self {
        self.request.owners.push(user_id);
        self.request.multiple_owners = self.request.owners.len() > 1;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.request.color = Some(color.into());
        self
    }

    pub fn request(&self) -> &CreateGoalRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("team_id", &self.team_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        require_some("due_date", self.request.due_date.as_ref())
    }

    pub async fn send(self) -> Result<Goal> {
        self.validate()?;
        self.service.create_goal(&self.team_id, &self.request).await
    }
}

/// Builder for `PUT v2/goal/{goal_id}`.
pub struct UpdateGoalBuilder<'a, S: ?Sized> {
    service: &'a S,
    goal_id: String,
    request: UpdateGoalRequest,
}

impl<'a, S: GoalsService + ?Sized> UpdateGoalBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.request.due_date = Some(due);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn add_owner(mut self, user_id: i64) -> Self {
        self.request.add_owners.push(user_id);
        self
    }

    pub fn remove_owner(mut self, user_id: i64) -> Self {
        self.request.rem_owners.push(user_id);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.request.color = Some(color.into());
        self
    }

    pub async fn send(self) -> Result<Goal> {
        require_id("goal_id", &self.goal_id)?;
        if let Some(name) = &self.request.name {
            require_text("name", Some(name.as_str()))?;
        }
        self.service.update_goal(&self.goal_id, &self.request).await
    }
}

/// Builder for `POST v2/goal/{goal_id}/key_result`.
pub struct CreateKeyResultBuilder<'a, S: ?Sized> {
    service: &'a S,
    goal_id: String,
    request: CreateKeyResultRequest,
}

impl<'a, S: GoalsService + ?Sized> CreateKeyResultBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn owner(mut self, user_id: i64) -> Self {
        self.request.owners.push(user_id);
        self
    }

    /// Start and target values.
    pub fn steps(mut self, start: f64, end: f64) -> Self {
        self.request.steps_start = start;
        self.request.steps_end = end;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.request.unit = Some(unit.into());
        self
    }

    /// Track completion of a task (automatic key results).
    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.request.task_ids.push(task_id.into());
        self
    }

    pub fn list(mut self, list_id: impl Into<String>) -> Self {
        self.request.list_ids.push(list_id.into());
        self
    }

    pub fn request(&self) -> &CreateKeyResultRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("goal_id", &self.goal_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        let tracks_items = !(self.request.task_ids.is_empty() && self.request.list_ids.is_empty());
        if tracks_items && self.request.result_type != KeyResultType::Automatic {
            return Err(ClickUpError::validation(
                "task_ids",
                "only automatic key results track tasks or lists",
            ));
        }
        Ok(())
    }

    pub async fn send(self) -> Result<KeyResult> {
        self.validate()?;
        self.service
            .create_key_result(&self.goal_id, &self.request)
            .await
    }
}

/// Builder for `PUT v2/key_result/{key_result_id}`.
pub struct EditKeyResultBuilder<'a, S: ?Sized> {
    service: &'a S,
    key_result_id: String,
    request: EditKeyResultRequest,
}

impl<'a, S: GoalsService + ?Sized> EditKeyResultBuilder<'a, S> {
    pub fn steps_current(mut self, value: f64) -> Self {
        self.request.steps_current = Some(value);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.request.note = Some(note.into());
        self
    }

    pub async fn send(self) -> Result<KeyResult> {
        require_id("key_result_id", &self.key_result_id)?;
        self.service
            .edit_key_result(&self.key_result_id, &self.request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{fixture, Recorder};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(String, CreateGoalRequest),
        Update(String, UpdateGoalRequest),
        AddKeyResult(String, CreateKeyResultRequest),
        EditKeyResult(String, EditKeyResultRequest),
    }

    #[derive(Default)]
    struct FakeGoals {
        calls: Recorder<Call>,
    }

    fn goal(id: &str) -> Goal {
        fixture(json!({"id": id, "name": "Ship v2"}))
    }

    fn key_result() -> KeyResult {
        fixture(json!({"id": "kr1", "name": "Docs", "type": "number"}))
    }

    #[async_trait]
    impl GoalsService for FakeGoals {
        async fn get_goals(&self, _team_id: &str, _include_completed: bool) -> Result<GoalsResponse> {
            Ok(GoalsResponse::default())
        }

        async fn get_goal(&self, goal_id: &str) -> Result<Goal> {
            Ok(goal(goal_id))
        }

        async fn create_goal(&self, team_id: &str, request: &CreateGoalRequest) -> Result<Goal> {
            self.calls.record(Call::Create(team_id.into(), request.clone()));
            Ok(goal("g1"))
        }

        async fn update_goal(&self, goal_id: &str, request: &UpdateGoalRequest) -> Result<Goal> {
            self.calls.record(Call::Update(goal_id.into(), request.clone()));
            Ok(goal(goal_id))
        }

        async fn delete_goal(&self, _goal_id: &str) -> Result<()> {
            Ok(())
        }

        async fn create_key_result(
            &self,
            goal_id: &str,
            request: &CreateKeyResultRequest,
        ) -> Result<KeyResult> {
            self.calls
                .record(Call::AddKeyResult(goal_id.into(), request.clone()));
            Ok(key_result())
        }

        async fn edit_key_result(
            &self,
            key_result_id: &str,
            request: &EditKeyResultRequest,
        ) -> Result<KeyResult> {
            self.calls
                .record(Call::EditKeyResult(key_result_id.into(), request.clone()));
            Ok(key_result())
        }

        async fn delete_key_result(&self, _key_result_id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_goal_fills_request() {
        let fake = FakeGoals::default();
        GoalsApi::new(&fake)
            .create("9001")
            .name("Ship v2")
            .due_date(due())
            .description("Everything in one release")
            .owner(1)
            .owner(2)
            .color("#32a852")
            .send()
            .await
            .unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![Call::Create(
                "9001".into(),
                CreateGoalRequest {
                    name: "Ship v2".into(),
                    due_date: Some(due()),
                    description: "Everything in one release".into(),
                    multiple_owners: true,
                    owners: vec![1, 2],
                    color: Some("#32a852".into()),
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_create_goal_requires_name_and_due_date() {
        let fake = FakeGoals::default();
        let api = GoalsApi::new(&fake);
        let err = api.create("9001").due_date(due()).send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "name", .. }));
        let err = api.create("9001").name("x").send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "due_date", .. }));
        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_key_results() {
        let fake = FakeGoals::default();
        let api = GoalsApi::new(&fake);
        api.add_key_result("g1", KeyResultType::Number)
            .name("Docs pages")
            .steps(0.0, 20.0)
            .unit("pages")
            .send()
            .await
            .unwrap();
        api.edit_key_result("kr1").steps_current(5.0).note("halfway-ish").send().await.unwrap();
        api.update("g1").remove_owner(2).send().await.unwrap();

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 3);
        let Call::AddKeyResult(goal_id, request) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(goal_id, "g1");
        assert_eq!(request.steps_end, 20.0);
        assert_eq!(request.unit.as_deref(), Some("pages"));
        assert!(matches!(&calls[2], Call::Update(_, r) if r.rem_owners == vec![2]));
    }

    #[tokio::test]
    async fn test_only_automatic_key_results_track_tasks() {
        let fake = FakeGoals::default();
        let err = GoalsApi::new(&fake)
            .add_key_result("g1", KeyResultType::Number)
            .name("x")
            .task("t1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(fake.calls.calls().is_empty());
    }
}
