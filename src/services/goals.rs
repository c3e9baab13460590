//! Goals and key results.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CreateGoalRequest, CreateKeyResultRequest, EditKeyResultRequest, Goal, GoalResponse,
    GoalsResponse, KeyResult, KeyResultResponse, UpdateGoalRequest,
};
use crate::query::QueryPairs;
use crate::validation::{require_id, require_some, require_text};

/// Goal endpoints.
#[async_trait]
pub trait GoalsService: Send + Sync {
    /// Goals and goal folders. `GET v2/team/{team_id}/goal`
    async fn get_goals(&self, team_id: &str, include_completed: bool) -> Result<GoalsResponse>;

    /// `GET v2/goal/{goal_id}`
    async fn get_goal(&self, goal_id: &str) -> Result<Goal>;

    /// `POST v2/team/{team_id}/goal`
    async fn create_goal(&self, team_id: &str, request: &CreateGoalRequest) -> Result<Goal>;

    /// `PUT v2/goal/{goal_id}`
    async fn update_goal(&self, goal_id: &str, request: &UpdateGoalRequest) -> Result<Goal>;

    /// `DELETE v2/goal/{goal_id}`
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;

    /// `POST v2/goal/{goal_id}/key_result`
    async fn create_key_result(
        &self,
        goal_id: &str,
        request: &CreateKeyResultRequest,
    ) -> Result<KeyResult>;

    /// `PUT v2/key_result/{key_result_id}`
    async fn edit_key_result(
        &self,
        key_result_id: &str,
        request: &EditKeyResultRequest,
    ) -> Result<KeyResult>;

    /// `DELETE v2/key_result/{key_result_id}`
    async fn delete_key_result(&self, key_result_id: &str) -> Result<()>;
}

#[async_trait]
impl GoalsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_goals(&self, team_id: &str, include_completed: bool) -> Result<GoalsResponse> {
        require_id("team_id", team_id)?;
        let mut query = QueryPairs::new();
        query.push("include_completed", include_completed);
        self.get_json_with_query(&format!("v2/team/{}/goal", segment(team_id)), &query)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        require_id("goal_id", goal_id)?;
        let response: GoalResponse = self
            .get_json(&format!("v2/goal/{}", segment(goal_id)))
            .await?;
        Ok(response.goal)
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_goal(&self, team_id: &str, request: &CreateGoalRequest) -> Result<Goal> {
        require_id("team_id", team_id)?;
        require_text("name", Some(request.name.as_str()))?;
        require_some("due_date", request.due_date.as_ref())?;
        let response: GoalResponse = self
            .post_json(&format!("v2/team/{}/goal", segment(team_id)), request)
            .await?;
        Ok(response.goal)
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_goal(&self, goal_id: &str, request: &UpdateGoalRequest) -> Result<Goal> {
        require_id("goal_id", goal_id)?;
        let response: GoalResponse = self
            .put_json(&format!("v2/goal/{}", segment(goal_id)), request)
            .await?;
        Ok(response.goal)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        require_id("goal_id", goal_id)?;
        self.delete(&format!("v2/goal/{}", segment(goal_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_key_result(
        &self,
        goal_id: &str,
        request: &CreateKeyResultRequest,
    ) -> Result<KeyResult> {
        require_id("goal_id", goal_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let response: KeyResultResponse = self
            .post_json(&format!("v2/goal/{}/key_result", segment(goal_id)), request)
            .await?;
        Ok(response.key_result)
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_key_result(
        &self,
        key_result_id: &str,
        request: &EditKeyResultRequest,
    ) -> Result<KeyResult> {
        require_id("key_result_id", key_result_id)?;
        let response: KeyResultResponse = self
            .put_json(&format!("v2/key_result/{}", segment(key_result_id)), request)
            .await?;
        Ok(response.key_result)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_key_result(&self, key_result_id: &str) -> Result<()> {
        require_id("key_result_id", key_result_id)?;
        self.delete(&format!("v2/key_result/{}", segment(key_result_id)))
            .await?;
        Ok(())
    }
}
