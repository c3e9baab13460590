//! Time tracking operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::{ClickUpError, Result};
use crate::models::{
    CreateTimeEntryRequest, Empty, StartTimerRequest, TaskIdOptions, TimeEntriesQuery,
    TimeEntriesResponse, TimeEntry, TimeEntryResponse, UpdateTimeEntryRequest,
};
use crate::query::QueryPairs;
use crate::validation::require_id;

/// Time tracking endpoints.
#[async_trait]
pub trait TimeTrackingService: Send + Sync {
    /// `GET v2/team/{team_id}/time_entries`
    async fn get_time_entries(
        &self,
        team_id: &str,
        query: &TimeEntriesQuery,
    ) -> Result<Vec<TimeEntry>>;

    /// `GET v2/team/{team_id}/time_entries/{timer_id}`
    async fn get_time_entry(&self, team_id: &str, timer_id: &str) -> Result<TimeEntry>;

    /// `POST v2/team/{team_id}/time_entries`
    async fn create_time_entry(
        &self,
        team_id: &str,
        request: &CreateTimeEntryRequest,
        options: &TaskIdOptions,
    ) -> Result<TimeEntry>;

    /// `PUT v2/team/{team_id}/time_entries/{timer_id}`
    async fn update_time_entry(
        &self,
        team_id: &str,
        timer_id: &str,
        request: &UpdateTimeEntryRequest,
    ) -> Result<()>;

    /// `DELETE v2/team/{team_id}/time_entries/{timer_id}`
    async fn delete_time_entry(&self, team_id: &str, timer_id: &str) -> Result<()>;

    /// `POST v2/team/{team_id}/time_entries/start`
    async fn start_timer(&self, team_id: &str, request: &StartTimerRequest) -> Result<TimeEntry>;

    /// `POST v2/team/{team_id}/time_entries/stop`
    async fn stop_timer(&self, team_id: &str) -> Result<TimeEntry>;

    /// The running timer, if any. `GET v2/team/{team_id}/time_entries/current`
    async fn get_running_time_entry(
        &self,
        team_id: &str,
        assignee: Option<i64>,
    ) -> Result<Option<TimeEntry>>;
}

fn entry_path(team_id: &str, timer_id: &str) -> Result<String> {
    require_id("team_id", team_id)?;
    require_id("timer_id", timer_id)?;
    Ok(format!(
        "v2/team/{}/time_entries/{}",
        segment(team_id),
        segment(timer_id)
    ))
}

fn required_entry(response: TimeEntryResponse, what: &str) -> Result<TimeEntry> {
    response.data.ok_or_else(|| ClickUpError::NotFound {
        message: format!("{what} returned no time entry"),
        error_code: None,
    })
}

#[async_trait]
impl TimeTrackingService for ClickUpClient {
    #[tracing::instrument(skip(self, query))]
    async fn get_time_entries(
        &self,
        team_id: &str,
        query: &TimeEntriesQuery,
    ) -> Result<Vec<TimeEntry>> {
        require_id("team_id", team_id)?;
        query.validate()?;
        let path = format!("v2/team/{}/time_entries", segment(team_id));
        let response: TimeEntriesResponse = self.get_json_with_query(&path, query).await?;
        Ok(response.data)
    }

    #[tracing::instrument(skip(self))]
    async fn get_time_entry(&self, team_id: &str, timer_id: &str) -> Result<TimeEntry> {
        let path = entry_path(team_id, timer_id)?;
        let response: TimeEntryResponse = self.get_json(&path).await?;
        required_entry(response, "time entry lookup")
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_time_entry(
        &self,
        team_id: &str,
        request: &CreateTimeEntryRequest,
        options: &TaskIdOptions,
    ) -> Result<TimeEntry> {
        require_id("team_id", team_id)?;
        options.validate()?;
        request.validate()?;
        let path = format!("v2/team/{}/time_entries", segment(team_id));
        let response: TimeEntryResponse =
            ClickUpClient::decode(self.post_with_query(&path, options, request).await?).await?;
        required_entry(response, "time entry creation")
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_time_entry(
        &self,
        team_id: &str,
        timer_id: &str,
        request: &UpdateTimeEntryRequest,
    ) -> Result<()> {
        let path = entry_path(team_id, timer_id)?;
        crate::validation::require_ordered("end", request.start, request.end)?;
        self.put(&path, request).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_time_entry(&self, team_id: &str, timer_id: &str) -> Result<()> {
        let path = entry_path(team_id, timer_id)?;
        self.delete(&path).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, request))]
    async fn start_timer(&self, team_id: &str, request: &StartTimerRequest) -> Result<TimeEntry> {
        require_id("team_id", team_id)?;
        let path = format!("v2/team/{}/time_entries/start", segment(team_id));
        let response: TimeEntryResponse = self.post_json(&path, request).await?;
        required_entry(response, "timer start")
    }

    #[tracing::instrument(skip(self))]
    async fn stop_timer(&self, team_id: &str) -> Result<TimeEntry> {
        require_id("team_id", team_id)?;
        let path = format!("v2/team/{}/time_entries/stop", segment(team_id));
        let response: TimeEntryResponse = self.post_json(&path, &Empty {}).await?;
        required_entry(response, "timer stop")
    }

    #[tracing::instrument(skip(self))]
    async fn get_running_time_entry(
        &self,
        team_id: &str,
        assignee: Option<i64>,
    ) -> Result<Option<TimeEntry>> {
        require_id("team_id", team_id)?;
        let mut query = QueryPairs::new();
        query.push_opt("assignee", assignee);
        let path = format!("v2/team/{}/time_entries/current", segment(team_id));
        let response: TimeEntryResponse = self.get_json_with_query(&path, &query).await?;
        Ok(response.data)
    }
}
