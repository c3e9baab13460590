//! Fluent time tracking requests.

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::models::{
    CreateTimeEntryRequest, StartTimerRequest, TagAction, TagName, TaskIdOptions,
    TimeEntriesQuery, TimeEntry, UpdateTimeEntryRequest,
};
use crate::services::TimeTrackingService;
use crate::validation::{require_id, require_ordered, require_positive};

/// Time tracking requests, see
/// [`ClickUpClient::time_tracking`](crate::ClickUpClient::time_tracking).
pub struct TimeTrackingApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: TimeTrackingService + ?Sized> TimeTrackingApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Entries in a workspace, filtered. Without a date range the API
    /// returns the last 30 days for the authenticated user.
    pub fn entries(&self, team_id: impl Into<String>) -> TimeEntriesBuilder<'a, S> {
        TimeEntriesBuilder {
            service: self.service,
            team_id: team_id.into(),
            query: TimeEntriesQuery::default(),
        }
    }

    pub async fn get(&self, team_id: &str, timer_id: &str) -> Result<TimeEntry> {
        self.service.get_time_entry(team_id, timer_id).await
    }

    /// Record a finished entry starting at `start`. Set either
    /// [`duration`](CreateTimeEntryBuilder::duration) or
    /// [`end`](CreateTimeEntryBuilder::end).
    pub fn create(
        &self,
        team_id: impl Into<String>,
        start: DateTime<Utc>,
    ) -> CreateTimeEntryBuilder<'a, S> {
        CreateTimeEntryBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: CreateTimeEntryRequest {
                start: Some(start),
                ..Default::default()
            },
            options: TaskIdOptions::default(),
        }
    }

    pub fn update(
        &self,
        team_id: impl Into<String>,
        timer_id: impl Into<String>,
    ) -> UpdateTimeEntryBuilder<'a, S> {
        UpdateTimeEntryBuilder {
            service: self.service,
            team_id: team_id.into(),
            timer_id: timer_id.into(),
            request: UpdateTimeEntryRequest::default(),
        }
    }

    pub async fn delete(&self, team_id: &str, timer_id: &str) -> Result<()> {
        self.service.delete_time_entry(team_id, timer_id).await
    }

    /// Start a timer for the authenticated user.
    pub fn start(&self, team_id: impl Into<String>) -> StartTimerBuilder<'a, S> {
        StartTimerBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: StartTimerRequest::default(),
        }
    }

    pub async fn stop(&self, team_id: &str) -> Result<TimeEntry> {
        self.service.stop_timer(team_id).await
    }

    /// The running timer of `assignee` (or the caller), if one is running.
    pub async fn running(&self, team_id: &str, assignee: Option<i64>) -> Result<Option<TimeEntry>> {
        self.service.get_running_time_entry(team_id, assignee).await
    }
}

/// Builder for `GET v2/team/{team_id}/time_entries`.
pub struct TimeEntriesBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    query: TimeEntriesQuery,
}

impl<'a, S: TimeTrackingService + ?Sized> TimeEntriesBuilder<'a, S> {
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.query.start_date = Some(start);
        self.query.end_date = Some(end);
        self
    }

    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.query.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.query.end_date = Some(end);
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.query.assignees.push(user_id);
        self
    }

    pub fn include_task_tags(mut self) -> Self {
        self.query.include_task_tags = Some(true);
        self
    }

    pub fn include_location_names(mut self) -> Self {
        self.query.include_location_names = Some(true);
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.query.is_billable = Some(billable);
        self
    }

    pub fn in_space(mut self, space_id: impl Into<String>) -> Self {
        self.query.space_id = Some(space_id.into());
        self
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.query.folder_id = Some(folder_id.into());
        self
    }

    pub fn in_list(mut self, list_id: impl Into<String>) -> Self {
        self.query.list_id = Some(list_id.into());
        self
    }

    pub fn for_task(mut self, task_id: impl Into<String>) -> Self {
        self.query.task_id = Some(task_id.into());
        self
    }

    /// The task filter is a custom task id.
    pub fn custom_task_ids(mut self) -> Self {
        self.query.id_options = TaskIdOptions::custom(self.team_id.clone());
        self
    }

    pub fn query(&self) -> &TimeEntriesQuery {
        &self.query
    }

    pub fn validate(&self) -> Result<()> {
        require_id("team_id", &self.team_id)?;
        self.query.validate()
    }

    pub async fn send(self) -> Result<Vec<TimeEntry>> {
        self.validate()?;
        self.service.get_time_entries(&self.team_id, &self.query).await
    }
}

/// Builder for `POST v2/team/{team_id}/time_entries`.
pub struct CreateTimeEntryBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: CreateTimeEntryRequest,
    options: TaskIdOptions,
}

impl<'a, S: TimeTrackingService + ?Sized> CreateTimeEntryBuilder<'a, S> {
    pub fn duration(mut self, duration: Duration) -> Self {
        self.request.duration = Some(duration.num_milliseconds());
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.request.stop = Some(end);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.request.tags.push(TagName { name: name.into() });
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.request.billable = Some(billable);
        self
    }

    /// Log time for another user (workspace owners and admins only).
    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(user_id);
        self
    }

    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.request.tid = Some(task_id.into());
        self
    }

    /// The task id is a custom task id.
    pub fn custom_task_id(mut self) -> Self {
        self.options = TaskIdOptions::custom(self.team_id.clone());
        self
    }

    pub fn request(&self) -> &CreateTimeEntryRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("team_id", &self.team_id)?;
        self.options.validate()?;
        self.request.validate()
    }

    pub async fn send(self) -> Result<TimeEntry> {
        self.validate()?;
        self.service
            .create_time_entry(&self.team_id, &self.request, &self.options)
            .await
    }
}

/// Builder for `PUT v2/team/{team_id}/time_entries/{timer_id}`.
pub struct UpdateTimeEntryBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    timer_id: String,
    request: UpdateTimeEntryRequest,
}

impl<'a, S: TimeTrackingService + ?Sized> UpdateTimeEntryBuilder<'a, S> {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.request.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.request.end = Some(end);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.request.duration = Some(duration.num_milliseconds());
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.request.billable = Some(billable);
        self
    }

    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.request.tid = Some(task_id.into());
        self
    }

    /// Add tags to the entry.
    pub fn add_tags<I, T>(self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags(TagAction::Add, names)
    }

    pub fn remove_tags<I, T>(self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags(TagAction::Remove, names)
    }

    fn tags<I, T>(mut self, action: TagAction, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.request.tag_action = Some(action);
        self.request.tags = names
            .into_iter()
            .map(|name| TagName { name: name.into() })
            .collect();
        self
    }

    pub fn request(&self) -> &UpdateTimeEntryRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("team_id", &self.team_id)?;
        require_id("timer_id", &self.timer_id)?;
        if let Some(duration) = self.request.duration {
            require_positive("duration", duration)?;
        }
        require_ordered("end", self.request.start, self.request.end)
    }

    pub async fn send(self) -> Result<()> {
        self.validate()?;
        self.service
            .update_time_entry(&self.team_id, &self.timer_id, &self.request)
            .await
    }
}

/// Builder for `POST v2/team/{team_id}/time_entries/start`.
pub struct StartTimerBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: StartTimerRequest,
}

impl<'a, S: TimeTrackingService + ?Sized> StartTimerBuilder<'a, S> {
    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.request.tid = Some(task_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.request.tags.push(TagName { name: name.into() });
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.request.billable = Some(billable);
        self
    }

    pub async fn send(self) -> Result<TimeEntry> {
        require_id("team_id", &self.team_id)?;
        self.service.start_timer(&self.team_id, &self.request).await
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
        List(String, TimeEntriesQuery),
        Create(String, CreateTimeEntryRequest, TaskIdOptions),
        Update(String, String, UpdateTimeEntryRequest),
        Start(String, StartTimerRequest),
        Stop(String),
    }

    #[derive(Default)]
    struct FakeTimeTracking {
        calls: Recorder<Call>,
    }

    fn entry(id: &str) -> TimeEntry {
        fixture(json!({"id": id, "user": {"id": 1, "username": "Ada"}, "start": "1704099600000"}))
    }

    #[async_trait]
    impl TimeTrackingService for FakeTimeTracking {
        async fn get_time_entries(
            &self,
            team_id: &str,
            query: &TimeEntriesQuery,
        ) -> Result<Vec<TimeEntry>> {
            self.calls.record(Call::List(team_id.into(), query.clone()));
            Ok(vec![entry("1")])
        }

        async fn get_time_entry(&self, _team_id: &str, timer_id: &str) -> Result<TimeEntry> {
            Ok(entry(timer_id))
        }

        async fn create_time_entry(
            &self,
            team_id: &str,
            request: &CreateTimeEntryRequest,
            options: &TaskIdOptions,
        ) -> Result<TimeEntry> {
            self.calls
                .record(Call::Create(team_id.into(), request.clone(), options.clone()));
            Ok(entry("2"))
        }

        async fn update_time_entry(
            &self,
            team_id: &str,
            timer_id: &str,
            request: &UpdateTimeEntryRequest,
        ) -> Result<()> {
            self.calls
                .record(Call::Update(team_id.into(), timer_id.into(), request.clone()));
            Ok(())
        }

        async fn delete_time_entry(&self, _team_id: &str, _timer_id: &str) -> Result<()> {
            unreachable!("not exercised")
        }

        async fn start_timer(&self, team_id: &str, request: &StartTimerRequest) -> Result<TimeEntry> {
            self.calls.record(Call::Start(team_id.into(), request.clone()));
            Ok(entry("3"))
        }

        async fn stop_timer(&self, team_id: &str) -> Result<TimeEntry> {
            self.calls.record(Call::Stop(team_id.into()));
            Ok(entry("3"))
        }

        async fn get_running_time_entry(
            &self,
            _team_id: &str,
            _assignee: Option<i64>,
        ) -> Result<Option<TimeEntry>> {
            Ok(None)
        }
    }

    fn nine() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_with_duration() {
        let fake = FakeTimeTracking::default();
        TimeTrackingApi::new(&fake)
            .create("9001", nine())
            .duration(Duration::minutes(90))
            .task("abc")
            .tag("meetings")
            .send()
            .await
            .unwrap();
        let calls = fake.calls.calls();
        let Call::Create(team, request, options) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(team, "9001");
        assert_eq!(request.duration, Some(5_400_000));
        assert_eq!(request.tid.as_deref(), Some("abc"));
        assert!(request.stop.is_none());
        assert_eq!(options, &TaskIdOptions::default());
    }

    #[tokio::test]
    async fn test_create_forwards_custom_task_id() {
        let fake = FakeTimeTracking::default();
        TimeTrackingApi::new(&fake)
            .create("9001", nine())
            .duration(Duration::minutes(15))
            .task("DEV-42")
            .custom_task_id()
            .send()
            .await
            .unwrap();
        let calls = fake.calls.calls();
        let Call::Create(_, request, options) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(request.tid.as_deref(), Some("DEV-42"));
        assert_eq!(options, &TaskIdOptions::custom("9001"));
    }

    #[tokio::test]
    async fn test_create_rejects_duration_and_end_together() {
        let fake = FakeTimeTracking::default();
        let api = TimeTrackingApi::new(&fake);
        let both = api
            .create("9001", nine())
            .duration(Duration::minutes(5))
            .end(nine() + Duration::hours(1))
            .send()
            .await;
        assert!(both.unwrap_err().is_validation());
        let neither = api.create("9001", nine()).send().await;
        assert!(neither.unwrap_err().is_validation());
        let backwards = api.create("9001", nine()).end(nine() - Duration::hours(1)).send().await;
        assert!(backwards.unwrap_err().is_validation());
        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_entries_filters() {
        let fake = FakeTimeTracking::default();
        let end = nine() + Duration::days(7);
        TimeTrackingApi::new(&fake)
            .entries("9001")
            .between(nine(), end)
            .assignee(1)
            .assignee(2)
            .in_list("l1")
            .send()
            .await
            .unwrap();
        let expected = TimeEntriesQuery {
            start_date: Some(nine()),
            end_date: Some(end),
            assignees: vec![1, 2],
            list_id: Some("l1".into()),
            ..Default::default()
        };
        assert_eq!(fake.calls.calls(), vec![Call::List("9001".into(), expected)]);
    }

    #[tokio::test]
    async fn test_entries_reject_two_locations() {
        let fake = FakeTimeTracking::default();
        let err = TimeTrackingApi::new(&fake)
            .entries("9001")
            .in_space("s1")
            .for_task("t1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_update_tags_and_times() {
        let fake = FakeTimeTracking::default();
        let api = TimeTrackingApi::new(&fake);
        api.update("9001", "42")
            .start(nine())
            .end(nine() + Duration::hours(2))
            .add_tags(["billable", "client"])
            .send()
            .await
            .unwrap();
        let err = api
            .update("9001", "42")
            .start(nine())
            .end(nine())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 1);
        let Call::Update(_, timer, request) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(timer, "42");
        assert_eq!(request.tag_action, Some(TagAction::Add));
        assert_eq!(request.tags.len(), 2);
    }

    #[tokio::test]
    async fn test_start_and_stop_timer() {
        let fake = FakeTimeTracking::default();
        let api = TimeTrackingApi::new(&fake);
        api.start("9001").task("abc").description("pairing").send().await.unwrap();
        api.stop("9001").await.unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![
                Call::Start(
                    "9001".into(),
                    StartTimerRequest {
                        description: Some("pairing".into()),
                        tid: Some("abc".into()),
                        ..Default::default()
                    }
                ),
                Call::Stop("9001".into()),
            ]
        );
    }
}
