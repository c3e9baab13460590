//! Fluent task requests.

use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

use super::failed_stream;
use crate::error::{ClickUpError, Result};
use crate::models::{
    BulkTimeInStatus, CreateTaskRequest, CustomFieldFilter, GetTaskQuery, MergeTasksRequest,
    Priority, Task, TaskCustomFieldInput, TaskIdOptions, TaskOrderBy, TaskQuery,
    TaskTimeInStatus, UpdateTaskRequest,
};
use crate::pagination::{paginate_pages, Page};
use crate::services::TasksService;
use crate::validation::{require_exclusive, require_id, require_ordered, require_text};

/// Task requests, see [`ClickUpClient::tasks`](crate::ClickUpClient::tasks).
pub struct TasksApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: TasksService + ?Sized> TasksApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Fetch one task.
    pub fn get(&self, task_id: impl Into<String>) -> GetTaskBuilder<'a, S> {
        GetTaskBuilder {
            service: self.service,
            task_id: task_id.into(),
            query: GetTaskQuery::default(),
        }
    }

    /// Create a task in a list.
    pub fn create(&self, list_id: impl Into<String>) -> CreateTaskBuilder<'a, S> {
        CreateTaskBuilder {
            service: self.service,
            list_id: list_id.into(),
            request: CreateTaskRequest::default(),
        }
    }

    /// Change fields of a task.
    pub fn update(&self, task_id: impl Into<String>) -> UpdateTaskBuilder<'a, S> {
        UpdateTaskBuilder {
            service: self.service,
            task_id: task_id.into(),
            request: UpdateTaskRequest::default(),
            options: TaskIdOptions::default(),
        }
    }

    pub fn delete(&self, task_id: impl Into<String>) -> DeleteTaskBuilder<'a, S> {
        DeleteTaskBuilder {
            service: self.service,
            task_id: task_id.into(),
            options: TaskIdOptions::default(),
        }
    }

    /// Tasks of one list.
    pub fn list(&self, list_id: impl Into<String>) -> TaskListBuilder<'a, S> {
        TaskListBuilder::new(self.service, TaskSource::List(list_id.into()))
    }

    /// Tasks across a whole workspace.
    pub fn search(&self, team_id: impl Into<String>) -> TaskListBuilder<'a, S> {
        TaskListBuilder::new(self.service, TaskSource::Team(team_id.into()))
    }

    /// Merge other tasks into `target_id`.
    pub fn merge(&self, target_id: impl Into<String>) -> MergeTasksBuilder<'a, S> {
        MergeTasksBuilder {
            service: self.service,
            target_id: target_id.into(),
            request: MergeTasksRequest::default(),
        }
    }

    pub async fn time_in_status(&self, task_id: &str) -> Result<TaskTimeInStatus> {
        self.service
            .get_time_in_status(task_id, &TaskIdOptions::default())
            .await
    }

    pub async fn bulk_time_in_status(&self, task_ids: &[String]) -> Result<BulkTimeInStatus> {
        self.service
            .get_bulk_time_in_status(task_ids, &TaskIdOptions::default())
            .await
    }
}

/// Builder for `GET v2/task/{task_id}`.
pub struct GetTaskBuilder<'a, S: ?Sized> {
    service: &'a S,
    task_id: String,
    query: GetTaskQuery,
}

impl<'a, S: TasksService + ?Sized> GetTaskBuilder<'a, S> {
    pub fn include_subtasks(mut self, include: bool) -> Self {
        self.query.include_subtasks = Some(include);
        self
    }

    pub fn include_markdown_description(mut self, include: bool) -> Self {
        self.query.include_markdown_description = Some(include);
        self
    }

    /// Treat the id as a custom task id. Needs [`team_id`](Self::team_id).
    pub fn custom_task_ids(mut self, custom: bool) -> Self {
        self.query.id_options.custom_task_ids = custom;
        self
    }

    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.query.id_options.team_id = Some(team_id.into());
        self
    }

    pub fn query(&self) -> &GetTaskQuery {
        &self.query
    }

    pub fn validate(&self) -> Result<()> {
        require_id("task_id", &self.task_id)?;
        self.query.id_options.validate()
    }

    pub async fn send(self) -> Result<Task> {
        self.validate()?;
        self.service.get_task(&self.task_id, &self.query).await
    }
}

/// Builder for `POST v2/list/{list_id}/task`.
pub struct CreateTaskBuilder<'a, S: ?Sized> {
    service: &'a S,
    list_id: String,
    request: CreateTaskRequest,
}

impl<'a, S: TasksService + ?Sized> CreateTaskBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// Plain-text description. Cannot be combined with a markdown one.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn markdown_description(mut self, markdown: impl Into<String>) -> Self {
        self.request.markdown_description = Some(markdown.into());
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignees.push(user_id);
        self
    }

    pub fn assignees(mut self, user_ids: impl IntoIterator<Item = i64>) -> Self {
        self.request.assignees.extend(user_ids);
        self
    }

    pub fn group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.request.group_assignees.push(group_id.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.request.tags.push(tag.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.request.status = Some(status.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.request.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.request.due_date = Some(due);
        self
    }

    /// Whether the due date carries a time of day.
    pub fn due_date_time(mut self, with_time: bool) -> Self {
        self.request.due_date_time = Some(with_time);
        self
    }

    /// Estimate in milliseconds.
    pub fn time_estimate(mut self, millis: i64) -> Self {
        self.request.time_estimate = Some(millis);
        self
    }

    pub fn start_date(mut self, start: DateTime<Utc>) -> Self {
        self.request.start_date = Some(start);
        self
    }

    pub fn start_date_time(mut self, with_time: bool) -> Self {
        self.request.start_date_time = Some(with_time);
        self
    }

    pub fn points(mut self, points: f64) -> Self {
        self.request.points = Some(points);
        self
    }

    pub fn notify_all(mut self, notify: bool) -> Self {
        self.request.notify_all = Some(notify);
        self
    }

    /// Create the task as a subtask of `parent_id`.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.request.parent = Some(parent_id.into());
        self
    }

    pub fn links_to(mut self, task_id: impl Into<String>) -> Self {
        self.request.links_to = Some(task_id.into());
        self
    }

    pub fn check_required_custom_fields(mut self, check: bool) -> Self {
        self.request.check_required_custom_fields = Some(check);
        self
    }

    pub fn custom_field(mut self, field_id: impl Into<String>, value: serde_json::Value) -> Self {
        self.request.custom_fields.push(TaskCustomFieldInput {
            id: field_id.into(),
            value,
        });
        self
    }

    /// Custom task type id (`0` is a plain task).
    pub fn custom_item_id(mut self, item_id: i64) -> Self {
        self.request.custom_item_id = Some(item_id);
        self
    }

    pub fn request(&self) -> &CreateTaskRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("list_id", &self.list_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        require_exclusive(
            "description",
            self.request.description.is_some(),
            "markdown_description",
            self.request.markdown_description.is_some(),
        )
    }

    pub async fn send(self) -> Result<Task> {
        self.validate()?;
        self.service.create_task(&self.list_id, &self.request).await
    }
}

/// Builder for `PUT v2/task/{task_id}`.
pub struct UpdateTaskBuilder<'a, S: ?Sized> {
    service: &'a S,
    task_id: String,
    request: UpdateTaskRequest,
    options: TaskIdOptions,
}

impl<'a, S: TasksService + ?Sized> UpdateTaskBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn markdown_content(mut self, markdown: impl Into<String>) -> Self {
        self.request.markdown_content = Some(markdown.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.request.status = Some(status.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.request.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.request.due_date = Some(Some(due));
        self
    }

    /// Remove the due date.
    pub fn clear_due_date(mut self) -> Self {
        self.request.due_date = Some(None);
        self
    }

    pub fn due_date_time(mut self, with_time: bool) -> Self {
        self.request.due_date_time = Some(with_time);
        self
    }

    pub fn start_date(mut self, start: DateTime<Utc>) -> Self {
        self.request.start_date = Some(Some(start));
        self
    }

    /// Remove the start date.
    pub fn clear_start_date(mut self) -> Self {
        self.request.start_date = Some(None);
        self
    }

    pub fn start_date_time(mut self, with_time: bool) -> Self {
        self.request.start_date_time = Some(with_time);
        self
    }

    /// Move the task under another parent task.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.request.parent = Some(parent_id.into());
        self
    }

    pub fn time_estimate(mut self, millis: i64) -> Self {
        self.request.time_estimate = Some(millis);
        self
    }

    pub fn points(mut self, points: f64) -> Self {
        self.request.points = Some(points);
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.request.archived = Some(archived);
        self
    }

    pub fn add_assignee(mut self, user_id: i64) -> Self {
        self.request.assignees.add.push(user_id);
        self
    }

    pub fn remove_assignee(mut self, user_id: i64) -> Self {
        self.request.assignees.rem.push(user_id);
        self
    }

    pub fn add_group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.request.group_assignees.add.push(group_id.into());
        self
    }

    pub fn remove_group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.request.group_assignees.rem.push(group_id.into());
        self
    }

    pub fn add_watcher(mut self, user_id: i64) -> Self {
        self.request.watchers.add.push(user_id);
        self
    }

    pub fn remove_watcher(mut self, user_id: i64) -> Self {
        self.request.watchers.rem.push(user_id);
        self
    }

    pub fn custom_item_id(mut self, item_id: i64) -> Self {
        self.request.custom_item_id = Some(item_id);
        self
    }

    /// Address the task by custom id within `team_id`.
    pub fn custom_task_id(mut self, team_id: impl Into<String>) -> Self {
        self.options = TaskIdOptions::custom(team_id);
        self
    }

    pub fn request(&self) -> &UpdateTaskRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("task_id", &self.task_id)?;
        self.options.validate()?;
        if self.request.is_empty() {
            return Err(ClickUpError::validation(
                "request",
                "at least one field must be set",
            ));
        }
        if let Some(name) = &self.request.name {
            require_text("name", Some(name.as_str()))?;
        }
        require_exclusive(
            "description",
            self.request.description.is_some(),
            "markdown_content",
            self.request.markdown_content.is_some(),
        )?;
        let assignees = &self.request.assignees;
        if assignees.add.iter().any(|id| assignees.rem.contains(id)) {
            return Err(ClickUpError::validation(
                "assignees",
                "cannot add and remove the same user",
            ));
        }
        Ok(())
    }

    pub async fn send(self) -> Result<Task> {
        self.validate()?;
        self.service
            .update_task(&self.task_id, &self.request, &self.options)
            .await
    }
}

/// Builder for `DELETE v2/task/{task_id}`.
pub struct DeleteTaskBuilder<'a, S: ?Sized> {
    service: &'a S,
    task_id: String,
    options: TaskIdOptions,
}

impl<'a, S: TasksService + ?Sized> DeleteTaskBuilder<'a, S> {
    pub fn custom_task_id(mut self, team_id: impl Into<String>) -> Self {
        self.options = TaskIdOptions::custom(team_id);
        self
    }

    pub async fn send(self) -> Result<()> {
        require_id("task_id", &self.task_id)?;
        self.options.validate()?;
        self.service.delete_task(&self.task_id, &self.options).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TaskSource {
    List(String),
    Team(String),
}

/// Filtered task listing for a list or a whole workspace.
///
/// [`send`](Self::send) fetches a single page, [`stream`](Self::stream)
/// walks every page lazily.
pub struct TaskListBuilder<'a, S: ?Sized> {
    service: &'a S,
    source: TaskSource,
    query: TaskQuery,
    page: u32,
}

impl<'a, S: TasksService + ?Sized> TaskListBuilder<'a, S> {
    fn new(service: &'a S, source: TaskSource) -> Self {
        Self {
            service,
            source,
            query: TaskQuery::default(),
            page: 0,
        }
    }

    /// Page fetched by [`send`](Self::send), 0-indexed.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.query.archived = Some(archived);
        self
    }

    pub fn include_markdown_description(mut self, include: bool) -> Self {
        self.query.include_markdown_description = Some(include);
        self
    }

    pub fn order_by(mut self, order_by: TaskOrderBy) -> Self {
        self.query.order_by = Some(order_by);
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.query.reverse = Some(reverse);
        self
    }

    pub fn subtasks(mut self, subtasks: bool) -> Self {
        self.query.subtasks = Some(subtasks);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.query.statuses.push(status.into());
        self
    }

    pub fn include_closed(mut self, include: bool) -> Self {
        self.query.include_closed = Some(include);
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.query.assignees.push(user_id);
        self
    }

    pub fn watcher(mut self, user_id: i64) -> Self {
        self.query.watchers.push(user_id);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.query.tags.push(tag.into());
        self
    }

    pub fn due_after(mut self, date: DateTime<Utc>) -> Self {
        self.query.due_date_gt = Some(date);
        self
    }

    pub fn due_before(mut self, date: DateTime<Utc>) -> Self {
        self.query.due_date_lt = Some(date);
        self
    }

    pub fn created_after(mut self, date: DateTime<Utc>) -> Self {
        self.query.date_created_gt = Some(date);
        self
    }

    pub fn created_before(mut self, date: DateTime<Utc>) -> Self {
        self.query.date_created_lt = Some(date);
        self
    }

    pub fn updated_after(mut self, date: DateTime<Utc>) -> Self {
        self.query.date_updated_gt = Some(date);
        self
    }

    pub fn updated_before(mut self, date: DateTime<Utc>) -> Self {
        self.query.date_updated_lt = Some(date);
        self
    }

    pub fn done_after(mut self, date: DateTime<Utc>) -> Self {
        self.query.date_done_gt = Some(date);
        self
    }

    pub fn done_before(mut self, date: DateTime<Utc>) -> Self {
        self.query.date_done_lt = Some(date);
        self
    }

    pub fn custom_field(mut self, filter: CustomFieldFilter) -> Self {
        self.query.custom_fields.push(filter);
        self
    }

    pub fn custom_item(mut self, item_id: i64) -> Self {
        self.query.custom_items.push(item_id);
        self
    }

    /// Workspace searches only.
    pub fn space(mut self, space_id: impl Into<String>) -> Self {
        self.query.space_ids.push(space_id.into());
        self
    }

    /// Workspace searches only.
    pub fn folder(mut self, folder_id: impl Into<String>) -> Self {
        self.query.folder_ids.push(folder_id.into());
        self
    }

    /// Workspace searches only.
    pub fn in_list(mut self, list_id: impl Into<String>) -> Self {
        self.query.list_ids.push(list_id.into());
        self
    }

    /// Only subtasks of `parent_id`.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.query.parent = Some(parent_id.into());
        self
    }

    pub fn query(&self) -> &TaskQuery {
        &self.query
    }

    pub fn validate(&self) -> Result<()> {
        match &self.source {
            TaskSource::List(id) => {
                require_id("list_id", id)?;
                let q = &self.query;
                if !(q.space_ids.is_empty() && q.folder_ids.is_empty() && q.list_ids.is_empty()) {
                    return Err(ClickUpError::validation(
                        "location",
                        "space, folder and list filters only apply to workspace searches",
                    ));
                }
            }
            TaskSource::Team(id) => require_id("team_id", id)?,
        }
        require_ordered("due_before", self.query.due_date_gt, self.query.due_date_lt)?;
        require_ordered(
            "created_before",
            self.query.date_created_gt,
            self.query.date_created_lt,
        )?;
        require_ordered(
            "updated_before",
            self.query.date_updated_gt,
            self.query.date_updated_lt,
        )?;
        require_ordered("done_before", self.query.date_done_gt, self.query.date_done_lt)
    }

    /// Fetch the configured page.
    pub async fn send(self) -> Result<Page<Task>> {
        self.validate()?;
        fetch_page(self.service, &self.source, &self.query, self.page).await
    }

    /// Every matching task, one page request at a time.
    pub fn stream(self) -> BoxStream<'a, Result<Task>> {
        if let Err(err) = self.validate() {
            return failed_stream(err);
        }
        let Self {
            service,
            source,
            query,
            ..
        } = self;
        paginate_pages(move |page| {
            let source = source.clone();
            let query = query.clone();
            async move { fetch_page(service, &source, &query, page).await }
        })
    }
}

async fn fetch_page<S: TasksService + ?Sized>(
    service: &S,
    source: &TaskSource,
    query: &TaskQuery,
    page: u32,
) -> Result<Page<Task>> {
    match source {
        TaskSource::List(id) => service.get_tasks(id, query, page).await,
        TaskSource::Team(id) => service.get_filtered_team_tasks(id, query, page).await,
    }
}

/// Builder for `POST v2/task/{task_id}/merge`.
pub struct MergeTasksBuilder<'a, S: ?Sized> {
    service: &'a S,
    target_id: String,
    request: MergeTasksRequest,
}

impl<'a, S: TasksService + ?Sized> MergeTasksBuilder<'a, S> {
    pub fn source(mut self, task_id: impl Into<String>) -> Self {
        self.request.source_task_ids.push(task_id.into());
        self
    }

    pub fn sources<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.request
            .source_task_ids
            .extend(task_ids.into_iter().map(Into::into));
        self
    }

    pub fn request(&self) -> &MergeTasksRequest {
        &self.request
    }

    pub async fn send(self) -> Result<()> {
        require_id("task_id", &self.target_id)?;
        self.service.merge_tasks(&self.target_id, &self.request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{task, Recorder};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use futures::TryStreamExt;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String, GetTaskQuery),
        Create(String, CreateTaskRequest),
        Update(String, UpdateTaskRequest, TaskIdOptions),
        Delete(String, TaskIdOptions),
        List(String, TaskQuery, u32),
        Team(String, TaskQuery, u32),
        Merge(String, MergeTasksRequest),
    }

    #[derive(Default)]
    struct FakeTasks {
        calls: Recorder<Call>,
        pages: u32,
    }

    #[async_trait]
    impl TasksService for FakeTasks {
        async fn get_task(&self, task_id: &str, query: &GetTaskQuery) -> Result<Task> {
            self.calls.record(Call::Get(task_id.into(), query.clone()));
            Ok(task(task_id))
        }

        async fn get_tasks(&self, list_id: &str, query: &TaskQuery, page: u32) -> Result<Page<Task>> {
            self.calls.record(Call::List(list_id.into(), query.clone(), page));
            let items = vec![task(&format!("t{page}a")), task(&format!("t{page}b"))];
            Ok(Page::new(items, page, Some(page + 1 >= self.pages), 100))
        }

        async fn create_task(&self, list_id: &str, request: &CreateTaskRequest) -> Result<Task> {
            self.calls.record(Call::Create(list_id.into(), request.clone()));
            Ok(task("new"))
        }

        async fn update_task(
            &self,
            task_id: &str,
            request: &UpdateTaskRequest,
            options: &TaskIdOptions,
        ) -> Result<Task> {
            self.calls
                .record(Call::Update(task_id.into(), request.clone(), options.clone()));
            Ok(task(task_id))
        }

        async fn delete_task(&self, task_id: &str, options: &TaskIdOptions) -> Result<()> {
            self.calls.record(Call::Delete(task_id.into(), options.clone()));
            Ok(())
        }

        async fn get_filtered_team_tasks(
            &self,
            team_id: &str,
            query: &TaskQuery,
            page: u32,
        ) -> Result<Page<Task>> {
            self.calls.record(Call::Team(team_id.into(), query.clone(), page));
            Ok(Page::new(vec![task("w1")], page, Some(true), 100))
        }

        async fn get_time_in_status(
            &self,
            _task_id: &str,
            _options: &TaskIdOptions,
        ) -> Result<TaskTimeInStatus> {
            unreachable!("not exercised")
        }

        async fn get_bulk_time_in_status(
            &self,
            _task_ids: &[String],
            _options: &TaskIdOptions,
        ) -> Result<BulkTimeInStatus> {
            unreachable!("not exercised")
        }

        async fn merge_tasks(&self, task_id: &str, request: &MergeTasksRequest) -> Result<()> {
            self.calls.record(Call::Merge(task_id.into(), request.clone()));
            Ok(())
        }
    }

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_fills_request_and_calls_once() {
        let fake = FakeTasks::default();
        let task = TasksApi::new(&fake)
            .create("list-1")
            .name("Write release notes")
            .markdown_description("**soon**")
            .assignee(183)
            .tag("docs")
            .priority(Priority::High)
            .due_date(date(20))
            .due_date_time(false)
            .parent("parent-1")
            .send()
            .await
            .unwrap();
        assert_eq!(task.id, "new");

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 1);
        let Call::Create(list_id, request) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(list_id, "list-1");
        assert_eq!(request.name, "Write release notes");
        assert_eq!(request.markdown_description.as_deref(), Some("**soon**"));
        assert_eq!(request.assignees, vec![183]);
        assert_eq!(request.tags, vec!["docs"]);
        assert_eq!(request.priority, Some(Priority::High));
        assert_eq!(request.due_date, Some(date(20)));
        assert_eq!(request.due_date_time, Some(false));
        assert_eq!(request.parent.as_deref(), Some("parent-1"));
    }

    #[tokio::test]
    async fn test_create_validation_never_reaches_service() {
        let fake = FakeTasks::default();
        let api = TasksApi::new(&fake);

        let err = api.create("list-1").send().await.unwrap_err();
        assert!(err.is_validation());

        let err = api
            .create("list-1")
            .name("x")
            .description("plain")
            .markdown_description("md")
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "description", .. }));

        let err = api.create(" ").name("x").send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "list_id", .. }));

        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_assignee_delta_and_clear_due_date() {
        let fake = FakeTasks::default();
        TasksApi::new(&fake)
            .update("abc")
            .add_assignee(1)
            .remove_assignee(2)
            .clear_due_date()
            .custom_task_id("9001")
            .send()
            .await
            .unwrap();

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 1);
        let Call::Update(id, request, options) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(id, "abc");
        assert_eq!(request.assignees.add, vec![1]);
        assert_eq!(request.assignees.rem, vec![2]);
        assert_eq!(request.due_date, Some(None));
        assert_eq!(options, &TaskIdOptions::custom("9001"));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_and_conflicting_changes() {
        let fake = FakeTasks::default();
        let api = TasksApi::new(&fake);

        let err = api.update("abc").send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "request", .. }));

        let err = api
            .update("abc")
            .add_assignee(5)
            .remove_assignee(5)
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "assignees", .. }));

        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_custom_task_id_requires_team() {
        let fake = FakeTasks::default();
        let api = TasksApi::new(&fake);

        let err = api.get("DEV-12").custom_task_ids(true).send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "team_id", .. }));
        assert!(fake.calls.calls().is_empty());

        api.get("DEV-12")
            .custom_task_ids(true)
            .team_id("9001")
            .include_subtasks(true)
            .send()
            .await
            .unwrap();
        let calls = fake.calls.calls();
        assert_eq!(
            calls,
            vec![Call::Get(
                "DEV-12".into(),
                GetTaskQuery {
                    id_options: TaskIdOptions::custom("9001"),
                    include_subtasks: Some(true),
                    include_markdown_description: None,
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_list_send_fetches_one_page() {
        let fake = FakeTasks {
            pages: 3,
            ..Default::default()
        };
        let page = TasksApi::new(&fake)
            .list("list-1")
            .status("open")
            .assignee(7)
            .page(2)
            .send()
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert!(!page.has_more);

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 1);
        let Call::List(id, query, page) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(id, "list-1");
        assert_eq!(query.statuses, vec!["open"]);
        assert_eq!(query.assignees, vec![7]);
        assert_eq!(*page, 2);
    }

    #[tokio::test]
    async fn test_list_stream_walks_pages_lazily() {
        let fake = FakeTasks {
            pages: 3,
            ..Default::default()
        };
        let stream = TasksApi::new(&fake).list("list-1").stream();
        assert!(fake.calls.calls().is_empty());

        let ids: Vec<String> = stream.map_ok(|t| t.id).try_collect().await.unwrap();
        assert_eq!(ids, vec!["t0a", "t0b", "t1a", "t1b", "t2a", "t2b"]);
        assert_eq!(fake.calls.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_list_rejects_workspace_only_filters() {
        let fake = FakeTasks::default();
        let mut stream = TasksApi::new(&fake).list("list-1").space("s1").stream();
        let first = futures::StreamExt::next(&mut stream).await.unwrap();
        assert!(first.unwrap_err().is_validation());
        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_uses_team_listing() {
        let fake = FakeTasks::default();
        let tasks: Vec<Task> = TasksApi::new(&fake)
            .search("9001")
            .space("s1")
            .folder("f1")
            .due_after(date(1))
            .due_before(date(9))
            .stream()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(tasks.len(), 1);

        let calls = fake.calls.calls();
        let Call::Team(team, query, 0) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(team, "9001");
        assert_eq!(query.space_ids, vec!["s1"]);
        assert_eq!(query.folder_ids, vec!["f1"]);
    }

    #[tokio::test]
    async fn test_search_rejects_reversed_due_window() {
        let fake = FakeTasks::default();
        let err = TasksApi::new(&fake)
            .search("9001")
            .due_after(date(9))
            .due_before(date(1))
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "due_before", .. }));
    }

    #[tokio::test]
    async fn test_delete_and_merge() {
        let fake = FakeTasks::default();
        let api = TasksApi::new(&fake);
        api.delete("abc").send().await.unwrap();
        api.merge("target").source("a").sources(["b", "c"]).send().await.unwrap();

        assert_eq!(
            fake.calls.calls(),
            vec![
                Call::Delete("abc".into(), TaskIdOptions::default()),
                Call::Merge(
                    "target".into(),
                    MergeTasksRequest {
                        source_task_ids: vec!["a".into(), "b".into(), "c".into()],
                    }
                ),
            ]
        );
    }
}
