//! Fluent view requests.

use futures::stream::BoxStream;

use super::failed_stream;
use crate::error::Result;
use crate::models::{CreateViewRequest, Task, UpdateViewRequest, View, ViewParent, ViewParentRef};
use crate::pagination::{paginate_pages, Page};
use crate::services::ViewsService;
use crate::validation::{require_id, require_text};

/// View requests, see [`ClickUpClient::views`](crate::ClickUpClient::views).
pub struct ViewsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: ViewsService + ?Sized> ViewsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Views attached to a workspace, space, folder or list.
    pub async fn list(&self, parent: &ViewParent) -> Result<Vec<View>> {
        self.service.get_views(parent).await
    }

    pub async fn get(&self, view_id: &str) -> Result<View> {
        self.service.get_view(view_id).await
    }

    /// Create a view, e.g. `create(ViewParent::List(id), "Board", "board")`.
    pub fn create(
        &self,
        parent: ViewParent,
        name: impl Into<String>,
        view_type: impl Into<String>,
    ) -> ViewBuilder<'a, S> {
        ViewBuilder {
            service: self.service,
            target: ViewTarget::Create(parent),
            name: name.into(),
            view_type: view_type.into(),
            settings: ViewSettings::default(),
        }
    }

    /// Replace a view's configuration. Name and type are always sent.
    pub fn update(
        &self,
        view_id: impl Into<String>,
        name: impl Into<String>,
        view_type: impl Into<String>,
    ) -> ViewBuilder<'a, S> {
        ViewBuilder {
            service: self.service,
            target: ViewTarget::Update {
                view_id: view_id.into(),
                parent: None,
            },
            name: name.into(),
            view_type: view_type.into(),
            settings: ViewSettings::default(),
        }
    }

    pub async fn delete(&self, view_id: &str) -> Result<()> {
        self.service.delete_view(view_id).await
    }

    /// Tasks visible in a view.
    pub fn tasks(&self, view_id: impl Into<String>) -> ViewTasksBuilder<'a, S> {
        ViewTasksBuilder {
            service: self.service,
            view_id: view_id.into(),
            page: 0,
        }
    }
}

enum ViewTarget {
    Create(ViewParent),
    Update {
        view_id: String,
        parent: Option<ViewParent>,
    },
}

#[derive(Default)]
struct ViewSettings {
    grouping: Option<serde_json::Value>,
    divide: Option<serde_json::Value>,
    sorting: Option<serde_json::Value>,
    filters: Option<serde_json::Value>,
    columns: Option<serde_json::Value>,
    team_sidebar: Option<serde_json::Value>,
    settings: Option<serde_json::Value>,
}

/// Builder for creating or updating a view.
pub struct ViewBuilder<'a, S: ?Sized> {
    service: &'a S,
    target: ViewTarget,
    name: String,
    view_type: String,
    settings: ViewSettings,
}

impl<'a, S: ViewsService + ?Sized> ViewBuilder<'a, S> {
    pub fn grouping(mut self, grouping: serde_json::Value) -> Self {
        self.settings.grouping = Some(grouping);
        self
    }

    pub fn divide(mut self, divide: serde_json::Value) -> Self {
        self.settings.divide = Some(divide);
        self
    }

    pub fn sorting(mut self, sorting: serde_json::Value) -> Self {
        self.settings.sorting = Some(sorting);
        self
    }

    pub fn filters(mut self, filters: serde_json::Value) -> Self {
        self.settings.filters = Some(filters);
        self
    }

    pub fn columns(mut self, columns: serde_json::Value) -> Self {
        self.settings.columns = Some(columns);
        self
    }

    /// Sidebar options; only meaningful when creating a view.
    pub fn team_sidebar(mut self, sidebar: serde_json::Value) -> Self {
        self.settings.team_sidebar = Some(sidebar);
        self
    }

    pub fn settings(mut self, settings: serde_json::Value) -> Self {
        self.settings.settings = Some(settings);
        self
    }

    /// Move the view to another parent (update only).
    pub fn move_to(mut self, new_parent: ViewParent) -> Self {
        if let ViewTarget::Update { parent, .. } = &mut self.target {
            *parent = Some(new_parent);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        match &self.target {
            ViewTarget::Create(parent) => require_id("parent_id", parent.id())?,
            ViewTarget::Update { view_id, parent } => {
                require_id("view_id", view_id)?;
                if let Some(parent) = parent {
                    require_id("parent_id", parent.id())?;
                }
            }
        }
        require_text("name", Some(self.name.as_str()))?;
        require_text("type", Some(self.view_type.as_str()))
    }

    pub async fn send(self) -> Result<View> {
        self.validate()?;
        let ViewSettings {
            grouping,
            divide,
            sorting,
            filters,
            columns,
            team_sidebar,
            settings,
        } = self.settings;
        match self.target {
            ViewTarget::Create(parent) => {
                let request = CreateViewRequest {
                    name: self.name,
                    view_type: self.view_type,
                    grouping,
                    divide,
                    sorting,
                    filters,
                    columns,
                    team_sidebar,
                    settings,
                };
                self.service.create_view(&parent, &request).await
            }
            ViewTarget::Update { view_id, parent } => {
                let request = UpdateViewRequest {
                    name: self.name,
                    view_type: self.view_type,
                    parent: parent.map(|p| ViewParentRef {
                        id: p.id().to_string(),
                        parent_type: p.type_code(),
                    }),
                    grouping,
                    divide,
                    sorting,
                    filters,
                    columns,
                    settings,
                };
                self.service.update_view(&view_id, &request).await
            }
        }
    }
}

/// Builder for `GET v2/view/{view_id}/task`.
pub struct ViewTasksBuilder<'a, S: ?Sized> {
    service: &'a S,
    view_id: String,
    page: u32,
}

impl<'a, S: ViewsService + ?Sized> ViewTasksBuilder<'a, S> {
    /// Page for [`send`](Self::send), 0-indexed.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub async fn send(self) -> Result<Page<Task>> {
        require_id("view_id", &self.view_id)?;
        self.service.get_view_tasks(&self.view_id, self.page).await
    }

    /// Every task in the view, starting from page 0.
    pub fn stream(self) -> BoxStream<'a, Result<Task>> {
        if let Err(err) = require_id("view_id", &self.view_id) {
            return failed_stream(err);
        }
        let Self {
            service, view_id, ..
        } = self;
        paginate_pages(move |page| {
            let view_id = view_id.clone();
            async move { service.get_view_tasks(&view_id, page).await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{fixture, task, Recorder};
    use crate::models::VIEW_TASK_PAGE_SIZE;
    use async_trait::async_trait;
    use futures::TryStreamExt;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(ViewParent, CreateViewRequest),
        Update(String, UpdateViewRequest),
        Tasks(String, u32),
    }

    #[derive(Default)]
    struct FakeViews {
        calls: Recorder<Call>,
    }

    fn view(id: &str) -> View {
        fixture(json!({"id": id, "name": "Board", "type": "board"}))
    }

    #[async_trait]
    impl ViewsService for FakeViews {
        async fn get_views(&self, _parent: &ViewParent) -> Result<Vec<View>> {
            unreachable!("not exercised")
        }

        async fn get_view(&self, view_id: &str) -> Result<View> {
            Ok(view(view_id))
        }

        async fn create_view(&self, parent: &ViewParent, request: &CreateViewRequest) -> Result<View> {
            self.calls.record(Call::Create(parent.clone(), request.clone()));
            Ok(view("v-new"))
        }

        async fn update_view(&self, view_id: &str, request: &UpdateViewRequest) -> Result<View> {
            self.calls.record(Call::Update(view_id.into(), request.clone()));
            Ok(view(view_id))
        }

        async fn delete_view(&self, _view_id: &str) -> Result<()> {
            Ok(())
        }

        async fn get_view_tasks(&self, view_id: &str, page: u32) -> Result<Page<Task>> {
            self.calls.record(Call::Tasks(view_id.into(), page));
            let count = if page == 0 { VIEW_TASK_PAGE_SIZE } else { 3 };
            let items = (0..count).map(|i| task(&format!("p{page}-{i}"))).collect();
            Ok(Page::new(items, page, None, VIEW_TASK_PAGE_SIZE))
        }
    }

    #[tokio::test]
    async fn test_create_view_with_grouping() {
        let fake = FakeViews::default();
        let grouping = json!({"field": "status", "dir": 1});
        ViewsApi::new(&fake)
            .create(ViewParent::List("l1".into()), "Board", "board")
            .grouping(grouping.clone())
            .send()
            .await
            .unwrap();
        let calls = fake.calls.calls();
        let Call::Create(parent, request) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(parent, &ViewParent::List("l1".into()));
        assert_eq!(request.view_type, "board");
        assert_eq!(request.grouping, Some(grouping));
    }

    #[tokio::test]
    async fn test_update_view_can_move() {
        let fake = FakeViews::default();
        ViewsApi::new(&fake)
            .update("v1", "Renamed", "list")
            .move_to(ViewParent::Space("s1".into()))
            .send()
            .await
            .unwrap();
        let calls = fake.calls.calls();
        let Call::Update(id, request) = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(id, "v1");
        assert_eq!(
            request.parent,
            Some(ViewParentRef {
                id: "s1".into(),
                parent_type: 4
            })
        );
    }

    #[tokio::test]
    async fn test_view_requires_type() {
        let fake = FakeViews::default();
        let err = ViewsApi::new(&fake)
            .create(ViewParent::Team("9001".into()), "Everything", " ")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_view_tasks_stream_stops_on_short_page() {
        let fake = FakeViews::default();
        let tasks: Vec<Task> = ViewsApi::new(&fake).tasks("v1").stream().try_collect().await.unwrap();
        assert_eq!(tasks.len(), VIEW_TASK_PAGE_SIZE + 3);
        assert_eq!(
            fake.calls.calls(),
            vec![Call::Tasks("v1".into(), 0), Call::Tasks("v1".into(), 1)]
        );
    }
}
