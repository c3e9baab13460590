//! Fluent request builders.
//!
//! Every resource has an `XApi` handle borrowed from a service (normally
//! [`ClickUpClient`]). Operations with optional parameters return a
//! builder; `send()` validates locally and then makes exactly one service
//! call. Paginated endpoints also offer `stream()`, which fetches pages
//! lazily as the stream is polled.
//!
//! ```no_run
//! # async fn run(client: clickapi::ClickUpClient) -> clickapi::Result<()> {
//! use futures::TryStreamExt;
//!
//! let task = client
//!     .tasks()
//!     .create("901")
//!     .name("Write release notes")
//!     .tag("docs")
//!     .send()
//!     .await?;
//!
//! let mut open = client.tasks().list("901").status("open").stream();
//! while let Some(task) = open.try_next().await? {
//!     println!("{} {}", task.id, task.name);
//! }
//! # let _ = task;
//! # Ok(())
//! # }
//! ```

use futures::stream::{self, BoxStream, StreamExt};

use crate::client::ClickUpClient;
use crate::error::{ClickUpError, Result};

mod attachments;
mod authorization;
mod chat;
mod checklists;
mod comments;
mod custom_fields;
mod docs;
mod folders;
mod goals;
mod lists;
mod members;
mod spaces;
mod tags;
mod task_relationships;
mod tasks;
mod templates;
mod time_tracking;
mod user_groups;
mod users;
mod views;
mod webhooks;
mod workspaces;

pub use attachments::{AttachmentsApi, UploadAttachmentBuilder};
pub use authorization::AuthorizationApi;
pub use chat::{
    ChannelsBuilder, ChatApi, CreateChannelBuilder, EditMessageBuilder, MessagesBuilder,
    PostMessageBuilder,
};
pub use checklists::{
    ChecklistsApi, CreateChecklistItemBuilder, EditChecklistBuilder, EditChecklistItemBuilder,
};
pub use comments::{CommentThread, CommentsApi, CreateCommentBuilder, UpdateCommentBuilder};
pub use custom_fields::{CustomFieldsApi, SetFieldValueBuilder};
pub use docs::{CreateDocBuilder, CreatePageBuilder, DocsApi, EditPageBuilder, SearchDocsBuilder};
pub use folders::{FolderBuilder, FolderFromTemplateBuilder, FoldersApi};
pub use goals::{
    CreateGoalBuilder, CreateKeyResultBuilder, EditKeyResultBuilder, GoalsApi, UpdateGoalBuilder,
};
pub use lists::{CreateListBuilder, ListsApi, UpdateListBuilder};
pub use members::MembersApi;
pub use spaces::{CreateSpaceBuilder, SpacesApi, UpdateSpaceBuilder};
pub use tags::{SpaceTagBuilder, TagsApi};
pub use task_relationships::{DependencyBuilder, TaskRelationshipsApi};
pub use tasks::{
    CreateTaskBuilder, DeleteTaskBuilder, GetTaskBuilder, MergeTasksBuilder, TaskListBuilder,
    TasksApi, UpdateTaskBuilder,
};
pub use templates::{ListFromTemplateBuilder, TemplatesApi};
pub use time_tracking::{
    CreateTimeEntryBuilder, StartTimerBuilder, TimeEntriesBuilder, TimeTrackingApi,
    UpdateTimeEntryBuilder,
};
pub use user_groups::{CreateUserGroupBuilder, UpdateUserGroupBuilder, UserGroupsApi};
pub use users::{
    EditGuestBuilder, EditUserBuilder, GuestItem, GuestsApi, InviteGuestBuilder,
    InviteUserBuilder, UsersApi,
};
pub use views::{ViewBuilder, ViewTasksBuilder, ViewsApi};
pub use webhooks::{CreateWebhookBuilder, UpdateWebhookBuilder, WebhooksApi};
pub use workspaces::WorkspacesApi;

/// A stream that yields `err` once and ends.
pub(crate) fn failed_stream<'a, T: Send + 'a>(err: ClickUpError) -> BoxStream<'a, Result<T>> {
    stream::once(async move { Err(err) }).boxed()
}

impl ClickUpClient {
    pub fn tasks(&self) -> TasksApi<'_, Self> {
        TasksApi::new(self)
    }

    pub fn lists(&self) -> ListsApi<'_, Self> {
        ListsApi::new(self)
    }

    pub fn spaces(&self) -> SpacesApi<'_, Self> {
        SpacesApi::new(self)
    }

    pub fn folders(&self) -> FoldersApi<'_, Self> {
        FoldersApi::new(self)
    }

    /// Dependencies and links between tasks.
    pub fn task_relationships(&self) -> TaskRelationshipsApi<'_, Self> {
        TaskRelationshipsApi::new(self)
    }

    pub fn attachments(&self) -> AttachmentsApi<'_, Self> {
        AttachmentsApi::new(self)
    }

    pub fn checklists(&self) -> ChecklistsApi<'_, Self> {
        ChecklistsApi::new(self)
    }

    pub fn comments(&self) -> CommentsApi<'_, Self> {
        CommentsApi::new(self)
    }

    pub fn custom_fields(&self) -> CustomFieldsApi<'_, Self> {
        CustomFieldsApi::new(self)
    }

    pub fn tags(&self) -> TagsApi<'_, Self> {
        TagsApi::new(self)
    }

    pub fn goals(&self) -> GoalsApi<'_, Self> {
        GoalsApi::new(self)
    }

    pub fn views(&self) -> ViewsApi<'_, Self> {
        ViewsApi::new(self)
    }

    pub fn time_tracking(&self) -> TimeTrackingApi<'_, Self> {
        TimeTrackingApi::new(self)
    }

    pub fn webhooks(&self) -> WebhooksApi<'_, Self> {
        WebhooksApi::new(self)
    }

    pub fn members(&self) -> MembersApi<'_, Self> {
        MembersApi::new(self)
    }

    /// Workspace user management (Enterprise).
    pub fn users(&self) -> UsersApi<'_, Self> {
        UsersApi::new(self)
    }

    /// Guest management (Enterprise).
    pub fn guests(&self) -> GuestsApi<'_, Self> {
        GuestsApi::new(self)
    }

    pub fn user_groups(&self) -> UserGroupsApi<'_, Self> {
        UserGroupsApi::new(self)
    }

    pub fn templates(&self) -> TemplatesApi<'_, Self> {
        TemplatesApi::new(self)
    }

    pub fn chat(&self) -> ChatApi<'_, Self> {
        ChatApi::new(self)
    }

    pub fn docs(&self) -> DocsApi<'_, Self> {
        DocsApi::new(self)
    }

    /// Who the token belongs to and what it can see.
    pub fn authorization(&self) -> AuthorizationApi<'_, Self> {
        AuthorizationApi::new(self)
    }

    pub fn workspaces(&self) -> WorkspacesApi<'_, Self> {
        WorkspacesApi::new(self)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use serde::de::DeserializeOwned;

    use crate::models::Task;

    /// Records calls made to a fake service.
    pub(crate) struct Recorder<C> {
        calls: Mutex<Vec<C>>,
    }

    impl<C> Default for Recorder<C> {
        fn default() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl<C: Clone> Recorder<C> {
        pub(crate) fn record(&self, call: C) {
            self.calls.lock().unwrap().push(call);
        }

        pub(crate) fn calls(&self) -> Vec<C> {
            self.calls.lock().unwrap().clone()
        }
    }

    pub(crate) fn fixture<T: DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    pub(crate) fn task(id: &str) -> Task {
        fixture(serde_json::json!({"id": id, "name": format!("Task {id}")}))
    }
}
