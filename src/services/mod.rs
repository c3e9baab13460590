//! Per-resource service traits.
//!
//! Each trait groups the endpoints of one ClickUp resource and is implemented
//! for [`ClickUpClient`](crate::ClickUpClient). Code that only needs a slice
//! of the API can depend on a single trait and be tested against a fake.

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

pub use attachments::AttachmentsService;
pub use authorization::AuthorizationService;
pub use chat::ChatService;
pub use checklists::ChecklistsService;
pub use comments::CommentsService;
pub use custom_fields::CustomFieldsService;
pub use docs::DocsService;
pub use folders::FoldersService;
pub use goals::GoalsService;
pub use lists::ListsService;
pub use members::MembersService;
pub use spaces::SpacesService;
pub use tags::TagsService;
pub use task_relationships::TaskRelationshipsService;
pub use tasks::{TasksService, BULK_TIME_IN_STATUS_LIMIT};
pub use templates::TemplatesService;
pub use time_tracking::TimeTrackingService;
pub use user_groups::UserGroupsService;
pub use users::{GuestsService, UsersService};
pub use views::ViewsService;
pub use webhooks::WebhooksService;
pub use workspaces::WorkspacesService;
