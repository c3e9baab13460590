//! ClickUp API model types.
//!
//! Response DTOs accept the loose shapes the API sends (ids as strings or
//! numbers, timestamps as millisecond strings). Request DTOs skip unset
//! fields so partial updates only touch what was set.

mod attachment;
mod chat;
mod checklist;
mod comment;
mod common;
mod custom_field;
mod doc;
mod folder;
mod goal;
mod list;
mod relationship;
mod space;
mod tag;
mod task;
mod template;
mod time_tracking;
mod user;
mod user_group;
mod view;
mod webhook;
mod workspace;

pub use attachment::*;
pub use chat::*;
pub use checklist::*;
pub use comment::*;
pub use common::*;
pub use custom_field::*;
pub use doc::*;
pub use folder::*;
pub use goal::*;
pub use list::*;
pub use relationship::*;
pub use space::*;
pub use tag::*;
pub use task::*;
pub use template::*;
pub use time_tracking::*;
pub use user::*;
pub use user_group::*;
pub use view::*;
pub use webhook::*;
pub use workspace::*;
