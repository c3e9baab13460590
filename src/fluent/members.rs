//! Fluent member lookups.

use crate::error::Result;
use crate::models::User;
use crate::services::MembersService;

/// Member requests, see [`ClickUpClient::members`](crate::ClickUpClient::members).
pub struct MembersApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: MembersService + ?Sized> MembersApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn of_task(&self, task_id: &str) -> Result<Vec<User>> {
        self.service.get_task_members(task_id).await
    }

    pub async fn of_list(&self, list_id: &str) -> Result<Vec<User>> {
        self.service.get_list_members(list_id).await
    }
}
