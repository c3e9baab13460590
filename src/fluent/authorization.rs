use crate::error::Result;
use crate::models::{User, Workspace};
use crate::services::AuthorizationService;

/// Token introspection, see
/// [`ClickUpClient::authorization`](crate::ClickUpClient::authorization).
pub struct AuthorizationApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: AuthorizationService + ?Sized> AuthorizationApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// The user the token belongs to.
    pub async fn user(&self) -> Result<User> {
        self.service.get_authorized_user().await
    }

    pub async fn workspaces(&self) -> Result<Vec<Workspace>> {
        self.service.get_authorized_workspaces().await
    }
}
