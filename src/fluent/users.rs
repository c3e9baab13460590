//! Fluent user and guest management (Enterprise workspaces).

use crate::error::{ClickUpError, Result};
use crate::models::{
    EditGuestRequest, EditUserRequest, Guest, GuestPermission, InviteGuestRequest,
    InviteUserRequest, Workspace, WorkspaceMember,
};
use crate::services::{GuestsService, UsersService};
use crate::validation::{require_id, require_text};

/// User requests, see [`ClickUpClient::users`](crate::ClickUpClient::users).
pub struct UsersApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: UsersService + ?Sized> UsersApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub fn invite(
        &self,
        team_id: impl Into<String>,
        email: impl Into<String>,
    ) -> InviteUserBuilder<'a, S> {
        InviteUserBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: InviteUserRequest {
                email: email.into(),
                ..Default::default()
            },
        }
    }

    pub async fn get(&self, team_id: &str, user_id: i64) -> Result<WorkspaceMember> {
        self.service.get_user(team_id, user_id).await
    }

    pub fn edit(&self, team_id: impl Into<String>, user_id: i64) -> EditUserBuilder<'a, S> {
        EditUserBuilder {
            service: self.service,
            team_id: team_id.into(),
            user_id,
            request: EditUserRequest::default(),
        }
    }

    pub async fn remove(&self, team_id: &str, user_id: i64) -> Result<()> {
        self.service.remove_user_from_workspace(team_id, user_id).await
    }
}

/// Builder for `POST v2/team/{team_id}/user`.
pub struct InviteUserBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: InviteUserRequest,
}

impl<'a, S: UsersService + ?Sized> InviteUserBuilder<'a, S> {
    pub fn admin(mut self, admin: bool) -> Self {
        self.request.admin = admin;
        self
    }

    pub fn custom_role(mut self, role_id: i64) -> Self {
        self.request.custom_role_id = Some(role_id);
        self
    }

    pub async fn send(self) -> Result<Workspace> {
        require_id("team_id", &self.team_id)?;
        require_email(&self.request.email)?;
        self.service
            .invite_user_to_workspace(&self.team_id, &self.request)
            .await
    }
}

/// Builder for `PUT v2/team/{team_id}/user/{user_id}`.
pub struct EditUserBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    user_id: i64,
    request: EditUserRequest,
}

impl<'a, S: UsersService + ?Sized> EditUserBuilder<'a, S> {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.request.username = Some(username.into());
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.request.admin = Some(admin);
        self
    }

    pub fn custom_role(mut self, role_id: i64) -> Self {
        self.request.custom_role_id = Some(role_id);
        self
    }

    pub async fn send(self) -> Result<WorkspaceMember> {
        if self.request == EditUserRequest::default() {
            return Err(ClickUpError::validation("user", "no changes set"));
        }
        self.service
            .edit_user_on_workspace(&self.team_id, self.user_id, &self.request)
            .await
    }
}

/// An item a guest can be given access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestItem {
    Task(String),
    List(String),
    Folder(String),
}

/// Guest requests, see [`ClickUpClient::guests`](crate::ClickUpClient::guests).
pub struct GuestsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: GuestsService + ?Sized> GuestsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub fn invite(
        &self,
        team_id: impl Into<String>,
        email: impl Into<String>,
    ) -> InviteGuestBuilder<'a, S> {
        InviteGuestBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: InviteGuestRequest {
                email: email.into(),
                ..Default::default()
            },
        }
    }

    pub async fn get(&self, team_id: &str, guest_id: i64) -> Result<Guest> {
        self.service.get_guest(team_id, guest_id).await
    }

    pub fn edit(&self, team_id: impl Into<String>, guest_id: i64) -> EditGuestBuilder<'a, S> {
        EditGuestBuilder {
            service: self.service,
            team_id: team_id.into(),
            guest_id,
            request: EditGuestRequest::default(),
        }
    }

    pub async fn remove(&self, team_id: &str, guest_id: i64) -> Result<()> {
        self.service.remove_guest(team_id, guest_id).await
    }

    /// Give a guest access to a task, list or folder.
    pub async fn share(
        &self,
        item: &GuestItem,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest> {
        match item {
            GuestItem::Task(id) => self.service.add_guest_to_task(id, guest_id, permission).await,
            GuestItem::List(id) => self.service.add_guest_to_list(id, guest_id, permission).await,
            GuestItem::Folder(id) => {
                self.service
                    .add_guest_to_folder(id, guest_id, permission)
                    .await
            }
        }
    }

    pub async fn unshare(&self, item: &GuestItem, guest_id: i64) -> Result<()> {
        match item {
            GuestItem::Task(id) => self.service.remove_guest_from_task(id, guest_id).await,
            GuestItem::List(id) => self.service.remove_guest_from_list(id, guest_id).await,
            GuestItem::Folder(id) => self.service.remove_guest_from_folder(id, guest_id).await,
        }
    }
}

/// Guest permission flags shared by invite and edit.
macro_rules! guest_flags {
    () => {
        pub fn can_edit_tags(mut self, allowed: bool) -> Self {
            self.request.can_edit_tags = Some(allowed);
            self
        }

        pub fn can_see_time_spent(mut self, allowed: bool) -> Self {
            self.request.can_see_time_spent = Some(allowed);
            self
        }

        pub fn can_see_time_estimated(mut self, allowed: bool) -> Self {
            self.request.can_see_time_estimated = Some(allowed);
            self
        }

        pub fn can_create_views(mut self, allowed: bool) -> Self {
            self.request.can_create_views = Some(allowed);
            self
        }

        pub fn custom_role(mut self, role_id: i64) -> Self {
            self.request.custom_role_id = Some(role_id);
            self
        }
    };
}

/// Builder for `POST v2/team/{team_id}/guest`.
pub struct InviteGuestBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: InviteGuestRequest,
}

impl<'a, S: GuestsService + ?Sized> InviteGuestBuilder<'a, S> {
    guest_flags!();

    pub async fn send(self) -> Result<Workspace> {
        require_id("team_id", &self.team_id)?;
        require_email(&self.request.email)?;
        self.service.invite_guest(&self.team_id, &self.request).await
    }
}

/// Builder for `PUT v2/team/{team_id}/guest/{guest_id}`.
pub struct EditGuestBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    guest_id: i64,
    request: EditGuestRequest,
}

impl<'a, S: GuestsService + ?Sized> EditGuestBuilder<'a, S> {
    guest_flags!();

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.request.username = Some(username.into());
        self
    }

    pub async fn send(self) -> Result<Guest> {
        if self.request == EditGuestRequest::default() {
            return Err(ClickUpError::validation("guest", "no changes set"));
        }
        self.service
            .edit_guest(&self.team_id, self.guest_id, &self.request)
            .await
    }
}

fn require_email(email: &str) -> Result<()> {
    require_text("email", Some(email))?;
    if !email.contains('@') {
        return Err(ClickUpError::validation("email", "is not an email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{fixture, Recorder};
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Invite(String, InviteGuestRequest),
        Edit(i64, EditGuestRequest),
        AddToList(String, i64, GuestPermission),
        RemoveFromFolder(String, i64),
    }

    #[derive(Default)]
    struct FakeGuests {
        calls: Recorder<Call>,
    }

    fn guest(id: i64) -> Guest {
        fixture(json!({"user": {"id": id, "username": "Guest", "role": 4}}))
    }

    fn workspace() -> Workspace {
        fixture(json!({"id": "9001", "name": "Acme"}))
    }

    #[async_trait]
    impl GuestsService for FakeGuests {
        async fn invite_guest(&self, team_id: &str, request: &InviteGuestRequest) -> Result<Workspace> {
            self.calls.record(Call::Invite(team_id.into(), request.clone()));
            Ok(workspace())
        }

        async fn get_guest(&self, _team_id: &str, guest_id: i64) -> Result<Guest> {
            Ok(guest(guest_id))
        }

        async fn edit_guest(
            &self,
            _team_id: &str,
            guest_id: i64,
            request: &EditGuestRequest,
        ) -> Result<Guest> {
            self.calls.record(Call::Edit(guest_id, request.clone()));
            Ok(guest(guest_id))
        }

        async fn remove_guest(&self, _team_id: &str, _guest_id: i64) -> Result<()> {
            unreachable!("not exercised")
        }

        async fn add_guest_to_task(
            &self,
            _task_id: &str,
            _guest_id: i64,
            _permission: GuestPermission,
        ) -> Result<Guest> {
            unreachable!("not exercised")
        }

        async fn remove_guest_from_task(&self, _task_id: &str, _guest_id: i64) -> Result<()> {
            unreachable!("not exercised")
        }

        async fn add_guest_to_list(
            &self,
            list_id: &str,
            guest_id: i64,
            permission: GuestPermission,
        ) -> Result<Guest> {
            self.calls
                .record(Call::AddToList(list_id.into(), guest_id, permission));
            Ok(guest(guest_id))
        }

        async fn remove_guest_from_list(&self, _list_id: &str, _guest_id: i64) -> Result<()> {
            unreachable!("not exercised")
        }

        async fn add_guest_to_folder(
            &self,
            _folder_id: &str,
            _guest_id: i64,
            _permission: GuestPermission,
        ) -> Result<Guest> {
            unreachable!("not exercised")
        }

        async fn remove_guest_from_folder(&self, folder_id: &str, guest_id: i64) -> Result<()> {
            self.calls.record(Call::RemoveFromFolder(folder_id.into(), guest_id));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_invite_guest_with_flags() {
        let fake = FakeGuests::default();
        GuestsApi::new(&fake)
            .invite("9001", "guest@example.com")
            .can_edit_tags(false)
            .can_see_time_spent(true)
            .send()
            .await
            .unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![Call::Invite(
                "9001".into(),
                InviteGuestRequest {
                    email: "guest@example.com".into(),
                    can_edit_tags: Some(false),
                    can_see_time_spent: Some(true),
                    ..Default::default()
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_invite_rejects_bad_email() {
        let fake = FakeGuests::default();
        let err = GuestsApi::new(&fake)
            .invite("9001", "not-an-email")
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "email", .. }));
    }

    #[tokio::test]
    async fn test_share_routes_by_item() {
        let fake = FakeGuests::default();
        let api = GuestsApi::new(&fake);
        api.share(&GuestItem::List("l1".into()), 7, GuestPermission::Comment)
            .await
            .unwrap();
        api.unshare(&GuestItem::Folder("f1".into()), 7).await.unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![
                Call::AddToList("l1".into(), 7, GuestPermission::Comment),
                Call::RemoveFromFolder("f1".into(), 7),
            ]
        );
    }

    #[tokio::test]
    async fn test_edit_guest_needs_a_change() {
        let fake = FakeGuests::default();
        let api = GuestsApi::new(&fake);
        assert!(api.edit("9001", 7).send().await.unwrap_err().is_validation());
        api.edit("9001", 7).username("Visitor").send().await.unwrap();
        assert_eq!(fake.calls.calls().len(), 1);
    }
}
