//! Fluent space requests.

use crate::error::Result;
use crate::models::{CreateSpaceRequest, Space, SpaceFeatures, UpdateSpaceRequest};
use crate::services::SpacesService;
use crate::validation::{require_id, require_text};

/// Space requests, see [`ClickUpClient::spaces`](crate::ClickUpClient::spaces).
pub struct SpacesApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: SpacesService + ?Sized> SpacesApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn get(&self, space_id: &str) -> Result<Space> {
        self.service.get_space(space_id).await
    }

    pub async fn list(&self, team_id: &str, archived: bool) -> Result<Vec<Space>> {
        self.service.get_spaces(team_id, archived).await
    }

    pub fn create(&self, team_id: impl Into<String>) -> CreateSpaceBuilder<'a, S> {
        CreateSpaceBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: CreateSpaceRequest::default(),
        }
    }

    pub fn update(&self, space_id: impl Into<String>) -> UpdateSpaceBuilder<'a, S> {
        UpdateSpaceBuilder {
            service: self.service,
            space_id: space_id.into(),
            request: UpdateSpaceRequest::default(),
        }
    }

    pub async fn delete(&self, space_id: &str) -> Result<()> {
        self.service.delete_space(space_id).await
    }
}

/// Builder for `POST v2/team/{team_id}/space`.
pub struct CreateSpaceBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: CreateSpaceRequest,
}

impl<'a, S: SpacesService + ?Sized> CreateSpaceBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn multiple_assignees(mut self, enabled: bool) -> Self {
        self.request.multiple_assignees = Some(enabled);
        self
    }

    pub fn features(mut self, features: SpaceFeatures) -> Self {
        self.request.features = Some(features);
        self
    }

    pub fn request(&self) -> &CreateSpaceRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("team_id", &self.team_id)?;
        require_text("name", Some(self.request.name.as_str()))
    }

    pub async fn send(self) -> Result<Space> {
        self.validate()?;
        self.service.create_space(&self.team_id, &self.request).await
    }
}

/// Builder for `PUT v2/space/{space_id}`.
pub struct UpdateSpaceBuilder<'a, S: ?Sized> {
    service: &'a S,
    space_id: String,
    request: UpdateSpaceRequest,
}

impl<'a, S: SpacesService + ?Sized> UpdateSpaceBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.request.color = Some(color.into());
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.request.private = Some(private);
        self
    }

    pub fn admin_can_manage(mut self, allowed: bool) -> Self {
        self.request.admin_can_manage = Some(allowed);
        self
    }

    pub fn multiple_assignees(mut self, enabled: bool) -> Self {
        self.request.multiple_assignees = Some(enabled);
        self
    }

    pub fn features(mut self, features: SpaceFeatures) -> Self {
        self.request.features = Some(features);
        self
    }

    pub fn request(&self) -> &UpdateSpaceRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("space_id", &self.space_id)?;
        if let Some(name) = &self.request.name {
            require_text("name", Some(name.as_str()))?;
        }
        Ok(())
    }

    pub async fn send(self) -> Result<Space> {
        self.validate()?;
        self.service.update_space(&self.space_id, &self.request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{fixture, Recorder};
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(String, CreateSpaceRequest),
        Update(String, UpdateSpaceRequest),
    }

    #[derive(Default)]
    struct FakeSpaces {
        calls: Recorder<Call>,
    }

    fn space(id: &str) -> Space {
        fixture(json!({"id": id, "name": "Engineering"}))
    }

    #[async_trait]
    impl SpacesService for FakeSpaces {
        async fn get_spaces(&self, _team_id: &str, _archived: bool) -> Result<Vec<Space>> {
            Ok(vec![space("s1")])
        }

        async fn get_space(&self, space_id: &str) -> Result<Space> {
            Ok(space(space_id))
        }

        async fn create_space(&self, team_id: &str, request: &CreateSpaceRequest) -> Result<Space> {
            self.calls.record(Call::Create(team_id.into(), request.clone()));
            Ok(space("new"))
        }

        async fn update_space(&self, space_id: &str, request: &UpdateSpaceRequest) -> Result<Space> {
            self.calls.record(Call::Update(space_id.into(), request.clone()));
            Ok(space(space_id))
        }

        async fn delete_space(&self, _space_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_space() {
        let fake = FakeSpaces::default();
        SpacesApi::new(&fake)
            .create("9001")
            .name("Engineering")
            .multiple_assignees(true)
            .send()
            .await
            .unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![Call::Create(
                "9001".into(),
                CreateSpaceRequest {
                    name: "Engineering".into(),
                    multiple_assignees: Some(true),
                    features: None,
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_create_space_requires_name() {
        let fake = FakeSpaces::default();
        let err = SpacesApi::new(&fake).create("9001").send().await.unwrap_err();
        assert!(err.is_validation());
        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_space() {
        let fake = FakeSpaces::default();
        let builder = SpacesApi::new(&fake).update("s1").color("#ff0000").private(true);
        assert_eq!(builder.request().color.as_deref(), Some("#ff0000"));
        builder.send().await.unwrap();
        assert_eq!(fake.calls.calls().len(), 1);
    }
}
