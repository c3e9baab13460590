//! Space operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{CreateSpaceRequest, Space, SpacesResponse, UpdateSpaceRequest};
use crate::query::QueryPairs;
use crate::validation::{require_id, require_text};

/// Space endpoints.
#[async_trait]
pub trait SpacesService: Send + Sync {
    /// `GET v2/team/{team_id}/space`
    async fn get_spaces(&self, team_id: &str, archived: bool) -> Result<Vec<Space>>;

    /// `GET v2/space/{space_id}`
    async fn get_space(&self, space_id: &str) -> Result<Space>;

    /// `POST v2/team/{team_id}/space`
    async fn create_space(&self, team_id: &str, request: &CreateSpaceRequest) -> Result<Space>;

    /// `PUT v2/space/{space_id}`
    async fn update_space(&self, space_id: &str, request: &UpdateSpaceRequest) -> Result<Space>;

    /// `DELETE v2/space/{space_id}`
    async fn delete_space(&self, space_id: &str) -> Result<()>;
}

#[async_trait]
impl SpacesService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_spaces(&self, team_id: &str, archived: bool) -> Result<Vec<Space>> {
        require_id("team_id", team_id)?;
        let mut query = QueryPairs::new();
        query.push("archived", archived);
        let response: SpacesResponse = self
            .get_json_with_query(&format!("v2/team/{}/space", segment(team_id)), &query)
            .await?;
        Ok(response.spaces)
    }

    #[tracing::instrument(skip(self))]
    async fn get_space(&self, space_id: &str) -> Result<Space> {
        require_id("space_id", space_id)?;
        self.get_json(&format!("v2/space/{}", segment(space_id)))
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_space(&self, team_id: &str, request: &CreateSpaceRequest) -> Result<Space> {
        require_id("team_id", team_id)?;
        require_text("name", Some(request.name.as_str()))?;
        self.post_json(&format!("v2/team/{}/space", segment(team_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_space(&self, space_id: &str, request: &UpdateSpaceRequest) -> Result<Space> {
        require_id("space_id", space_id)?;
        self.put_json(&format!("v2/space/{}", segment(space_id)), request)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_space(&self, space_id: &str) -> Result<()> {
        require_id("space_id", space_id)?;
        self.delete(&format!("v2/space/{}", segment(space_id)))
            .await?;
        Ok(())
    }
}
