//! Docs and pages (API v3).

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    ContentFormat, CreateDocRequest, CreatePageRequest, Doc, DocPage, DocPageRef, DocsResponse,
    EditPageRequest, SearchDocsQuery,
};
use crate::pagination::CursorPage;
use crate::query::QueryPairs;
use crate::validation::{require_id, require_text};

/// Docs endpoints.
#[async_trait]
pub trait DocsService: Send + Sync {
    /// One page of docs matching the filters.
    /// `GET v3/workspaces/{workspace_id}/docs`
    async fn search_docs(
        &self,
        workspace_id: &str,
        query: &SearchDocsQuery,
        cursor: Option<&str>,
    ) -> Result<CursorPage<Doc>>;

    /// `GET v3/workspaces/{workspace_id}/docs/{doc_id}`
    async fn get_doc(&self, workspace_id: &str, doc_id: &str) -> Result<Doc>;

    /// `POST v3/workspaces/{workspace_id}/docs`
    async fn create_doc(&self, workspace_id: &str, request: &CreateDocRequest) -> Result<Doc>;

    /// Page tree of a doc.
    /// `GET v3/workspaces/{workspace_id}/docs/{doc_id}/page_listing`
    async fn get_doc_page_listing(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_page_depth: Option<i32>,
    ) -> Result<Vec<DocPageRef>>;

    /// `GET v3/workspaces/{workspace_id}/docs/{doc_id}/pages/{page_id}`
    async fn get_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        content_format: ContentFormat,
    ) -> Result<DocPage>;

    /// `POST v3/workspaces/{workspace_id}/docs/{doc_id}/pages`
    async fn create_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        request: &CreatePageRequest,
    ) -> Result<DocPage>;

    /// `PUT v3/workspaces/{workspace_id}/docs/{doc_id}/pages/{page_id}`
    async fn edit_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        request: &EditPageRequest,
    ) -> Result<()>;
}

fn doc_path(workspace_id: &str, doc_id: &str) -> Result<String> {
    require_id("workspace_id", workspace_id)?;
    require_id("doc_id", doc_id)?;
    Ok(format!(
        "v3/workspaces/{}/docs/{}",
        segment(workspace_id),
        segment(doc_id)
    ))
}

#[async_trait]
impl DocsService for ClickUpClient {
    #[tracing::instrument(skip(self, query))]
    async fn search_docs(
        &self,
        workspace_id: &str,
        query: &SearchDocsQuery,
        cursor: Option<&str>,
    ) -> Result<CursorPage<Doc>> {
        require_id("workspace_id", workspace_id)?;
        let path = format!("v3/workspaces/{}/docs", segment(workspace_id));
        let response: DocsResponse = self
            .get_json_with_query(&path, &query.to_query_with_cursor(cursor))
            .await?;
        let next = response.next_cursor.filter(|c| !c.is_empty());
        Ok(CursorPage::new(response.docs, next))
    }

    #[tracing::instrument(skip(self))]
    async fn get_doc(&self, workspace_id: &str, doc_id: &str) -> Result<Doc> {
        self.get_json(&doc_path(workspace_id, doc_id)?).await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_doc(&self, workspace_id: &str, request: &CreateDocRequest) -> Result<Doc> {
        require_id("workspace_id", workspace_id)?;
        require_text("name", Some(request.name.as_str()))?;
        self.post_json(&format!("v3/workspaces/{}/docs", segment(workspace_id)), request)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_doc_page_listing(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_page_depth: Option<i32>,
    ) -> Result<Vec<DocPageRef>> {
        let path = format!("{}/page_listing", doc_path(workspace_id, doc_id)?);
        let mut query = QueryPairs::new();
        query.push_opt("max_page_depth", max_page_depth);
        self.get_json_with_query(&path, &query).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        content_format: ContentFormat,
    ) -> Result<DocPage> {
        require_id("page_id", page_id)?;
        let path = format!(
            "{}/pages/{}",
            doc_path(workspace_id, doc_id)?,
            segment(page_id)
        );
        let mut query = QueryPairs::new();
        query.push("content_format", content_format.as_str());
        self.get_json_with_query(&path, &query).await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        request: &CreatePageRequest,
    ) -> Result<DocPage> {
        let path = format!("{}/pages", doc_path(workspace_id, doc_id)?);
        self.post_json(&path, request).await
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        request: &EditPageRequest,
    ) -> Result<()> {
        require_id("page_id", page_id)?;
        let path = format!(
            "{}/pages/{}",
            doc_path(workspace_id, doc_id)?,
            segment(page_id)
        );
        self.put(&path, request).await?;
        Ok(())
    }
}
