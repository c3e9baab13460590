//! Fluent doc requests (API v3).

use futures::stream::BoxStream;

use super::failed_stream;
use crate::error::{ClickUpError, Result};
use crate::models::{
    ContentEditMode, ContentFormat, CreateDocRequest, CreatePageRequest, Doc, DocPage, DocPageRef,
    DocParent, DocVisibility, EditPageRequest, SearchDocsQuery,
};
use crate::pagination::{paginate_cursor, CursorPage};
use crate::services::DocsService;
use crate::validation::{require_id, require_text};

/// Doc requests, see [`ClickUpClient::docs`](crate::ClickUpClient::docs).
pub struct DocsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: DocsService + ?Sized> DocsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub fn search(&self, workspace_id: impl Into<String>) -> SearchDocsBuilder<'a, S> {
        SearchDocsBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            query: SearchDocsQuery::default(),
        }
    }

    pub async fn get(&self, workspace_id: &str, doc_id: &str) -> Result<Doc> {
        self.service.get_doc(workspace_id, doc_id).await
    }

    pub fn create(
        &self,
        workspace_id: impl Into<String>,
        name: impl Into<String>,
    ) -> CreateDocBuilder<'a, S> {
        CreateDocBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            request: CreateDocRequest {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Page tree of a doc, optionally cut at `max_depth` (-1 for unlimited).
    pub async fn pages(
        &self,
        workspace_id: &str,
        doc_id: &str,
        max_depth: Option<i32>,
    ) -> Result<Vec<DocPageRef>> {
        self.service
            .get_doc_page_listing(workspace_id, doc_id, max_depth)
            .await
    }

    pub async fn page(
        &self,
        workspace_id: &str,
        doc_id: &str,
        page_id: &str,
        format: ContentFormat,
    ) -> Result<DocPage> {
        self.service
            .get_page(workspace_id, doc_id, page_id, format)
            .await
    }

    pub fn create_page(
        &self,
        workspace_id: impl Into<String>,
        doc_id: impl Into<String>,
        name: impl Into<String>,
    ) -> CreatePageBuilder<'a, S> {
        CreatePageBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            doc_id: doc_id.into(),
            request: CreatePageRequest {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn edit_page(
        &self,
        workspace_id: impl Into<String>,
        doc_id: impl Into<String>,
        page_id: impl Into<String>,
    ) -> EditPageBuilder<'a, S> {
        EditPageBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            doc_id: doc_id.into(),
            page_id: page_id.into(),
            request: EditPageRequest::default(),
        }
    }
}

/// Builder for `GET v3/workspaces/{workspace_id}/docs`.
pub struct SearchDocsBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    query: SearchDocsQuery,
}

impl<'a, S: DocsService + ?Sized> SearchDocsBuilder<'a, S> {
    pub fn id(mut self, doc_id: impl Into<String>) -> Self {
        self.query.id = Some(doc_id.into());
        self
    }

    pub fn creator(mut self, user_id: i64) -> Self {
        self.query.creator = Some(user_id);
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.query.deleted = Some(deleted);
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.query.archived = Some(archived);
        self
    }

    /// Only docs under a parent, e.g. `parent("123", "SPACE")`.
    pub fn parent(mut self, parent_id: impl Into<String>, parent_type: impl Into<String>) -> Self {
        self.query.parent_id = Some(parent_id.into());
        self.query.parent_type = Some(parent_type.into());
        self
    }

    /// Docs per page (10-100).
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("workspace_id", &self.workspace_id)?;
        if let Some(limit) = self.query.limit {
            if !(10..=100).contains(&limit) {
                return Err(ClickUpError::validation("limit", "must be between 10 and 100"));
            }
        }
        Ok(())
    }

    pub async fn page(&self, cursor: Option<&str>) -> Result<CursorPage<Doc>> {
        self.validate()?;
        self.service
            .search_docs(&self.workspace_id, &self.query, cursor)
            .await
    }

    pub fn stream(self) -> BoxStream<'a, Result<Doc>> {
        if let Err(err) = self.validate() {
            return failed_stream(err);
        }
        let Self {
            service,
            workspace_id,
            query,
        } = self;
        paginate_cursor(move |cursor: Option<String>| {
            let workspace_id = workspace_id.clone();
            let query = query.clone();
            async move {
                service
                    .search_docs(&workspace_id, &query, cursor.as_deref())
                    .await
            }
        })
    }
}

/// Builder for `POST v3/workspaces/{workspace_id}/docs`.
pub struct CreateDocBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    request: CreateDocRequest,
}

impl<'a, S: DocsService + ?Sized> CreateDocBuilder<'a, S> {
    /// Parent location; `parent_type` uses the numeric codes of [`DocParent`].
    pub fn parent(mut self, id: impl Into<String>, parent_type: i32) -> Self {
        self.request.parent = Some(DocParent {
            id: id.into(),
            parent_type,
        });
        self
    }

    pub fn visibility(mut self, visibility: DocVisibility) -> Self {
        self.request.visibility = Some(visibility);
        self
    }

    /// Start the doc with an empty page.
    pub fn with_page(mut self) -> Self {
        self.request.create_page = Some(true);
        self
    }

    pub async fn send(self) -> Result<Doc> {
        require_id("workspace_id", &self.workspace_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_doc(&self.workspace_id, &self.request)
            .await
    }
}

/// Builder for adding a page to a doc.
pub struct CreatePageBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    doc_id: String,
    request: CreatePageRequest,
}

impl<'a, S: DocsService + ?Sized> CreatePageBuilder<'a, S> {
    /// Nest under another page.
    pub fn under(mut self, parent_page_id: impl Into<String>) -> Self {
        self.request.parent_page_id = Some(parent_page_id.into());
        self
    }

    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.request.sub_title = Some(sub_title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.request.content = content.into();
        self
    }

    pub fn content_format(mut self, format: ContentFormat) -> Self {
        self.request.content_format = format;
        self
    }

    pub async fn send(self) -> Result<DocPage> {
        require_id("workspace_id", &self.workspace_id)?;
        require_id("doc_id", &self.doc_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_page(&self.workspace_id, &self.doc_id, &self.request)
            .await
    }
}

/// Builder for editing a page.
pub struct EditPageBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    doc_id: String,
    page_id: String,
    request: EditPageRequest,
}

impl<'a, S: DocsService + ?Sized> EditPageBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.request.sub_title = Some(sub_title.into());
        self
    }

    /// Replace the page content.
    pub fn content(self, content: impl Into<String>) -> Self {
        self.with_content(content.into(), ContentEditMode::Replace)
    }

    pub fn append(self, content: impl Into<String>) -> Self {
        self.with_content(content.into(), ContentEditMode::Append)
    }

    pub fn prepend(self, content: impl Into<String>) -> Self {
        self.with_content(content.into(), ContentEditMode::Prepend)
    }

    fn with_content(mut self, content: String, mode: ContentEditMode) -> Self {
        self.request.content = Some(content);
        self.request.content_edit_mode = Some(mode);
        self
    }

    pub fn content_format(mut self, format: ContentFormat) -> Self {
        self.request.content_format = Some(format);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("workspace_id", &self.workspace_id)?;
        require_id("doc_id", &self.doc_id)?;
        require_id("page_id", &self.page_id)?;
        if let Some(name) = &self.request.name {
            require_text("name", Some(name.as_str()))?;
        }
        let changes = self.request.name.is_some()
            || self.request.sub_title.is_some()
            || self.request.content.is_some();
        if !changes {
            return Err(ClickUpError::validation("page", "no changes set"));
        }
        Ok(())
    }

    pub async fn send(self) -> Result<()> {
        self.validate()?;
        self.service
            .edit_page(&self.workspace_id, &self.doc_id, &self.page_id, &self.request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{fixture, Recorder};
    use async_trait::async_trait;
    use futures::TryStreamExt;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Search(SearchDocsQuery, Option<String>),
        CreateDoc(CreateDocRequest),
        EditPage(String, EditPageRequest),
    }

    #[derive(Default)]
    struct FakeDocs {
        calls: Recorder<Call>,
    }

    fn doc(id: &str) -> Doc {
        fixture(json!({"id": id, "name": format!("Doc {id}")}))
    }

    #[async_trait]
    impl DocsService for FakeDocs {
        async fn search_docs(
            &self,
            _workspace_id: &str,
            query: &SearchDocsQuery,
            cursor: Option<&str>,
        ) -> Result<CursorPage<Doc>> {
            self.calls
                .record(Call::Search(query.clone(), cursor.map(String::from)));
            Ok(match cursor {
                None => CursorPage::new(vec![doc("d1")], Some("next".into())),
                Some(_) => CursorPage::new(vec![doc("d2")], None),
            })
        }

        async fn get_doc(&self, _workspace_id: &str, doc_id: &str) -> Result<Doc> {
            Ok(doc(doc_id))
        }

        async fn create_doc(&self, _workspace_id: &str, request: &CreateDocRequest) -> Result<Doc> {
            self.calls.record(Call::CreateDoc(request.clone()));
            Ok(doc("d-new"))
        }

        async fn get_doc_page_listing(
            &self,
            _workspace_id: &str,
            _doc_id: &str,
            _max_page_depth: Option<i32>,
        ) -> Result<Vec<DocPageRef>> {
            unreachable!("not exercised")
        }

        async fn get_page(
            &self,
            _workspace_id: &str,
            _doc_id: &str,
            _page_id: &str,
            _content_format: ContentFormat,
        ) -> Result<DocPage> {
            unreachable!("not exercised")
        }

        async fn create_page(
            &self,
            _workspace_id: &str,
            _doc_id: &str,
            _request: &CreatePageRequest,
        ) -> Result<DocPage> {
            unreachable!("not exercised")
        }

        async fn edit_page(
            &self,
            _workspace_id: &str,
            _doc_id: &str,
            page_id: &str,
            request: &EditPageRequest,
        ) -> Result<()> {
            self.calls.record(Call::EditPage(page_id.into(), request.clone()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_search_stream_keeps_filters_across_pages() {
        let fake = FakeDocs::default();
        let docs: Vec<Doc> = DocsApi::new(&fake)
            .search("9001")
            .parent("123", "SPACE")
            .archived(false)
            .stream()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(docs.len(), 2);
        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 2);
        for call in &calls {
            let Call::Search(query, _) = call else {
                panic!("unexpected call {call:?}");
            };
            assert_eq!(query.parent_id.as_deref(), Some("123"));
            assert_eq!(query.archived, Some(false));
        }
    }

    #[tokio::test]
    async fn test_search_limit_bounds() {
        let fake = FakeDocs::default();
        let err = DocsApi::new(&fake).search("9001").limit(5).page(None).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_create_doc() {
        let fake = FakeDocs::default();
        DocsApi::new(&fake)
            .create("9001", "Handbook")
            .parent("9001", 12)
            .visibility(DocVisibility::Private)
            .with_page()
            .send()
            .await
            .unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![Call::CreateDoc(CreateDocRequest {
                name: "Handbook".into(),
                parent: Some(DocParent {
                    id: "9001".into(),
                    parent_type: 12
                }),
                visibility: Some(DocVisibility::Private),
                create_page: Some(true),
            })]
        );
    }

    #[tokio::test]
    async fn test_edit_page_append() {
        let fake = FakeDocs::default();
        let api = DocsApi::new(&fake);
        assert!(api.edit_page("9001", "d1", "p1").send().await.unwrap_err().is_validation());
        api.edit_page("9001", "d1", "p1").append("\n## Changelog").send().await.unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![Call::EditPage(
                "p1".into(),
                EditPageRequest {
                    content: Some("\n## Changelog".into()),
                    content_edit_mode: Some(ContentEditMode::Append),
                    ..Default::default()
                }
            )]
        );
    }
}
