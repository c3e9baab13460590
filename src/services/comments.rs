//! Comment operations.
//!
//! Listings return the newest 25 comments; pass the cursor from the
//! previous page to walk back in time.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    comment_page, Comment, CommentCursor, CommentsResponse, CreateCommentRequest, CreatedComment,
    UpdateCommentRequest,
};
use crate::pagination::CursorPage;
use crate::query::ToQuery;
use crate::validation::{require_id, require_text};

/// Comment endpoints.
#[async_trait]
pub trait CommentsService: Send + Sync {
    /// `GET v2/task/{task_id}/comment`
    async fn get_task_comments(
        &self,
        task_id: &str,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>>;

    /// `GET v2/list/{list_id}/comment`
    async fn get_list_comments(
        &self,
        list_id: &str,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>>;

    /// Comments of a chat view. `GET v2/view/{view_id}/comment`
    async fn get_view_comments(
        &self,
        view_id: &str,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>>;

    /// `POST v2/task/{task_id}/comment`
    async fn create_task_comment(
        &self,
        task_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment>;

    /// `POST v2/list/{list_id}/comment`
    async fn create_list_comment(
        &self,
        list_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment>;

    /// `POST v2/view/{view_id}/comment`
    async fn create_view_comment(
        &self,
        view_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment>;

    /// `PUT v2/comment/{comment_id}`
    async fn update_comment(&self, comment_id: &str, request: &UpdateCommentRequest)
        -> Result<()>;

    /// `DELETE v2/comment/{comment_id}`
    async fn delete_comment(&self, comment_id: &str) -> Result<()>;

    /// Replies to a comment. `GET v2/comment/{comment_id}/reply`
    async fn get_threaded_comments(&self, comment_id: &str) -> Result<Vec<Comment>>;

    /// `POST v2/comment/{comment_id}/reply`
    async fn create_threaded_comment(
        &self,
        comment_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment>;
}

impl ClickUpClient {
    async fn comment_listing(
        &self,
        path: String,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>> {
        let query = cursor.map(ToQuery::to_query).unwrap_or_default();
        let response: CommentsResponse = self.get_json_with_query(&path, &query).await?;
        Ok(comment_page(response.comments))
    }

    async fn post_comment(
        &self,
        path: String,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment> {
        require_text("comment_text", Some(request.comment_text.as_str()))?;
        self.post_json(&path, request).await
    }
}

#[async_trait]
impl CommentsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_task_comments(
        &self,
        task_id: &str,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>> {
        require_id("task_id", task_id)?;
        self.comment_listing(format!("v2/task/{}/comment", segment(task_id)), cursor)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_list_comments(
        &self,
        list_id: &str,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>> {
        require_id("list_id", list_id)?;
        self.comment_listing(format!("v2/list/{}/comment", segment(list_id)), cursor)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_view_comments(
        &self,
        view_id: &str,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>> {
        require_id("view_id", view_id)?;
        self.comment_listing(format!("v2/view/{}/comment", segment(view_id)), cursor)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_task_comment(
        &self,
        task_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment> {
        require_id("task_id", task_id)?;
        self.post_comment(format!("v2/task/{}/comment", segment(task_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_list_comment(
        &self,
        list_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment> {
        require_id("list_id", list_id)?;
        self.post_comment(format!("v2/list/{}/comment", segment(list_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_view_comment(
        &self,
        view_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment> {
        require_id("view_id", view_id)?;
        self.post_comment(format!("v2/view/{}/comment", segment(view_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_comment(
        &self,
        comment_id: &str,
        request: &UpdateCommentRequest,
    ) -> Result<()> {
        require_id("comment_id", comment_id)?;
        require_text("comment_text", Some(request.comment_text.as_str()))?;
        self.put(&format!("v2/comment/{}", segment(comment_id)), request)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        require_id("comment_id", comment_id)?;
        self.delete(&format!("v2/comment/{}", segment(comment_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_threaded_comments(&self, comment_id: &str) -> Result<Vec<Comment>> {
        require_id("comment_id", comment_id)?;
        let response: CommentsResponse = self
            .get_json(&format!("v2/comment/{}/reply", segment(comment_id)))
            .await?;
        Ok(response.comments)
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_threaded_comment(
        &self,
        comment_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<CreatedComment> {
        require_id("comment_id", comment_id)?;
        self.post_comment(format!("v2/comment/{}/reply", segment(comment_id)), request)
            .await
    }
}
