//! Fluent comment requests.

use futures::stream::BoxStream;

use super::failed_stream;
use crate::error::Result;
use crate::models::{Comment, CommentCursor, CreateCommentRequest, CreatedComment, UpdateCommentRequest};
use crate::pagination::{paginate_cursor, CursorPage};
use crate::services::CommentsService;
use crate::validation::{require_id, require_text};

/// Comment requests, see [`ClickUpClient::comments`](crate::ClickUpClient::comments).
pub struct CommentsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: CommentsService + ?Sized> CommentsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub fn on_task(&self, task_id: impl Into<String>) -> CommentThread<'a, S> {
        CommentThread::new(self.service, CommentTarget::Task(task_id.into()))
    }

    pub fn on_list(&self, list_id: impl Into<String>) -> CommentThread<'a, S> {
        CommentThread::new(self.service, CommentTarget::List(list_id.into()))
    }

    /// Comments of a chat view.
    pub fn on_view(&self, view_id: impl Into<String>) -> CommentThread<'a, S> {
        CommentThread::new(self.service, CommentTarget::View(view_id.into()))
    }

    /// Threaded replies of a comment. Replies are not paged, so
    /// [`CommentThread::page`] returns them all at once.
    pub fn thread(&self, comment_id: impl Into<String>) -> CommentThread<'a, S> {
        CommentThread::new(self.service, CommentTarget::Thread(comment_id.into()))
    }

    /// Reply to an existing comment.
    pub fn reply(&self, comment_id: impl Into<String>) -> CreateCommentBuilder<'a, S> {
        self.thread(comment_id).create()
    }

    pub async fn replies(&self, comment_id: &str) -> Result<Vec<Comment>> {
        self.service.get_threaded_comments(comment_id).await
    }

    pub fn update(&self, comment_id: impl Into<String>) -> UpdateCommentBuilder<'a, S> {
        UpdateCommentBuilder {
            service: self.service,
            comment_id: comment_id.into(),
            request: UpdateCommentRequest::default(),
        }
    }

    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        self.service.delete_comment(comment_id).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommentTarget {
    Task(String),
    List(String),
    View(String),
    Thread(String),
}

impl CommentTarget {
    fn validate(&self) -> Result<()> {
        match self {
            CommentTarget::Task(id) => require_id("task_id", id),
            CommentTarget::List(id) => require_id("list_id", id),
            CommentTarget::View(id) => require_id("view_id", id),
            CommentTarget::Thread(id) => require_id("comment_id", id),
        }
    }
}

/// The comments of one task, list or view.
pub struct CommentThread<'a, S: ?Sized> {
    service: &'a S,
    target: CommentTarget,
}

impl<'a, S: CommentsService + ?Sized> CommentThread<'a, S> {
    fn new(service: &'a S, target: CommentTarget) -> Self {
        Self { service, target }
    }

    /// Start a new comment.
    pub fn create(&self) -> CreateCommentBuilder<'a, S> {
        CreateCommentBuilder::new(self.service, self.target.clone())
    }

    /// One page of comments, newest first, starting after `cursor`.
    pub async fn page(
        &self,
        cursor: Option<&CommentCursor>,
    ) -> Result<CursorPage<Comment, CommentCursor>> {
        self.target.validate()?;
        fetch_comments(self.service, &self.target, cursor).await
    }

    /// Every comment, newest first, one page request at a time.
    pub fn stream(&self) -> BoxStream<'a, Result<Comment>> {
        if let Err(err) = self.target.validate() {
            return failed_stream(err);
        }
        let service = self.service;
        let target = self.target.clone();
        paginate_cursor(move |cursor: Option<CommentCursor>| {
            let target = target.clone();
            async move { fetch_comments(service, &target, cursor.as_ref()).await }
        })
    }
}

async fn fetch_comments<S: CommentsService + ?Sized>(
    service: &S,
    target: &CommentTarget,
    cursor: Option<&CommentCursor>,
) -> Result<CursorPage<Comment, CommentCursor>> {
    match target {
        CommentTarget::Task(id) => service.get_task_comments(id, cursor).await,
        CommentTarget::List(id) => service.get_list_comments(id, cursor).await,
        CommentTarget::View(id) => service.get_view_comments(id, cursor).await,
        CommentTarget::Thread(id) => {
            let replies = service.get_threaded_comments(id).await?;
            Ok(CursorPage::new(replies, None))
        }
    }
}

/// Builder for posting a comment or a reply.
pub struct CreateCommentBuilder<'a, S: ?Sized> {
    service: &'a S,
    target: CommentTarget,
    request: CreateCommentRequest,
}

impl<'a, S: CommentsService + ?Sized> CreateCommentBuilder<'a, S> {
    fn new(service: &'a S, target: CommentTarget) -> Self {
        Self {
            service,
            target,
            request: CreateCommentRequest::default(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.comment_text = text.into();
        self
    }

    /// Assign the comment to a user.
    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(user_id);
        self
    }

    pub fn group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.request.group_assignee = Some(group_id.into());
        self
    }

    pub fn notify_all(mut self, notify: bool) -> Self {
        self.request.notify_all = notify;
        self
    }

    pub fn request(&self) -> &CreateCommentRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        self.target.validate()?;
        require_text("comment_text", Some(self.request.comment_text.as_str()))
    }

    pub async fn send(self) -> Result<CreatedComment> {
        self.validate()?;
        match &self.target {
            CommentTarget::Task(id) => self.service.create_task_comment(id, &self.request).await,
            CommentTarget::List(id) => self.service.create_list_comment(id, &self.request).await,
            CommentTarget::View(id) => self.service.create_view_comment(id, &self.request).await,
            CommentTarget::Thread(id) => {
                self.service
                    .create_threaded_comment(id, &self.request)
                    .await
            }
        }
    }
}

/// Builder for `PUT v2/comment/{comment_id}`.
pub struct UpdateCommentBuilder<'a, S: ?Sized> {
    service: &'a S,
    comment_id: String,
    request: UpdateCommentRequest,
}

impl<'a, S: CommentsService + ?Sized> UpdateCommentBuilder<'a, S> {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.comment_text = text.into();
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(user_id);
        self
    }

    pub fn group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.request.group_assignee = Some(group_id.into());
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.request.resolved = Some(resolved);
        self
    }

    pub async fn send(self) -> Result<()> {
        require_id("comment_id", &self.comment_id)?;
        require_text("comment_text", Some(self.request.comment_text.as_str()))?;
        self.service
            .update_comment(&self.comment_id, &self.request)
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
        TaskPage(String, Option<CommentCursor>),
        CreateTask(String, CreateCommentRequest),
        CreateList(String, CreateCommentRequest),
        Reply(String, CreateCommentRequest),
        Update(String, UpdateCommentRequest),
    }

    #[derive(Default)]
    struct FakeComments {
        calls: Recorder<Call>,
    }

    fn comment(id: u32) -> Comment {
        fixture(json!({
            "id": id.to_string(),
            "comment_text": format!("comment {id}"),
            "user": {"id": 1},
            "date": (1_700_000_000_000u64 - u64::from(id)).to_string()
        }))
    }

    fn created() -> CreatedComment {
        fixture(json!({"id": 458, "hist_id": "h1", "date": 1700000000000u64}))
    }

    #[async_trait]
    impl CommentsService for FakeComments {
        async fn get_task_comments(
            &self,
            task_id: &str,
            cursor: Option<&CommentCursor>,
        ) -> Result<CursorPage<Comment, CommentCursor>> {
            self.calls
                .record(Call::TaskPage(task_id.into(), cursor.cloned()));
            match cursor {
                None => Ok(CursorPage::new(
                    vec![comment(1), comment(2)],
                    Some(CommentCursor {
                        start: 1_700_000_000_000 - 2,
                        start_id: "2".into(),
                    }),
                )),
                Some(_) => Ok(CursorPage::new(vec![comment(3)], None)),
            }
        }

        async fn get_list_comments(
            &self,
            _list_id: &str,
            _cursor: Option<&CommentCursor>,
        ) -> Result<CursorPage<Comment, CommentCursor>> {
            unreachable!("not exercised")
        }

        async fn get_view_comments(
            &self,
            _view_id: &str,
            _cursor: Option<&CommentCursor>,
        ) -> Result<CursorPage<Comment, CommentCursor>> {
            unreachable!("not exercised")
        }

        async fn create_task_comment(
            &self,
            task_id: &str,
            request: &CreateCommentRequest,
        ) -> Result<CreatedComment> {
            self.calls
                .record(Call::CreateTask(task_id.into(), request.clone()));
            Ok(created())
        }

        async fn create_list_comment(
            &self,
            list_id: &str,
            request: &CreateCommentRequest,
        ) -> Result<CreatedComment> {
            self.calls
                .record(Call::CreateList(list_id.into(), request.clone()));
            Ok(created())
        }

        async fn create_view_comment(
            &self,
            _view_id: &str,
            _request: &CreateCommentRequest,
        ) -> Result<CreatedComment> {
            unreachable!("not exercised")
        }

        async fn update_comment(
            &self,
            comment_id: &str,
            request: &UpdateCommentRequest,
        ) -> Result<()> {
            self.calls
                .record(Call::Update(comment_id.into(), request.clone()));
            Ok(())
        }

        async fn delete_comment(&self, _comment_id: &str) -> Result<()> {
            Ok(())
        }

        async fn get_threaded_comments(&self, _comment_id: &str) -> Result<Vec<Comment>> {
            Ok(vec![comment(9)])
        }

        async fn create_threaded_comment(
            &self,
            comment_id: &str,
            request: &CreateCommentRequest,
        ) -> Result<CreatedComment> {
            self.calls
                .record(Call::Reply(comment_id.into(), request.clone()));
            Ok(created())
        }
    }

    #[tokio::test]
    async fn test_create_routes_to_target() {
        let fake = FakeComments::default();
        let api = CommentsApi::new(&fake);
        let created = api
            .on_task("t1")
            .create()
            .text("Looks good")
            .assignee(7)
            .notify_all(true)
            .send()
            .await
            .unwrap();
        assert_eq!(created.id, "458");
        api.on_list("l1").create().text("FYI").send().await.unwrap();
        api.reply("458").text("Thanks").send().await.unwrap();

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[0],
            Call::CreateTask(
                "t1".into(),
                CreateCommentRequest {
                    comment_text: "Looks good".into(),
                    assignee: Some(7),
                    group_assignee: None,
                    notify_all: true,
                }
            )
        );
        assert!(matches!(&calls[1], Call::CreateList(id, _) if id == "l1"));
        assert!(matches!(&calls[2], Call::Reply(id, r) if id == "458" && r.comment_text == "Thanks"));
    }

    #[tokio::test]
    async fn test_comment_text_required() {
        let fake = FakeComments::default();
        let api = CommentsApi::new(&fake);
        assert!(api.on_task("t1").create().send().await.unwrap_err().is_validation());
        assert!(api.on_task("").create().text("x").send().await.unwrap_err().is_validation());
        assert!(api.update("c1").send().await.unwrap_err().is_validation());
        assert!(fake.calls.calls().is_empty());
    }

    #[tokio::test]
    async fn test_stream_follows_comment_cursor() {
        let fake = FakeComments::default();
        let ids: Vec<String> = CommentsApi::new(&fake)
            .on_task("t1")
            .stream()
            .map_ok(|c| c.id)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::TaskPage("t1".into(), None));
        assert!(matches!(&calls[1], Call::TaskPage(_, Some(c)) if c.start_id == "2"));
    }

    #[tokio::test]
    async fn test_thread_page_holds_all_replies() {
        let fake = FakeComments::default();
        let page = CommentsApi::new(&fake).thread("c1").page(None).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_update_comment() {
        let fake = FakeComments::default();
        CommentsApi::new(&fake)
            .update("c1")
            .text("Edited")
            .resolved(true)
            .send()
            .await
            .unwrap();
        assert_eq!(
            fake.calls.calls(),
            vec![Call::Update(
                "c1".into(),
                UpdateCommentRequest {
                    comment_text: "Edited".into(),
                    resolved: Some(true),
                    ..Default::default()
                }
            )]
        );
    }
}
