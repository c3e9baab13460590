//! Comment models.
//!
//! Comment listings return the 25 newest comments. Older comments are
//! fetched by passing the date and id of the oldest comment seen so far,
//! which [`CommentCursor`] captures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::User;
use crate::pagination::CursorPage;
use crate::query::{QueryPairs, ToQuery};

/// Number of comments the API returns per request.
pub const COMMENT_PAGE_SIZE: usize = 25;

/// A comment on a task, list or chat view.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id.
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,

    /// Rich-text segments.
    #[serde(default)]
    pub comment: Vec<CommentSegment>,

    /// Plain text of the comment.
    #[serde(default)]
    pub comment_text: String,

    /// Author.
    pub user: User,

    /// Assigned user, if the comment is assigned.
    #[serde(default)]
    pub assignee: Option<User>,

    /// Who assigned it.
    #[serde(default)]
    pub assigned_by: Option<User>,

    /// Whether an assigned comment has been resolved.
    #[serde(default)]
    pub resolved: bool,

    /// Reactions as returned by the API.
    #[serde(default)]
    pub reactions: Vec<serde_json::Value>,

    /// Posting time.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date: Option<DateTime<Utc>>,

    /// Number of threaded replies.
    #[serde(default)]
    pub reply_count: Option<u32>,
}

/// A rich-text segment of a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSegment {
    pub text: String,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// Position for fetching older comments: the oldest comment seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCursor {
    /// Posting time of the oldest comment, in unix milliseconds.
    pub start: i64,
    /// Id of the oldest comment.
    pub start_id: String,
}

impl ToQuery for CommentCursor {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push("start", self.start).push("start_id", &self.start_id);
        q
    }
}

/// Wrap a comment listing into a cursor page.
///
/// A full page means older comments may exist; the cursor then points at
/// the last (oldest) comment returned.
pub(crate) fn comment_page(comments: Vec<Comment>) -> CursorPage<Comment, CommentCursor> {
    let next = if comments.len() >= COMMENT_PAGE_SIZE {
        comments.last().and_then(|oldest| {
            oldest.date.map(|date| CommentCursor {
                start: date.timestamp_millis(),
                start_id: oldest.id.clone(),
            })
        })
    } else {
        None
    };
    CursorPage::new(comments, next)
}

/// Request body for creating a task, list or view comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,
    pub notify_all: bool,
}

/// Response of a comment creation.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedComment {
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub hist_id: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date: Option<DateTime<Utc>>,
}

/// Request body for `PUT v2/comment/{comment_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCommentRequest {
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}
