//! Docs models (API v3).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::chat::ContentFormat;
use crate::query::{QueryPairs, ToQuery};

/// A doc.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub id: String,
    pub name: String,
    /// Doc type code.
    #[serde(default, rename = "type")]
    pub doc_type: Option<i32>,
    #[serde(default)]
    pub parent: Option<DocParent>,
    /// Creator user id.
    #[serde(default)]
    pub creator: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}

/// Where a doc lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocParent {
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,
    /// Parent type code: 4 space, 5 folder, 6 list, 7 everything, 12 workspace.
    #[serde(rename = "type")]
    pub parent_type: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocsResponse {
    pub docs: Vec<Doc>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Filters for `GET v3/workspaces/{workspace_id}/docs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDocsQuery {
    pub id: Option<String>,
    pub creator: Option<i64>,
    pub deleted: Option<bool>,
    pub archived: Option<bool>,
    pub parent_id: Option<String>,
    pub parent_type: Option<String>,
    /// Page size (the API allows 10-100).
    pub limit: Option<u32>,
}

impl SearchDocsQuery {
    pub fn to_query_with_cursor(&self, cursor: Option<&str>) -> QueryPairs {
        let mut q = self.to_query();
        q.push_opt("cursor", cursor);
        q
    }
}

impl ToQuery for SearchDocsQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push_opt("id", self.id.as_deref())
            .push_opt("creator", self.creator)
            .push_opt("deleted", self.deleted)
            .push_opt("archived", self.archived)
            .push_opt("parent_id", self.parent_id.as_deref())
            .push_opt("parent_type", self.parent_type.as_deref())
            .push_opt("limit", self.limit);
        q
    }
}

/// Who can see a new doc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocVisibility {
    Public,
    Private,
    Personal,
    Hidden,
}

/// Request body for creating a doc.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDocRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<DocParent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<DocVisibility>,
    /// Create an initial empty page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_page: Option<bool>,
}

/// A page in a doc's page listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPageRef {
    pub id: String,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub parent_page_id: Option<String>,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub workspace_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub pages: Vec<DocPageRef>,
}

impl DocPageRef {
    /// Count of this page and all nested pages.
    pub fn total_pages(&self) -> usize {
        1 + self.pages.iter().map(DocPageRef::total_pages).sum::<usize>()
    }
}

/// A doc page with content.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPage {
    pub id: String,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub parent_page_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creator_id: Option<i64>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub pages: Vec<DocPage>,
}

/// Request body for creating a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    pub content: String,
    pub content_format: ContentFormat,
}

/// How new page content is combined with the existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEditMode {
    #[default]
    Replace,
    Append,
    Prepend,
}

/// Request body for editing a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditPageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_edit_mode: Option<ContentEditMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<ContentFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_response() {
        let json = r#"{
            "docs": [{"id": "8cdu-1", "name": "Handbook", "type": 1,
                      "parent": {"id": 9001, "type": 12}, "creator": 183,
                      "date_created": 1704067200000, "deleted": false, "workspace_id": 9001}],
            "next_cursor": "eyJuZXh0"
        }"#;
        let parsed: DocsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.docs[0].parent.as_ref().unwrap().id, "9001");
        assert_eq!(parsed.docs[0].workspace_id.as_deref(), Some("9001"));
        assert_eq!(parsed.next_cursor.as_deref(), Some("eyJuZXh0"));
    }

    #[test]
    fn test_page_listing_counts_nested_pages() {
        let json = r#"{"id": "p1", "name": "Root", "pages": [
            {"id": "p2", "name": "Child", "pages": [{"id": "p3", "name": "Grandchild"}]},
            {"id": "p4", "name": "Sibling"}
        ]}"#;
        let page: DocPageRef = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn test_edit_page_body() {
        let request = EditPageRequest {
            content: Some("more".to_string()),
            content_edit_mode: Some(ContentEditMode::Append),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"content": "more", "content_edit_mode": "append"}));
    }
}
