//! Space tag models.

use serde::{Deserialize, Serialize};

use super::common::Tag;

#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    pub tags: Vec<Tag>,
}

/// Tag definition sent when creating or editing a space tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_bg: Option<String>,
}

/// Request body (`{"tag": {...}}`) for creating or editing a space tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagRequest {
    pub tag: TagDefinition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_request_is_wrapped() {
        let request = TagRequest {
            tag: TagDefinition {
                name: "bug".to_string(),
                tag_bg: Some("#ff0000".to_string()),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"tag": {"name": "bug", "tag_bg": "#ff0000"}}));
    }

    #[test]
    fn test_tags_response() {
        let parsed: TagsResponse =
            serde_json::from_str(r##"{"tags": [{"name": "bug", "tag_fg": "#fff", "tag_bg": "#f00"}]}"##).unwrap();
        assert_eq!(parsed.tags[0].name, "bug");
    }
}
