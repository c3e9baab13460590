//! Shapes shared by several ClickUp resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

/// A ClickUp user as embedded in tasks, comments, members and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id.
    pub id: i64,

    /// Display name.
    #[serde(default)]
    pub username: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Avatar background colour.
    #[serde(default)]
    pub color: Option<String>,

    /// Avatar URL.
    #[serde(default, rename = "profilePicture")]
    pub profile_picture: Option<String>,

    /// Two-letter initials.
    #[serde(default)]
    pub initials: Option<String>,
}

impl User {
    /// Display name, falling back to the email and then the id.
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// A task or list status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Status id (absent on some embedded statuses).
    #[serde(default)]
    pub id: Option<String>,

    /// Status name (e.g., "to do", "in progress").
    pub status: String,

    /// Display colour.
    #[serde(default)]
    pub color: Option<String>,

    /// Status type (`open`, `custom`, `closed`, `done`).
    #[serde(rename = "type", default)]
    pub status_type: Option<String>,

    /// Position in the status list.
    #[serde(default)]
    pub orderindex: Option<serde_json::Value>,
}

impl Status {
    /// Whether this status closes the task.
    pub fn is_closed(&self) -> bool {
        matches!(self.status_type.as_deref(), Some("closed") | Some("done"))
    }
}

/// A priority as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityInfo {
    /// Priority id as a string ("1" = urgent ... "4" = low).
    #[serde(default)]
    pub id: Option<String>,

    /// Priority label.
    pub priority: String,

    /// Display colour.
    #[serde(default)]
    pub color: Option<String>,
}

/// Task priority levels accepted by create/update endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    /// The numeric value ClickUp expects.
    pub fn as_number(self) -> u8 {
        match self {
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Normal => 3,
            Priority::Low => 4,
        }
    }

    /// Parse the numeric value ClickUp returns.
    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Priority::Urgent),
            2 => Some(Priority::High),
            3 => Some(Priority::Normal),
            4 => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "urgent" | "1" => Ok(Priority::Urgent),
            "high" | "2" => Ok(Priority::High),
            "normal" | "3" => Ok(Priority::Normal),
            "low" | "4" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_number())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Priority::from_number(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid priority {value}")))
    }
}

/// A tag attached to a task or defined in a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,

    /// Foreground colour.
    #[serde(default)]
    pub tag_fg: Option<String>,

    /// Background colour.
    #[serde(default)]
    pub tag_bg: Option<String>,

    /// User id of the creator.
    #[serde(default)]
    pub creator: Option<i64>,
}

/// A lightweight reference to a parent container (list, folder or space).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRef {
    /// Container id. ClickUp sends these as strings or numbers.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Container name.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the container is hidden from the user.
    #[serde(default)]
    pub hidden: Option<bool>,

    /// Whether the user has access to the container.
    #[serde(default)]
    pub access: Option<bool>,
}

/// A member entry (`{"user": {...}}`) as returned by several endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntry {
    /// The member.
    pub user: User,
}

/// Timestamp pair used by goals, docs and time entries.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub start: Option<DateTime<Utc>>,

    /// End of the range.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub end: Option<DateTime<Utc>>,
}

/// Deserialize an id that may arrive as a JSON string or number.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

/// Optional variant of [`string_or_number`]; `null` and missing become `None`.
pub(crate) fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    }))
}

/// Empty response body (`{}`) returned by delete and link endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
