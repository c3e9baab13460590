//! Custom field models.

use serde::{Deserialize, Serialize};

/// A custom field definition, optionally carrying a task's value.
///
/// The shape of `type_config` and `value` depends on `field_type`
/// (`drop_down`, `labels`, `date`, `number`, `users`, ...), so both are
/// kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// Field id (UUID).
    pub id: String,

    /// Field name.
    pub name: String,

    /// Field type.
    #[serde(rename = "type")]
    pub field_type: String,

    /// Type-specific configuration (options, currency, ...).
    #[serde(default)]
    pub type_config: Option<serde_json::Value>,

    /// Creation time in unix milliseconds, as sent by the API.
    #[serde(default)]
    pub date_created: Option<String>,

    /// Whether guests can see the field.
    #[serde(default)]
    pub hide_from_guests: Option<bool>,

    /// Whether the field must be filled in.
    #[serde(default)]
    pub required: Option<bool>,

    /// The task's value, only present when embedded in a task.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl CustomField {
    /// Whether the field has a value on the task it was read from.
    pub fn has_value(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_null())
    }

    /// Name of a drop-down option by its index or id, if configured.
    pub fn option_name(&self, key: &serde_json::Value) -> Option<&str> {
        let options = self.type_config.as_ref()?.get("options")?.as_array()?;
        options
            .iter()
            .find(|opt| opt.get("orderindex") == Some(key) || opt.get("id") == Some(key))
            .and_then(|opt| opt.get("name"))
            .and_then(|name| name.as_str())
    }
}

/// Response wrapper (`{"fields": [...]}`).
#[derive(Debug, Deserialize)]
pub(crate) struct CustomFieldsResponse {
    pub fields: Vec<CustomField>,
}

/// Request body for `POST v2/task/{task_id}/field/{field_id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetCustomFieldValueRequest {
    /// The value; its JSON shape depends on the field type.
    pub value: serde_json::Value,

    /// Extra options, e.g. `{"time": true}` for date fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_options: Option<serde_json::Value>,
}

impl SetCustomFieldValueRequest {
    /// A plain value without options.
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self {
            value: value.into(),
            value_options: None,
        }
    }
}
