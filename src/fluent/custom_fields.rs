//! Fluent custom field requests.

use crate::error::Result;
use crate::models::{CustomField, SetCustomFieldValueRequest};
use crate::services::CustomFieldsService;
use crate::validation::require_id;

/// Custom field requests, see
/// [`ClickUpClient::custom_fields`](crate::ClickUpClient::custom_fields).
pub struct CustomFieldsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: CustomFieldsService + ?Sized> CustomFieldsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Fields usable on tasks of a list.
    pub async fn for_list(&self, list_id: &str) -> Result<Vec<CustomField>> {
        self.service.get_accessible_custom_fields(list_id).await
    }

    pub async fn for_workspace(&self, team_id: &str) -> Result<Vec<CustomField>> {
        self.service.get_workspace_custom_fields(team_id).await
    }

    /// Set a field value on a task.
    pub fn set(
        &self,
        task_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> SetFieldValueBuilder<'a, S> {
        SetFieldValueBuilder {
            service: self.service,
            task_id: task_id.into(),
            field_id: field_id.into(),
            request: SetCustomFieldValueRequest::new(value),
        }
    }

    pub async fn clear(&self, task_id: &str, field_id: &str) -> Result<()> {
        self.service.remove_custom_field_value(task_id, field_id).await
    }
}

/// Builder for `POST v2/task/{task_id}/field/{field_id}`.
pub struct SetFieldValueBuilder<'a, S: ?Sized> {
    service: &'a S,
    task_id: String,
    field_id: String,
    request: SetCustomFieldValueRequest,
}

impl<'a, S: CustomFieldsService + ?Sized> SetFieldValueBuilder<'a, S> {
    /// Extra options such as `{"time": true}` for date fields.
    pub fn value_options(mut self, options: serde_json::Value) -> Self {
        self.request.value_options = Some(options);
        self
    }

    pub fn request(&self) -> &SetCustomFieldValueRequest {
        &self.request
    }

    pub async fn send(self) -> Result<()> {
        require_id("task_id", &self.task_id)?;
        require_id("field_id", &self.field_id)?;
        self.service
            .set_custom_field_value(&self.task_id, &self.field_id, &self.request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::Recorder;
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Default)]
    struct FakeFields {
        calls: Recorder<(String, String, SetCustomFieldValueRequest)>,
    }

    #[async_trait]
    impl CustomFieldsService for FakeFields {
        async fn get_accessible_custom_fields(&self, _list_id: &str) -> Result<Vec<CustomField>> {
            Ok(vec![])
        }

        async fn get_workspace_custom_fields(&self, _team_id: &str) -> Result<Vec<CustomField>> {
            Ok(vec![])
        }

        async fn set_custom_field_value(
            &self,
            task_id: &str,
            field_id: &str,
            request: &SetCustomFieldValueRequest,
        ) -> Result<()> {
            self.calls
                .record((task_id.into(), field_id.into(), request.clone()));
            Ok(())
        }

        async fn remove_custom_field_value(&self, _task_id: &str, _field_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_set_value_with_options() {
        let fake = FakeFields::default();
        CustomFieldsApi::new(&fake)
            .set("t1", "f1", 1_700_000_000_000i64)
            .value_options(json!({"time": true}))
            .send()
            .await
            .unwrap();
        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2.value, json!(1_700_000_000_000i64));
        assert_eq!(calls[0].2.value_options, Some(json!({"time": true})));
    }

    #[tokio::test]
    async fn test_set_value_requires_ids() {
        let fake = FakeFields::default();
        let err = CustomFieldsApi::new(&fake)
            .set("t1", "", "x")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(fake.calls.calls().is_empty());
    }
}
