//! Webhook models and signature verification.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// Subscribe to every event.
pub const ALL_EVENTS: &str = "*";

/// A webhook subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    #[serde(default)]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub team_id: Option<String>,
    pub endpoint: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub list_id: Option<String>,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub folder_id: Option<String>,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub space_id: Option<String>,
    #[serde(default)]
    pub health: Option<WebhookHealth>,
    /// Signing secret for `X-Signature` verification.
    #[serde(default)]
    pub secret: Option<String>,
}

impl Webhook {
    /// Whether ClickUp has suspended deliveries after repeated failures.
    pub fn is_suspended(&self) -> bool {
        self.health
            .as_ref()
            .is_some_and(|h| h.status.eq_ignore_ascii_case("suspended"))
    }
}

/// Delivery health of a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookHealth {
    pub status: String,
    #[serde(default)]
    pub fail_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebhooksResponse {
    pub webhooks: Vec<Webhook>,
}

/// Response of create and update calls (`{"id": ..., "webhook": {...}}`).
#[derive(Debug, Deserialize)]
pub(crate) struct WebhookEnvelope {
    pub webhook: Webhook,
}

/// Request body for `POST v2/team/{team_id}/webhook`.
///
/// At most one of the location scopes may be set; without one the webhook
/// covers the whole workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhookRequest {
    pub endpoint: String,
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl CreateWebhookRequest {
    /// Check the endpoint, events and scope.
    pub fn validate(&self) -> crate::Result<()> {
        crate::validation::require_text("endpoint", Some(self.endpoint.as_str()))?;
        crate::validation::require_ids("events", &self.events)?;
        crate::validation::require_at_most_one(&[
            ("space_id", self.space_id.is_some()),
            ("folder_id", self.folder_id.is_some()),
            ("list_id", self.list_id.is_some()),
            ("task_id", self.task_id.is_some()),
        ])
    }
}

/// Request body for `PUT v2/webhook/{webhook_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    /// `active` to resume a suspended webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A webhook delivery body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub event: String,
    pub webhook_id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub list_id: Option<String>,
    #[serde(default)]
    pub history_items: Vec<serde_json::Value>,
}

/// Verify a delivery's `X-Signature` header.
///
/// The signature is the hex HMAC-SHA256 of the raw body keyed with the
/// webhook secret. Comparison is constant-time.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Compute the hex signature ClickUp would send for `body`.
pub fn sign_payload(secret: &str, body: &[u8]) -> String {
    // HMAC accepts keys of any length.
    let mut mac = match Hmac::<Sha256>::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] = br#"{"event":"taskCreated","webhook_id":"wh1","task_id":"t1"}"#;

    #[test]
    fn test_signature_round_trip() {
        let sig = sign_payload("s3cret", BODY);
        assert_eq!(sig.len(), 64);
        assert!(verify_signature("s3cret", BODY, &sig));
        assert!(verify_signature("s3cret", BODY, &sig.to_uppercase()));
    }

    #[test]
    fn test_signature_rejects_tampering() {
        let sig = sign_payload("s3cret", BODY);
        assert!(!verify_signature("other", BODY, &sig));
        assert!(!verify_signature("s3cret", b"{}", &sig));
        assert!(!verify_signature("s3cret", BODY, "not-hex"));
        assert!(!verify_signature("s3cret", BODY, &sig[..10]));
    }

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2.
        let sig = sign_payload("Jefe", b"what do ya want for nothing?");
        assert_eq!(
            sig,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_create_request_validation() {
        let mut request = CreateWebhookRequest {
            endpoint: "https://example.com/hook".to_string(),
            events: vec![ALL_EVENTS.to_string()],
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.list_id = Some("1".to_string());
        request.space_id = Some("2".to_string());
        assert!(request.validate().is_err());

        request.space_id = None;
        request.events.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_webhook_deserialize() {
        let json = r#"{"webhooks": [{
            "id": "4b67ac88", "userid": 183, "team_id": 108, "endpoint": "https://example.com",
            "client_id": "QVOQP06ZXC", "events": ["taskCreated"], "task_id": null,
            "list_id": null, "folder_id": null, "space_id": 1234,
            "health": {"status": "suspended", "fail_count": 5},
            "secret": "O94IM25S"
        }]}"#;
        let parsed: WebhooksResponse = serde_json::from_str(json).unwrap();
        let hook = &parsed.webhooks[0];
        assert_eq!(hook.team_id.as_deref(), Some("108"));
        assert_eq!(hook.space_id.as_deref(), Some("1234"));
        assert!(hook.is_suspended());
    }
}
