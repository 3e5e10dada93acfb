//! Wire types for the provider's messages/send API

use serde::{Deserialize, Serialize};

/// Fallback delivery status when the provider omits one.
const DEFAULT_STATUS: &str = "queued";

/// Top-level send request body.
#[derive(Debug, Serialize)]
pub struct SendRequest {
    /// Provider API key.
    pub key: String,
    /// The message to deliver.
    pub message: OutboundMessage,
}

/// A single outbound email message.
#[derive(Debug, Serialize)]
pub struct OutboundMessage {
    /// Recipient list; this dispatcher always sends to exactly one.
    pub to: Vec<Recipient>,
    /// Sender address.
    pub from_email: String,
    /// Subject line.
    pub subject: String,
    /// Rendered HTML body.
    pub html: String,
}

/// A message recipient.
#[derive(Debug, Serialize)]
pub struct Recipient {
    pub email: String,
}

/// Per-recipient entry in the provider's response array.
#[derive(Debug, Deserialize)]
pub struct SendResultEntry {
    /// Provider error description, set when the message was not accepted.
    #[serde(default)]
    pub error: Option<String>,

    /// Provider-assigned message identifier.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    /// Delivery status reported by the provider.
    #[serde(default)]
    pub status: Option<String>,
}

/// Interpreted provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderVerdict {
    /// The provider accepted the message.
    Accepted {
        message_id: Option<String>,
        status: String,
    },
    /// The provider returned 2xx but flagged an error for this message.
    Rejected { reason: String },
    /// The response body did not match the expected shape.
    Malformed,
}

/// Fold the provider's per-recipient result array into a verdict.
///
/// Only the first entry is inspected: every request carries a single
/// recipient. An empty array does not match the expected shape.
pub fn interpret_results(entries: &[SendResultEntry]) -> ProviderVerdict {
    let first = match entries.first() {
        Some(first) => first,
        None => return ProviderVerdict::Malformed,
    };

    if let Some(error) = &first.error {
        if !error.is_empty() {
            return ProviderVerdict::Rejected {
                reason: error.clone(),
            };
        }
    }

    ProviderVerdict::Accepted {
        message_id: first.id.clone(),
        status: first
            .status
            .clone()
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_accepted() {
        let entries: Vec<SendResultEntry> =
            serde_json::from_str(r#"[{"_id": "abc123", "status": "sent"}]"#).unwrap();

        let verdict = interpret_results(&entries);
        assert_eq!(
            verdict,
            ProviderVerdict::Accepted {
                message_id: Some("abc123".to_string()),
                status: "sent".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_accepted_defaults_to_queued() {
        let entries: Vec<SendResultEntry> = serde_json::from_str(r#"[{"_id": "abc123"}]"#).unwrap();

        let verdict = interpret_results(&entries);
        assert_eq!(
            verdict,
            ProviderVerdict::Accepted {
                message_id: Some("abc123".to_string()),
                status: "queued".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_rejected() {
        let entries: Vec<SendResultEntry> =
            serde_json::from_str(r#"[{"error": "invalid_key"}]"#).unwrap();

        let verdict = interpret_results(&entries);
        assert_eq!(
            verdict,
            ProviderVerdict::Rejected {
                reason: "invalid_key".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_empty_error_is_accepted() {
        let entries: Vec<SendResultEntry> =
            serde_json::from_str(r#"[{"error": "", "status": "sent"}]"#).unwrap();

        assert!(matches!(
            interpret_results(&entries),
            ProviderVerdict::Accepted { .. }
        ));
    }

    #[test]
    fn test_interpret_empty_array_is_malformed() {
        assert_eq!(interpret_results(&[]), ProviderVerdict::Malformed);
    }

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = SendRequest {
            key: "k".to_string(),
            message: OutboundMessage {
                to: vec![Recipient {
                    email: "driver@example.test".to_string(),
                }],
                from_email: "ops@example.test".to_string(),
                subject: "Hello".to_string(),
                html: "<p>Hi</p>".to_string(),
            },
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["key"], "k");
        assert_eq!(encoded["message"]["to"][0]["email"], "driver@example.test");
        assert_eq!(encoded["message"]["from_email"], "ops@example.test");
        assert_eq!(encoded["message"]["subject"], "Hello");
        assert_eq!(encoded["message"]["html"], "<p>Hi</p>");
    }
}
