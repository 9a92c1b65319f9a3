//! Request and response payloads for the platform API
//!
//! The wire format is camelCase JSON throughout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for creating a mentoring session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub title: String,
    pub mentor_id: String,
    pub student_id: String,
    pub scheduled_time: String,
    pub duration_minutes: u32,
    pub topic: String,
}

/// A chat message bound to a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub message: String,
    pub session_id: String,
}

/// Feedback submitted for a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub session_id: String,
    pub rating: f64,
    pub comment: String,
}

/// Claim submitted to the blockchain verification endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionClaim {
    pub session_id: String,
    pub user_id: String,
    pub skill_id: String,
    pub completion_proof: String,
}

/// Result returned by the blockchain verification endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub verified: bool,
    pub tokens_issued: f64,
}

/// Extract a session identifier from a session object.
///
/// The API reports identifiers under varying keys depending on the
/// handler (`id`, `_id`, `sessionId`), and some deployments use integer
/// ids. Normalize everything to a string.
pub fn session_id(body: &Value) -> Option<String> {
    for key in ["id", "_id", "sessionId"] {
        match body.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Whether a JSON value names the given session identifier
///
/// Used when checking echoed `sessionId` fields, where the server may
/// answer with either a string or an integer.
pub fn matches_session_id(value: &Value, id: &str) -> bool {
    match value {
        Value::String(s) => s == id,
        Value::Number(n) => n.to_string() == id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_id_key_variants() {
        assert_eq!(session_id(&json!({"id": "abc"})), Some("abc".to_string()));
        assert_eq!(session_id(&json!({"_id": "def"})), Some("def".to_string()));
        assert_eq!(
            session_id(&json!({"sessionId": "ghi"})),
            Some("ghi".to_string())
        );
    }

    #[test]
    fn test_session_id_numeric() {
        assert_eq!(session_id(&json!({"id": 42})), Some("42".to_string()));
    }

    #[test]
    fn test_session_id_prefers_id_key() {
        let body = json!({"id": "primary", "_id": "secondary"});
        assert_eq!(session_id(&body), Some("primary".to_string()));
    }

    #[test]
    fn test_session_id_rejects_empty_and_missing() {
        assert_eq!(session_id(&json!({"id": ""})), None);
        assert_eq!(session_id(&json!({"title": "no id here"})), None);
    }

    #[test]
    fn test_matches_session_id() {
        assert!(matches_session_id(&json!("abc"), "abc"));
        assert!(matches_session_id(&json!(7), "7"));
        assert!(!matches_session_id(&json!("abc"), "def"));
        assert!(!matches_session_id(&json!(null), "abc"));
    }

    #[test]
    fn test_new_session_wire_names() {
        let session = NewSession {
            title: "t".to_string(),
            mentor_id: "m".to_string(),
            student_id: "s".to_string(),
            scheduled_time: "2026-12-01T15:00:00Z".to_string(),
            duration_minutes: 60,
            topic: "x".to_string(),
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["mentorId"], "m");
        assert_eq!(value["studentId"], "s");
        assert_eq!(value["scheduledTime"], "2026-12-01T15:00:00Z");
        assert_eq!(value["durationMinutes"], 60);
    }

    #[test]
    fn test_completion_claim_wire_names() {
        let claim = CompletionClaim {
            session_id: "s".to_string(),
            user_id: "u".to_string(),
            skill_id: "k".to_string(),
            completion_proof: "0xabc".to_string(),
        };
        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["sessionId"], "s");
        assert_eq!(value["completionProof"], "0xabc");
    }

    #[test]
    fn test_verification_deserializes_camel_case() {
        let verification: Verification =
            serde_json::from_value(json!({"verified": true, "tokensIssued": 25})).unwrap();
        assert!(verification.verified);
        assert_eq!(verification.tokens_issued, 25.0);
    }
}
