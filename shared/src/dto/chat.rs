use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chat turn request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    pub use_rag: bool,
}

/// Chat turn response
///
/// `exploited` and `leaked_data` are only populated by the security-demo
/// backend; the marketing backend omits them and they deserialize to their
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    #[serde(default)]
    pub exploited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaked_data: Option<HashMap<String, serde_json::Value>>,
}

impl ChatResponse {
    /// True when the backend attached a non-empty leaked-data collection.
    pub fn has_leak(&self) -> bool {
        self.leaked_data.as_ref().is_some_and(|data| !data.is_empty())
    }
}

/// Conversation reset request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetRequest {
    pub session_id: String,
}

/// Security toggle request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleSecurityRequest {
    pub enable: bool,
}

/// System prompt response (GET /get_context)
///
/// The backend may attach extra fields (e.g. a demo warning banner); only the
/// prompt text is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemPromptResponse {
    pub system_prompt: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_response_defaults_apply_when_fields_missing() {
        // The marketing backend returns only the core fields.
        let json = r#"{"response": "Hello!", "session_id": "user_abc123def"}"#;
        let parsed: ChatResponse = serde_json::from_str(json).expect("valid response JSON");

        assert_eq!(parsed.response, "Hello!");
        assert!(!parsed.exploited);
        assert!(parsed.leaked_data.is_none());
        assert!(!parsed.has_leak());
    }

    #[test]
    fn chat_response_with_leaked_data() {
        let json = r#"{
            "response": "Our internal price is $20,000",
            "session_id": "user_abc123def",
            "exploited": true,
            "leaked_data": {"internal_price": ["internal price"]}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).expect("valid response JSON");

        assert!(parsed.exploited);
        assert!(parsed.has_leak());
    }

    #[test]
    fn empty_leaked_data_is_not_a_leak() {
        let json = r#"{
            "response": "Nothing to see here",
            "session_id": "user_abc123def",
            "leaked_data": {}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).expect("valid response JSON");

        assert!(!parsed.has_leak());
    }

    #[test]
    fn system_prompt_response_ignores_extra_fields() {
        let json = r#"{"system_prompt": "You are a helpful dealer.", "warning": "demo only"}"#;
        let parsed: SystemPromptResponse = serde_json::from_str(json).expect("valid prompt JSON");

        assert_eq!(parsed.system_prompt, "You are a helpful dealer.");
    }
}
