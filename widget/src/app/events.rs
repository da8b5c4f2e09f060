//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread, plus the widget's one-shot timers.

use shared::dto::chat::ChatResponse;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A chat turn settled; carries the submitted text for indicator checks
    ChatTurnResult {
        user_text: String,
        result: Result<ChatResponse, String>,
    },
    /// Conversation reset settled (local clear happens on both arms)
    ResetResult(Result<(), String>),
    /// Backend acknowledged (or failed to acknowledge) the security toggle
    SecurityToggleResult(Result<(), String>),
    /// System prompt fetch settled
    SystemPromptResult(Result<String, String>),
    /// The one-shot attention nudge timer fired
    NudgeTimerFired,
    /// Delayed input population from `open_with_message`
    PopulateInput(String),
}
