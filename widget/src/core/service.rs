//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::AppError;
use async_trait::async_trait;
use shared::dto::chat::{ChatRequest, ChatResponse};

/// Trait for chatbot backend operations.
///
/// This trait allows for dependency injection and mocking in tests: the app
/// binds its network tasks against this seam, so a fake implementation can
/// stand in for the real HTTP client.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one chat turn and return the assistant's reply
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse, AppError>;

    /// Clear the server-side conversation for a session
    async fn reset_session(&self, session_id: String) -> Result<(), AppError>;

    /// Enable or disable the backend's (intentionally weak) guardrails
    async fn toggle_security(&self, enable: bool) -> Result<(), AppError>;

    /// Fetch the backend's system prompt text
    async fn get_system_prompt(&self) -> Result<String, AppError>;
}
