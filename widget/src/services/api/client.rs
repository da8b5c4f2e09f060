//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::error::AppError;
use crate::core::service::ChatService;
use reqwest::Client;
use shared::dto::chat::{ChatRequest, ChatResponse};

/// Base URL for the chatbot backend server
const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for communicating with the chatbot backend.
///
/// This client handles all REST API calls and maintains a connection pool.
/// The base address is fixed: the widget always talks to the local demo
/// backend and is not configurable at runtime.
pub struct ApiClient {
    pub(crate) client: Client,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url() -> &'static str {
        API_BASE_URL
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement ChatService trait for ApiClient
#[async_trait::async_trait]
impl ChatService for ApiClient {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        crate::services::api::chat::send_chat(self, request).await
    }

    async fn reset_session(&self, session_id: String) -> Result<(), AppError> {
        crate::services::api::chat::reset_session(self, session_id).await
    }

    async fn toggle_security(&self, enable: bool) -> Result<(), AppError> {
        crate::services::api::chat::toggle_security(self, enable).await
    }

    async fn get_system_prompt(&self) -> Result<String, AppError> {
        crate::services::api::chat::get_system_prompt(self).await
    }
}
