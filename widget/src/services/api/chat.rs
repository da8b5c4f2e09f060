//! # Chat Endpoints
//!
//! Handles the conversation lifecycle: turns, reset, security toggle, and
//! system prompt retrieval.

use super::client::ApiClient;
use crate::core::error::AppError;
use shared::dto::chat::{
    ChatRequest, ChatResponse, ErrorResponse, ResetRequest, SystemPromptResponse,
    ToggleSecurityRequest,
};

/// Send one chat turn to the backend.
#[tracing::instrument(skip(client, request), fields(session_id = %request.session_id))]
pub async fn send_chat(client: &ApiClient, request: ChatRequest) -> Result<ChatResponse, AppError> {
    tracing::info!(message_len = request.message.len(), "Sending chat turn");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/chat", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Chat network error");
            AppError::Api(format!("Network error: {}", e))
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<ChatResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Chat response parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        });

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Chat turn completed");
        }
        result
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("Backend returned status {}", status.as_u16()));

        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Chat turn failed"
        );
        Err(AppError::Api(error))
    }
}

/// Clear the server-side conversation for a session.
#[tracing::instrument(skip(client))]
pub async fn reset_session(client: &ApiClient, session_id: String) -> Result<(), AppError> {
    let request = ResetRequest { session_id };

    let response = client
        .client
        .post(format!("{}/reset", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| AppError::Api(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        tracing::info!("Conversation reset acknowledged");
        Ok(())
    } else {
        Err(AppError::Api(format!(
            "Backend returned status {}",
            response.status().as_u16()
        )))
    }
}

/// Enable or disable the backend's demo guardrails.
#[tracing::instrument(skip(client))]
pub async fn toggle_security(client: &ApiClient, enable: bool) -> Result<(), AppError> {
    let request = ToggleSecurityRequest { enable };

    let response = client
        .client
        .post(format!("{}/toggle_security", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| AppError::Api(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        tracing::info!(enable = enable, "Security toggle acknowledged");
        Ok(())
    } else {
        Err(AppError::Api(format!(
            "Backend returned status {}",
            response.status().as_u16()
        )))
    }
}

/// Fetch the backend's system prompt text.
#[tracing::instrument(skip(client))]
pub async fn get_system_prompt(client: &ApiClient) -> Result<String, AppError> {
    let response = client
        .client
        .get(format!("{}/get_context", ApiClient::base_url()))
        .send()
        .await
        .map_err(|e| AppError::Api(format!("Network error: {}", e)))?;

    let status = response.status();
    if status.is_success() {
        let parsed = response
            .json::<SystemPromptResponse>()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))?;
        Ok(parsed.system_prompt)
    } else {
        Err(AppError::Api(format!(
            "Backend returned status {}",
            status.as_u16()
        )))
    }
}
