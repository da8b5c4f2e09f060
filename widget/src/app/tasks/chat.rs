//! # Conversation Session Tasks
//!
//! The conversation lifecycle: chat turns, reset, security toggle, and
//! system prompt retrieval.

use crate::app::events::AppEvent;
use crate::app::handlers::suggestions;
use crate::app::state::{AppState, ChatMessage};
use crate::core::service::ChatService;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::chat::ChatRequest;
use std::sync::Arc;

/// Accepted sends between suggestion-chip rotations
const SENDS_PER_ROTATION: u32 = 3;

/// Send one chat turn from the current input field.
///
/// Preconditions: trimmed input non-empty and no turn in flight. Violations
/// are silently dropped - a deliberate debounce, not a queue. An accepted
/// send appends the user message, clears the input, raises the typing flag,
/// and spawns exactly one `POST /chat`.
pub(crate) fn send_turn(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, request) = {
        let mut guard = state.write();
        let message = guard.input.trim().to_string();
        if message.is_empty() || guard.visual.typing {
            return;
        }

        let state = &mut *guard;
        state.visual.typing = true;
        state.input.clear();
        state.messages.push(ChatMessage::user(message.clone()));
        state.accepted_sends += 1;

        if state.accepted_sends % SENDS_PER_ROTATION == 0 {
            let chips = suggestions::rotate(state.variant.quick_actions(), &mut state.rng);
            state.suggestions = chips;
        }

        let request = ChatRequest {
            message,
            session_id: state.session_id.clone(),
            use_rag: true,
        };
        (state.api_client.clone(), request)
    };

    let user_text = request.message.clone();
    match api_client {
        Some(api_client) => {
            TOKIO_RT.spawn(async move {
                let result = api_client.send_chat(request).await.map_err(|e| e.to_string());
                let _ = event_tx.send(AppEvent::ChatTurnResult { user_text, result }).await;
            });
        }
        None => {
            // Still settle the turn so the typing flag is released
            let _ = event_tx.try_send(AppEvent::ChatTurnResult {
                user_text,
                result: Err("API client not available".to_string()),
            });
        }
    }
}

/// Reset the conversation.
///
/// The local clear happens when the settlement event arrives, on both arms -
/// it is not gated on the server acknowledging.
pub(crate) fn reset(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, session_id) = {
        let state = state.read();
        (state.api_client.clone(), state.session_id.clone())
    };

    match api_client {
        Some(api_client) => {
            TOKIO_RT.spawn(async move {
                let result = api_client
                    .reset_session(session_id)
                    .await
                    .map_err(|e| e.to_string());
                let _ = event_tx.send(AppEvent::ResetResult(result)).await;
            });
        }
        None => {
            let _ = event_tx.try_send(AppEvent::ResetResult(Err(
                "API client not available".to_string(),
            )));
        }
    }
}

/// Flip the local security toggle and inform the backend.
///
/// The UI label follows the local boolean immediately; a backend failure is
/// logged, never rolled back.
pub(crate) fn toggle_security(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, enable) = {
        let mut state = state.write();
        state.security_enabled = !state.security_enabled;
        (state.api_client.clone(), state.security_enabled)
    };

    tracing::info!(enable = enable, "Security toggle flipped locally");

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let result = api_client
                .toggle_security(enable)
                .await
                .map_err(|e| e.to_string());
            let _ = event_tx.send(AppEvent::SecurityToggleResult(result)).await;
        });
    }
}

/// Fetch the backend's system prompt for the reveal panel.
pub(crate) fn fetch_system_prompt(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let state = state.read();
        state.api_client.clone()
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let result = api_client
                .get_system_prompt()
                .await
                .map_err(|e| e.to_string());
            let _ = event_tx.send(AppEvent::SystemPromptResult(result)).await;
        });
    }
}
