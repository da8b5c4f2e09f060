//! # Event Handler
//!
//! Handles async event results from background tasks and one-shot timers,
//! updating application state accordingly. Each event takes the write lock
//! briefly and releases it before returning.

use crate::app::state::{ChatMessage, WidgetVariant};
use crate::app::{App, AppEvent};
use shared::dto::chat::ChatResponse;

/// Fixed reply appended when a turn fails. The failed turn is dropped
/// permanently; the user must re-type it.
pub(crate) const TURN_ERROR_REPLY: &str =
    "Sorry, I encountered an error. Please try again later.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ChatTurnResult { user_text, result } => {
                self.handle_chat_turn_result(user_text, result);
            }
            AppEvent::ResetResult(result) => {
                self.handle_reset_result(result);
            }
            AppEvent::SecurityToggleResult(result) => {
                self.handle_security_toggle_result(result);
            }
            AppEvent::SystemPromptResult(result) => {
                self.handle_system_prompt_result(result);
            }
            AppEvent::NudgeTimerFired => {
                self.handle_nudge_timer();
            }
            AppEvent::PopulateInput(text) => {
                self.handle_populate_input(text);
            }
        }
    }
}

impl App {
    fn handle_chat_turn_result(&mut self, user_text: String, result: Result<ChatResponse, String>) {
        tracing::info!(event = "ChatTurnResult", success = result.is_ok(), "Processing chat turn result");

        let mut guard = self.state.write();
        let state = &mut *guard;
        match result {
            Ok(response) => {
                state.messages.push(ChatMessage::assistant_flagged(
                    response.response.clone(),
                    response.exploited,
                ));

                if state.variant == WidgetVariant::SecurityDemo {
                    state.indicators.apply_turn(&user_text, &response);
                }

                // A reply landing while minimized raises the bubble dot
                if state.visual.minimized {
                    state.visual.notification = true;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Chat turn failed");
                state.messages.push(ChatMessage::assistant(TURN_ERROR_REPLY));
            }
        }

        // Send affordances come back on both arms
        state.visual.typing = false;
        state.visual.focus_input = true;
    }

    fn handle_reset_result(&mut self, result: Result<(), String>) {
        if let Err(err) = &result {
            // Local clear is not gated on the server acknowledging
            tracing::warn!(error = %err, "Reset request failed; clearing locally anyway");
        }

        let mut state = self.state.write();
        state.messages.clear();
        state.indicators.reset();
        state.system_prompt = None;
    }

    fn handle_security_toggle_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => tracing::info!("Backend acknowledged security toggle"),
            Err(err) => {
                // No rollback: the label keeps following the local boolean
                tracing::warn!(error = %err, "Security toggle not acknowledged by backend");
            }
        }
    }

    fn handle_system_prompt_result(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        match result {
            Ok(prompt) => {
                state.system_prompt = Some(prompt);
                state.indicators.mark_prompt_revealed();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch system prompt");
                state.pending_notifications.push((
                    "error".to_string(),
                    "Could not fetch the system prompt.".to_string(),
                ));
            }
        }
    }

    fn handle_nudge_timer(&mut self) {
        let mut state = self.state.write();
        if state.visual.minimized {
            state.visual.notification = true;
        }
    }

    fn handle_populate_input(&mut self, text: String) {
        let mut state = self.state.write();
        state.input = text;
        state.visual.focus_input = true;
    }
}
