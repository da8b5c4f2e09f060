//! # Widget Controller Handlers
//!
//! Handlers for the widget's visual state: open/minimize, expand, the
//! startup attention nudge, and delayed input population.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Delay before a pre-filled message lands in the input field
const POPULATE_DELAY: Duration = Duration::from_millis(300);

/// Delay before the one-shot startup nudge fires
const NUDGE_DELAY: Duration = Duration::from_secs(5);

/// Flip between the open panel and the floating bubble.
///
/// Opening clears the attention dot and focuses the input; closing hands
/// visibility over to the bubble.
pub(crate) fn toggle(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.visual.minimized = !state.visual.minimized;
    state.visual.notification = false;
    if !state.visual.minimized {
        state.visual.focus_input = true;
    }
}

/// Flip between the regular and expanded panel sizes.
///
/// Has no effect on the session or transcript.
pub(crate) fn toggle_expand(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.visual.expanded = !state.visual.expanded;
    // Keep focus on input
    state.visual.focus_input = true;
}

/// Open the widget (if minimized) and, after a short delay, pre-fill the
/// input with `message`. Never auto-sends.
pub(crate) fn open_with_message(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    message: String,
) {
    {
        let mut state = state.write();
        if state.visual.minimized {
            state.visual.minimized = false;
            state.visual.notification = false;
            state.visual.focus_input = true;
        }
    }

    // Fire-once, uncancelled; losing it at shutdown is harmless
    TOKIO_RT.spawn(async move {
        tokio::time::sleep(POPULATE_DELAY).await;
        let _ = event_tx.send(AppEvent::PopulateInput(message)).await;
    });
}

/// Schedule the one-shot startup nudge. The event handler raises the bubble
/// dot only if the widget is still minimized when the timer fires.
pub(crate) fn schedule_nudge(event_tx: Sender<AppEvent>) {
    TOKIO_RT.spawn(async move {
        tokio::time::sleep(NUDGE_DELAY).await;
        let _ = event_tx.send(AppEvent::NudgeTimerFired).await;
    });
}
